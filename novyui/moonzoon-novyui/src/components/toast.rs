// Toast Component
// Stacked notifications with an auto-dismiss progress bar; click pauses the timer

use crate::tokens::*;
use futures::{select, stream::StreamExt, FutureExt};
use futures::channel::mpsc;
use novyui_shared::{remaining_percent, Toast, ToastKind, ToastQueue};
use zoon::events::Click;
use zoon::*;

const UPDATE_INTERVAL_MS: u32 = 50;

/// Handle to a toast queue. Cheap to clone; every clone drives the same
/// container.
#[derive(Clone, Default)]
pub struct Toaster {
    queue: Mutable<ToastQueue>,
    shown: MutableVec<Toast>,
}

impl Toaster {
    pub fn new(max_visible: usize) -> Self {
        Self {
            queue: Mutable::new(ToastQueue::new(max_visible)),
            shown: MutableVec::new(),
        }
    }

    pub fn push(&self, kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> u64 {
        let id = self.queue.lock_mut().push(kind, title, message);
        self.sync();
        id
    }

    /// `None` keeps the toast until it is dismissed by hand
    pub fn push_with_timeout(
        &self,
        kind: ToastKind,
        title: impl Into<String>,
        message: impl Into<String>,
        auto_dismiss_ms: Option<u32>,
    ) -> u64 {
        let id = self.queue.lock_mut().push_with_timeout(kind, title, message, auto_dismiss_ms);
        self.sync();
        id
    }

    pub fn dismiss(&self, id: u64) {
        if self.queue.lock_mut().dismiss(id) {
            self.sync();
        }
    }

    pub fn clear(&self) {
        self.queue.lock_mut().clear();
        self.sync();
    }

    pub fn pending_signal(&self) -> impl Signal<Item = usize> + use<> {
        self.queue.signal_ref(ToastQueue::pending)
    }

    // Keeps already rendered toasts (and their timers) alive
    fn sync(&self) {
        let queue = self.queue.lock_ref();
        let wanted = queue.visible();
        let mut shown = self.shown.lock_mut();
        shown.retain(|toast| wanted.iter().any(|wanted| wanted.id == toast.id));
        for toast in wanted {
            if !shown.iter().any(|shown| shown.id == toast.id) {
                shown.push_cloned(toast.clone());
            }
        }
    }
}

/// Fixed top-right stack rendering everything pushed to `toaster`
pub fn toast_container(toaster: &Toaster) -> impl Element + use<> {
    let toaster = toaster.clone();
    El::new()
        .s(Width::fill())
        .s(Align::new().top().right())
        .s(Padding::all(SPACING_16))
        .update_raw_el(|raw_el| {
            raw_el
                .style("position", "fixed")
                .style("top", "0")
                .style("right", "0")
                .style("pointer-events", "none")
                .style("z-index", Z_INDEX_TOAST)
        })
        .child(
            Column::new()
                .s(Gap::new().y(SPACING_8))
                .s(Width::exact(360))
                .update_raw_el(|raw_el| raw_el.style("pointer-events", "auto"))
                .items_signal_vec(toaster.shown.signal_vec_cloned().map(clone!((toaster) move |toast| {
                    toast_element(toast, toaster.clone())
                })))
        )
}

fn toast_element(toast: Toast, toaster: Toaster) -> impl Element {
    let progress = Mutable::new(100.0f32);
    let (click_sender, mut click_receiver) = mpsc::unbounded::<()>();
    let id = toast.id;

    let timer = toast.auto_dismiss_ms.map(|total_ms| {
        Task::start_droppable(clone!((progress, toaster) async move {
            let total_ms = total_ms as f32;
            let mut elapsed_ms = 0.0f32;
            let mut is_paused = false;
            loop {
                select! {
                    _ = Timer::sleep(UPDATE_INTERVAL_MS).fuse() => {
                        if !is_paused {
                            elapsed_ms += UPDATE_INTERVAL_MS as f32;
                            progress.set(remaining_percent(elapsed_ms, total_ms));
                            if elapsed_ms >= total_ms {
                                toaster.dismiss(id);
                                break;
                            }
                        }
                    }
                    click = click_receiver.next() => {
                        match click {
                            Some(()) => is_paused = !is_paused,
                            None => break,
                        }
                    }
                }
            }
        }))
    });
    let has_timer = timer.is_some();

    let kind = toast.kind;

    Column::new()
        .s(Width::fill())
        .s(Background::new().color_signal(kind_background(kind)))
        .s(Borders::all_signal(kind_accent(kind).map(|color| Border::new().width(1).color(color))))
        .s(RoundedCorners::all(CORNER_RADIUS_6))
        .s(Shadows::new([Shadow::new().y(2).blur(8).color("oklch(0% 0 0 / 0.1)")]))
        .s(Cursor::new(if has_timer { CursorIcon::Pointer } else { CursorIcon::Default }))
        .update_raw_el(move |raw_el| {
            let raw_el = raw_el.attr("role", "status");
            if has_timer {
                raw_el.attr("title", "Click to pause/resume auto-dismiss")
            } else {
                raw_el
            }
        })
        .on_click(move || {
            let _ = click_sender.unbounded_send(());
        })
        .item(
            Row::new()
                .s(Width::fill())
                .s(Padding::all(SPACING_12))
                .s(Gap::new().x(SPACING_8))
                .item(
                    Column::new()
                        .s(Width::fill())
                        .s(Gap::new().y(SPACING_4))
                        .item(
                            El::new()
                                .s(Font::new()
                                    .size(FONT_SIZE_14)
                                    .weight(FontWeight::Number(FONT_WEIGHT_6))
                                    .color_signal(text()))
                                .child(toast.title)
                        )
                        .item((!toast.message.is_empty()).then(|| {
                            El::new()
                                .s(Font::new().size(FONT_SIZE_14).color_signal(text_muted()).wrap_anywhere())
                                .child(toast.message)
                        }))
                )
                .item(
                    El::new()
                        .s(Font::new().size(FONT_SIZE_14).color_signal(text_muted()))
                        .s(Cursor::new(CursorIcon::Pointer))
                        .s(Padding::all(SPACING_4))
                        .s(RoundedCorners::all(CORNER_RADIUS_4))
                        .update_raw_el(clone!((toaster) move |raw_el| {
                            raw_el
                                .attr("aria-label", "Dismiss")
                                .event_handler(move |event: Click| {
                                    event.stop_propagation();
                                    toaster.dismiss(id);
                                })
                        }))
                        .child("✕")
                )
        )
        .item(has_timer.then(|| {
            El::new()
                .s(Width::fill())
                .s(Height::exact(3))
                .s(Background::new().color_signal(border()))
                .s(RoundedCorners::new().bottom_left(CORNER_RADIUS_6).bottom_right(CORNER_RADIUS_6))
                .child(
                    El::new()
                        .s(Height::fill())
                        .s(Width::percent_signal(progress.signal()))
                        .s(Background::new().color_signal(kind_accent(kind)))
                        .s(RoundedCorners::new().bottom_left(CORNER_RADIUS_6).bottom_right(CORNER_RADIUS_6))
                        .s(transition_width())
                )
        }))
        .after_remove(move |_| drop(timer))
}

fn kind_background(kind: ToastKind) -> impl Signal<Item = &'static str> {
    match kind {
        ToastKind::Info => accent_subtle().boxed_local(),
        ToastKind::Success => success_subtle().boxed_local(),
        ToastKind::Warning => warning_subtle().boxed_local(),
        ToastKind::Error => error_subtle().boxed_local(),
    }
}

fn kind_accent(kind: ToastKind) -> impl Signal<Item = &'static str> {
    match kind {
        ToastKind::Info => accent().boxed_local(),
        ToastKind::Success => success().boxed_local(),
        ToastKind::Warning => warning().boxed_local(),
        ToastKind::Error => error().boxed_local(),
    }
}
