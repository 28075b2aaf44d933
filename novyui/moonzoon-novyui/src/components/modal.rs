// Modal Component
// Centered dialog over a dimmed backdrop; Escape or a backdrop click closes it

use crate::tokens::*;
use std::rc::Rc;
use zoon::events::{Click, KeyDown};
use zoon::*;

pub struct ModalBuilder {
    is_open: Mutable<bool>,
    title: Option<String>,
    body: Option<Rc<dyn Fn() -> RawElOrText>>,
    footer: Option<Rc<dyn Fn() -> RawElOrText>>,
    width: u32,
    close_on_backdrop: bool,
    on_close: Option<Rc<dyn Fn()>>,
}

impl ModalBuilder {
    /// `is_open` is owned by the caller; the modal renders while it is `true`
    /// and sets it back to `false` when dismissed.
    pub fn new(is_open: Mutable<bool>) -> Self {
        Self {
            is_open,
            title: None,
            body: None,
            footer: None,
            width: 480,
            close_on_backdrop: true,
            on_close: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Body content, rebuilt every time the modal opens
    pub fn body<E: Element>(mut self, body: impl Fn() -> E + 'static) -> Self {
        self.body = Some(Rc::new(move || body().unify()));
        self
    }

    pub fn footer<E: Element>(mut self, footer: impl Fn() -> E + 'static) -> Self {
        self.footer = Some(Rc::new(move || footer().unify()));
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn close_on_backdrop(mut self, close_on_backdrop: bool) -> Self {
        self.close_on_backdrop = close_on_backdrop;
        self
    }

    pub fn on_close<F>(mut self, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_close = Some(Rc::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let is_open = self.is_open;
        let on_close = self.on_close;
        let close: Rc<dyn Fn()> = Rc::new(clone!((is_open) move || {
            if is_open.get() {
                is_open.set(false);
                if let Some(on_close) = &on_close {
                    on_close();
                }
            }
        }));

        let title = self.title;
        let body = self.body;
        let footer = self.footer;
        let width = self.width;
        let close_on_backdrop = self.close_on_backdrop;

        El::new().child_signal(is_open.signal().map_true(move || {
            dialog(title.clone(), body.clone(), footer.clone(), width, close.clone(), close_on_backdrop)
        }))
    }
}

fn dialog(
    title: Option<String>,
    body: Option<Rc<dyn Fn() -> RawElOrText>>,
    footer: Option<Rc<dyn Fn() -> RawElOrText>>,
    width: u32,
    close: Rc<dyn Fn()>,
    close_on_backdrop: bool,
) -> impl Element {
    let header = Row::new()
        .s(Width::fill())
        .s(Align::new().center_y())
        .item(
            El::new()
                .s(Width::fill())
                .s(Font::new()
                    .size(FONT_SIZE_18)
                    .weight(FontWeight::Number(FONT_WEIGHT_6))
                    .color_signal(text()))
                .child(title.unwrap_or_default())
        )
        .item(
            El::new()
                .s(Padding::all(SPACING_4))
                .s(Cursor::new(CursorIcon::Pointer))
                .s(Font::new().size(FONT_SIZE_16).color_signal(text_muted()))
                .update_raw_el(|raw_el| raw_el.attr("aria-label", "Close"))
                .child("✕")
                .on_click(clone!((close) move || close()))
        );

    let panel = Column::new()
        .s(Width::fill().max(width))
        .s(Padding::all(SPACING_20))
        .s(Gap::new().y(SPACING_16))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Background::new().color_signal(surface_raised()))
        .s(Borders::all_signal(border().map(|color| Border::new().width(1).color(color))))
        .s(Shadows::new([Shadow::new().y(12).blur(32).spread(-8).color("oklch(10% 0.05 255 / 0.35)")]))
        .update_raw_el(|raw_el| {
            raw_el
                .attr("role", "dialog")
                .attr("aria-modal", "true")
                // Clicks inside the panel never reach the backdrop
                .event_handler(|event: Click| event.stop_propagation())
        })
        .item(header)
        .item(body.map(|body| body()))
        .item(footer.map(|footer| {
            Row::new()
                .s(Align::new().right())
                .s(Gap::new().x(SPACING_8))
                .item(footer())
        }));

    El::new()
        .s(Width::fill())
        .s(Height::screen())
        .s(Background::new().color_signal(overlay()))
        .s(Align::center())
        .s(Padding::all(SPACING_16))
        .update_raw_el(move |raw_el| {
            raw_el
                .style("position", "fixed")
                .style("inset", "0")
                .style("z-index", Z_INDEX_MODAL)
                .event_handler(clone!((close) move |_event: Click| {
                    if close_on_backdrop {
                        close();
                    }
                }))
                .global_event_handler(move |event: KeyDown| {
                    if event.key() == "Escape" {
                        close();
                    }
                })
        })
        .child(panel)
}

// Convenience function
pub fn modal(is_open: Mutable<bool>) -> ModalBuilder {
    ModalBuilder::new(is_open)
}
