// Button Component
// Clickable action with variant/size styling and a disabled state

use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
    Ghost,
    Destructive,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

pub struct ButtonBuilder {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    disabled_signal: Option<Box<dyn Signal<Item = bool> + Unpin>>,
    on_press: Option<Box<dyn Fn()>>,
    min_width: Option<u32>,
    title: Option<String>,
}

impl ButtonBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            disabled_signal: None,
            on_press: None,
            min_width: None,
            title: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn disabled_signal<S>(mut self, disabled_signal: S) -> Self
    where
        S: Signal<Item = bool> + Unpin + 'static,
    {
        self.disabled_signal = Some(Box::new(disabled_signal));
        self
    }

    pub fn min_width(mut self, width: u32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Native tooltip and accessible name
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_press = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let (hovered, hovered_signal) = Mutable::new_and_signal(false);
        let (focused, focused_signal) = Mutable::new_and_signal(false);

        let (padding_x, padding_y, font_size) = match self.size {
            ButtonSize::Small => (SPACING_8, SPACING_4, FONT_SIZE_12),
            ButtonSize::Medium => (SPACING_16, SPACING_8, FONT_SIZE_14),
            ButtonSize::Large => (SPACING_20, SPACING_12, FONT_SIZE_16),
        };

        let variant = self.variant;
        let disabled = self.disabled;
        let is_disabled = Mutable::new(disabled);
        let disabled_task = self.disabled_signal.map(|signal| {
            Task::start_droppable(signal.for_each(clone!((is_disabled) move |signal_disabled| {
                is_disabled.set_neq(disabled || signal_disabled);
                async {}
            })))
        });

        let bg_color_signal = match variant {
            ButtonVariant::Primary => accent().boxed_local(),
            ButtonVariant::Secondary => surface_muted().boxed_local(),
            ButtonVariant::Outline | ButtonVariant::Ghost => transparent().boxed_local(),
            ButtonVariant::Destructive => error().boxed_local(),
        };

        let hover_bg_color_signal = match variant {
            ButtonVariant::Primary => accent_strong().boxed_local(),
            ButtonVariant::Secondary => border().boxed_local(),
            ButtonVariant::Outline | ButtonVariant::Ghost => accent_subtle().boxed_local(),
            ButtonVariant::Destructive => error_strong().boxed_local(),
        };

        let text_color_signal = match variant {
            ButtonVariant::Primary | ButtonVariant::Destructive => text_on_accent().boxed_local(),
            ButtonVariant::Secondary | ButtonVariant::Outline | ButtonVariant::Ghost => accent().boxed_local(),
        };

        // 1px border always present so the size never changes
        let border_color_signal = match variant {
            ButtonVariant::Outline | ButtonVariant::Secondary => border_strong().boxed_local(),
            _ => transparent().boxed_local(),
        };

        let on_press = self.on_press;
        let title = self.title;
        let label = self.label;

        let mut button = Button::new()
            .s(Padding::new().x(padding_x).y(padding_y))
            .s(RoundedCorners::all(CORNER_RADIUS_4))
            .s(Font::new()
                .size(font_size)
                .weight(FontWeight::Number(FONT_WEIGHT_5))
                .no_wrap()
                .color_signal(map_ref! {
                    let is_disabled = is_disabled.signal(),
                    let text_color = text_color_signal,
                    let disabled_color = text_disabled() =>
                    if *is_disabled { *disabled_color } else { *text_color }
                }))
            .s(Background::new().color_signal(map_ref! {
                let is_disabled = is_disabled.signal(),
                let hovered = hovered_signal,
                let bg_color = bg_color_signal,
                let hover_bg_color = hover_bg_color_signal =>
                if *hovered && !*is_disabled { *hover_bg_color } else { *bg_color }
            }))
            .s(Borders::all_signal(border_color_signal.map(|color| Border::new().width(1).color(color))))
            .s(Outline::with_signal_self(map_ref! {
                let focused = focused_signal,
                let ring = accent_strong() =>
                focused.then(|| Outline::outer().width(2).color(*ring))
            }))
            .s(Cursor::with_signal(is_disabled.signal().map(|disabled| {
                if disabled { CursorIcon::NotAllowed } else { CursorIcon::Pointer }
            })))
            .s(transition_colors())
            .update_raw_el(clone!((is_disabled) move |raw_el| {
                raw_el.style_signal("opacity", is_disabled.signal().map(|disabled| {
                    if disabled { OPACITY_DISABLED } else { OPACITY_ENABLED }
                }))
            }))
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .on_focused_change(move |is_focused| focused.set_neq(is_focused))
            .label(label)
            .on_press(clone!((is_disabled) move || {
                if !is_disabled.get() {
                    if let Some(handler) = &on_press {
                        handler();
                    }
                }
            }))
            .after_remove(move |_| drop(disabled_task));

        if let Some(min_width) = self.min_width {
            button = button.s(Width::default().min(min_width));
        }
        if let Some(title) = title {
            button = button.update_raw_el(move |raw_el| raw_el.attr("title", &title));
        }
        button
    }
}

// Convenience function
pub fn button(label: impl Into<String>) -> ButtonBuilder {
    ButtonBuilder::new(label)
}
