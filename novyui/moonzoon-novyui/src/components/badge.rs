// Badge Component
// Small pill-shaped status label, optionally removable

use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BadgeVariant {
    Default,
    Primary,
    Success,
    Warning,
    Error,
    Outline,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BadgeSize {
    Small,
    Medium,
}

pub struct BadgeBuilder {
    text: String,
    variant: BadgeVariant,
    size: BadgeSize,
    on_remove: Option<Box<dyn Fn()>>,
}

impl BadgeBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: BadgeVariant::Default,
            size: BadgeSize::Medium,
            on_remove: None,
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    /// Shows a remove (✕) control that calls `handler`
    pub fn on_remove<F>(mut self, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_remove = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let (padding_x, padding_y, font_size) = match self.size {
            BadgeSize::Small => (SPACING_6, SPACING_2, FONT_SIZE_12),
            BadgeSize::Medium => (SPACING_8, SPACING_4, FONT_SIZE_14),
        };

        let background_color = self.background_color();
        let text_color = self.text_color();
        let border = self.border();

        let remove_button = self.on_remove.map(|on_remove| {
            El::new()
                .s(Cursor::new(CursorIcon::Pointer))
                .s(Padding::new().x(SPACING_2))
                .s(RoundedCorners::all_max())
                .s(Font::new().size(font_size))
                .update_raw_el(|raw_el| raw_el.attr("aria-label", "Remove"))
                .child("✕")
                .on_click(move || on_remove())
        });

        El::new()
            .s(Padding::new().x(padding_x).y(padding_y))
            .s(RoundedCorners::all_max())
            .s(Align::new().center_y())
            .s(Font::new()
                .size(font_size)
                .weight(FontWeight::Number(FONT_WEIGHT_6))
                .no_wrap()
                .color_signal(text_color))
            .s(Background::new().color_signal(background_color))
            .s(Borders::all_signal(border))
            .s(transition_colors())
            .child(
                Row::new()
                    .s(Gap::new().x(SPACING_4))
                    .s(Align::new().center_y())
                    .item(Text::new(&self.text))
                    .item(remove_button)
            )
    }

    fn background_color(&self) -> impl Signal<Item = &'static str> + use<> {
        match self.variant {
            BadgeVariant::Default => surface_muted().boxed_local(),
            BadgeVariant::Primary => accent_subtle().boxed_local(),
            BadgeVariant::Success => success_subtle().boxed_local(),
            BadgeVariant::Warning => warning_subtle().boxed_local(),
            BadgeVariant::Error => error_subtle().boxed_local(),
            BadgeVariant::Outline => transparent().boxed_local(),
        }
    }

    fn text_color(&self) -> impl Signal<Item = &'static str> + use<> {
        match self.variant {
            BadgeVariant::Default | BadgeVariant::Outline => text().boxed_local(),
            BadgeVariant::Primary => accent_strong().boxed_local(),
            BadgeVariant::Success => success().boxed_local(),
            BadgeVariant::Warning => warning().boxed_local(),
            BadgeVariant::Error => error().boxed_local(),
        }
    }

    fn border(&self) -> impl Signal<Item = Border> + use<> {
        let color = match self.variant {
            BadgeVariant::Outline => border_strong().boxed_local(),
            _ => transparent().boxed_local(),
        };
        color.map(|color| Border::new().width(1).color(color))
    }
}

// Convenience function
pub fn badge(text: impl Into<String>) -> BadgeBuilder {
    BadgeBuilder::new(text)
}
