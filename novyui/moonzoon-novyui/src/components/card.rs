// Card Component
// Container component for grouping related content

use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardVariant {
    Default,    // Standard card with border
    Outlined,   // Card with prominent border
    Filled,     // Card with background fill
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardSize {
    Small,      // Compact padding
    Medium,     // Standard padding
    Large,      // Spacious padding
}

pub struct CardBuilder {
    variant: CardVariant,
    size: CardSize,
    title: Option<String>,
    description: Option<String>,
    body: Option<RawElOrText>,
    footer: Option<RawElOrText>,
    on_click: Option<Box<dyn Fn()>>,
}

impl CardBuilder {
    pub fn new() -> Self {
        Self {
            variant: CardVariant::Default,
            size: CardSize::Medium,
            title: None,
            description: None,
            body: None,
            footer: None,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: CardSize) -> Self {
        self.size = size;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn body(mut self, body: impl Element) -> Self {
        self.body = Some(body.unify());
        self
    }

    pub fn footer(mut self, footer: impl Element) -> Self {
        self.footer = Some(footer.unify());
        self
    }

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let padding = match self.size {
            CardSize::Small => SPACING_12,
            CardSize::Medium => SPACING_16,
            CardSize::Large => SPACING_24,
        };

        let variant = self.variant;
        let border_width = if variant == CardVariant::Outlined { 2 } else { 1 };
        let border_color = match variant {
            CardVariant::Outlined => border_strong().boxed_local(),
            _ => border().boxed_local(),
        };
        let background = match variant {
            CardVariant::Filled => surface_muted().boxed_local(),
            _ => surface_raised().boxed_local(),
        };

        let header = (self.title.is_some() || self.description.is_some()).then(|| {
            Column::new()
                .s(Gap::new().y(SPACING_4))
                .item(self.title.map(|title| {
                    El::new()
                        .s(Font::new()
                            .size(FONT_SIZE_18)
                            .weight(FontWeight::Number(FONT_WEIGHT_6))
                            .color_signal(text()))
                        .child(title)
                }))
                .item(self.description.map(|description| {
                    El::new()
                        .s(Font::new().size(FONT_SIZE_14).color_signal(text_muted()))
                        .child(description)
                }))
        });

        let mut card = Column::new()
            .s(Padding::all(padding))
            .s(Gap::new().y(SPACING_12))
            .s(RoundedCorners::all(CORNER_RADIUS_8))
            .s(Background::new().color_signal(background))
            .s(Borders::all_signal(
                border_color.map(move |color| Border::new().width(border_width).color(color))
            ))
            .s(transition_colors())
            .item(header)
            .item(self.body)
            .item(self.footer.map(|footer| {
                Row::new()
                    .s(Gap::new().x(SPACING_8))
                    .s(Align::new().right())
                    .item(footer)
            }));

        if let Some(on_click) = self.on_click {
            card = card
                .s(Cursor::new(CursorIcon::Pointer))
                .on_click(move || on_click());
        }
        card
    }
}

// Convenience function
pub fn card() -> CardBuilder {
    CardBuilder::new()
}
