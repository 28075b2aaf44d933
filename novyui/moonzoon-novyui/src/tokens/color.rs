// Color tokens
// Each role resolves to a light/dark pair through the theme signal

use super::theme::{theme, Theme};
use zoon::*;

fn themed(light: &'static str, dark: &'static str) -> impl Signal<Item = &'static str> {
    theme().map(move |t| match t {
        Theme::Light => light,
        Theme::Dark => dark,
    })
}

// Surfaces
pub fn surface_raised() -> impl Signal<Item = &'static str> {
    themed("oklch(100% 0 0)", "oklch(18% 0.03 255)")
}

pub fn surface_muted() -> impl Signal<Item = &'static str> {
    themed("oklch(96% 0.035 255)", "oklch(22% 0.04 255)")
}

pub fn overlay() -> impl Signal<Item = &'static str> {
    themed("oklch(20% 0.02 255 / 0.45)", "oklch(0% 0 0 / 0.6)")
}

// Borders
pub fn border() -> impl Signal<Item = &'static str> {
    themed("oklch(90% 0.05 250)", "oklch(30% 0.05 250)")
}

pub fn border_strong() -> impl Signal<Item = &'static str> {
    themed("oklch(75% 0.07 255)", "oklch(45% 0.07 255)")
}

// Text
pub fn text() -> impl Signal<Item = &'static str> {
    themed("oklch(30% 0.07 255)", "oklch(96% 0.035 255)")
}

pub fn text_muted() -> impl Signal<Item = &'static str> {
    themed("oklch(55% 0.07 255)", "oklch(70% 0.05 255)")
}

pub fn text_disabled() -> impl Signal<Item = &'static str> {
    themed("oklch(70% 0.04 255)", "oklch(45% 0.04 255)")
}

pub fn text_on_accent() -> impl Signal<Item = &'static str> {
    themed("oklch(99% 0.01 255)", "oklch(12% 0.025 255)")
}

// Accent (primary)
pub fn accent_subtle() -> impl Signal<Item = &'static str> {
    themed("oklch(95% 0.03 250)", "oklch(25% 0.03 250)")
}

pub fn accent() -> impl Signal<Item = &'static str> {
    themed("oklch(55% 0.16 250)", "oklch(65% 0.16 250)")
}

pub fn accent_strong() -> impl Signal<Item = &'static str> {
    themed("oklch(45% 0.16 250)", "oklch(75% 0.16 250)")
}

// Status
pub fn success_subtle() -> impl Signal<Item = &'static str> {
    themed("oklch(96% 0.04 145)", "oklch(22% 0.04 145)")
}

pub fn success() -> impl Signal<Item = &'static str> {
    themed("oklch(55% 0.13 145)", "oklch(70% 0.13 145)")
}

pub fn warning_subtle() -> impl Signal<Item = &'static str> {
    themed("oklch(97% 0.05 85)", "oklch(24% 0.05 85)")
}

pub fn warning() -> impl Signal<Item = &'static str> {
    themed("oklch(60% 0.19 85)", "oklch(75% 0.19 85)")
}

pub fn error_subtle() -> impl Signal<Item = &'static str> {
    themed("oklch(98% 0.03 30)", "oklch(16% 0.03 30)")
}

pub fn error() -> impl Signal<Item = &'static str> {
    themed("oklch(50% 0.21 30)", "oklch(70% 0.21 30)")
}

pub fn error_strong() -> impl Signal<Item = &'static str> {
    themed("oklch(40% 0.21 30)", "oklch(80% 0.21 30)")
}

pub const TRANSPARENT: &str = "transparent";

pub fn transparent() -> impl Signal<Item = &'static str> {
    themed(TRANSPARENT, TRANSPARENT)
}
