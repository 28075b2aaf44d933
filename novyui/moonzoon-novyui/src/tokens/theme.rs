// Theme state shared by every component
// Light/dark only; colors are derived from it reactively

use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

const THEME_STORAGE_KEY: &str = "novyui-theme";

static THEME: Lazy<Mutable<Theme>> = Lazy::new(|| Mutable::new(Theme::Light));

/// Initialize the theme. Without an explicit choice the last theme stored in
/// localStorage is restored, falling back to light.
pub fn init_theme(initial_theme: Option<Theme>) {
    let theme = initial_theme.unwrap_or_else(|| {
        let stored = local_storage()
            .get(THEME_STORAGE_KEY)
            .unwrap_or(Ok(String::new()))
            .unwrap_or_default();
        match stored.as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    });
    THEME.set_neq(theme);
}

/// Current theme as a signal for reactive styling
pub fn theme() -> impl Signal<Item = Theme> {
    THEME.signal()
}

pub fn current_theme() -> Theme {
    THEME.get()
}

/// Set and persist the theme
pub fn set_theme(new_theme: Theme) {
    THEME.set_neq(new_theme);
    let stored = match new_theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    };
    if let Err(error) = local_storage().insert(THEME_STORAGE_KEY, stored) {
        zoon::eprintln!("Failed to persist theme: {error:?}");
    }
}

pub fn toggle_theme() {
    set_theme(match current_theme() {
        Theme::Light => Theme::Dark,
        Theme::Dark => Theme::Light,
    });
}
