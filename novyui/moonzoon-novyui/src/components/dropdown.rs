// Dropdown Component
// Trigger plus option list, keyboard navigable, emits the selected value

use crate::tokens::*;
use std::rc::Rc;
use zoon::*;

#[derive(Clone, Debug, PartialEq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

pub struct DropdownBuilder {
    options: Vec<DropdownOption>,
    selected_value: Option<String>,
    placeholder: String,
    label: Option<String>,
    disabled: bool,
    min_width: u32,
    on_change: Option<Rc<dyn Fn(String)>>,
}

impl DropdownBuilder {
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            selected_value: None,
            placeholder: "Select an option...".to_string(),
            label: None,
            disabled: false,
            min_width: 200,
            on_change: None,
        }
    }

    pub fn options(mut self, options: impl IntoIterator<Item = DropdownOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(DropdownOption::new(value, label));
        self
    }

    pub fn selected(mut self, value: impl Into<String>) -> Self {
        self.selected_value = Some(value.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn min_width(mut self, width: u32) -> Self {
        self.min_width = width;
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(String) + 'static,
    {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let options = Rc::new(self.options);
        let selected_value = Mutable::new(self.selected_value);
        let is_open = Mutable::new(false);
        let highlighted = Mutable::new(None::<usize>);
        let disabled = self.disabled;
        let on_change = self.on_change;
        let placeholder = self.placeholder;

        let select: Rc<dyn Fn(String)> = Rc::new(clone!((selected_value, is_open, on_change) move |value: String| {
            selected_value.set_neq(Some(value.clone()));
            is_open.set(false);
            if let Some(on_change) = &on_change {
                on_change(value);
            }
        }));

        let trigger = Row::new()
            .s(Width::default().min(self.min_width))
            .s(Padding::new().x(SPACING_12).y(SPACING_8))
            .s(Gap::new().x(SPACING_8))
            .s(RoundedCorners::all(CORNER_RADIUS_4))
            .s(Borders::all_signal(map_ref! {
                let is_open = is_open.signal(),
                let idle = border_strong(),
                let active = accent() =>
                Border::new().width(1).color(if *is_open { *active } else { *idle })
            }))
            .s(Background::new().color_signal(if disabled {
                surface_muted().boxed_local()
            } else {
                surface_raised().boxed_local()
            }))
            .s(Cursor::new(if disabled { CursorIcon::NotAllowed } else { CursorIcon::Pointer }))
            .s(Align::new().center_y())
            .s(transition_colors())
            .item(
                El::new()
                    .s(Width::fill())
                    .s(Font::new().size(FONT_SIZE_14).color_signal(map_ref! {
                        let selected = selected_value.signal_ref(Option::is_some),
                        let text_color = text(),
                        let muted_color = text_muted() =>
                        if *selected && !disabled { *text_color } else { *muted_color }
                    }))
                    .child_signal(selected_value.signal_cloned().map(clone!((options) move |selected| {
                        selected
                            .and_then(|value| options.iter().find(|option| option.value == value))
                            .map(|option| option.label.clone())
                            .unwrap_or_else(|| placeholder.clone())
                    })))
            )
            .item(
                El::new()
                    .s(Font::new().size(FONT_SIZE_12).color_signal(text_muted()))
                    .child_signal(is_open.signal().map(|open| if open { "▴" } else { "▾" }))
            )
            .update_raw_el(clone!((options, is_open, highlighted, select) move |raw_el| {
                raw_el
                    .attr("tabindex", "0")
                    .attr("role", "combobox")
                    .attr_signal("aria-expanded", is_open.signal().map(|open| open.to_string()))
                    .event_handler(move |event: events::KeyDown| {
                        let key = event.key();
                        if disabled || !consumes_key(&key) {
                            return;
                        }
                        // Space and the arrows must not scroll the page
                        event.prevent_default();
                        match key.as_str() {
                            "ArrowDown" => {
                                is_open.set_neq(true);
                                highlighted.set(step_enabled(&options, highlighted.get(), 1));
                            }
                            "ArrowUp" => {
                                is_open.set_neq(true);
                                highlighted.set(step_enabled(&options, highlighted.get(), -1));
                            }
                            "Enter" | " " => {
                                if !is_open.get() {
                                    is_open.set(true);
                                } else if let Some(option) = highlighted.get().and_then(|index| options.get(index)) {
                                    select(option.value.clone());
                                }
                            }
                            "Escape" => is_open.set(false),
                            _ => {}
                        }
                    })
            }))
            .on_click(clone!((is_open) move || {
                if !disabled {
                    is_open.set_neq(!is_open.get());
                }
            }));

        let container = trigger
            .element_below_signal(is_open.signal().map_true(clone!((options, selected_value, highlighted, select) move || {
                Column::new()
                    .s(Width::fill())
                    .s(Transform::new().move_down(4))
                    .s(Padding::new().y(SPACING_4))
                    .s(Background::new().color_signal(surface_raised()))
                    .s(Borders::all_signal(border().map(|color| Border::new().width(1).color(color))))
                    .s(RoundedCorners::all(CORNER_RADIUS_4))
                    .s(Shadows::new([Shadow::new().y(4).blur(8).spread(-2).color("oklch(20% 0.05 255 / 0.2)")]))
                    .s(Height::default().max(280))
                    .s(Scrollbars::y_and_clip_x())
                    .update_raw_el(|raw_el| raw_el.attr("role", "listbox").style("z-index", Z_INDEX_POPOVER))
                    .items(options.iter().enumerate().map(|(index, option)| {
                        option_element(index, option, &selected_value, &highlighted, select.clone())
                    }))
            })))
            .on_click_outside(clone!((is_open) move || is_open.set(false)));

        match self.label {
            Some(label) => Column::new()
                .s(Gap::new().y(SPACING_4))
                .item(
                    El::new()
                        .s(Font::new()
                            .size(FONT_SIZE_14)
                            .weight(FontWeight::Number(FONT_WEIGHT_5))
                            .color_signal(text()))
                        .child(label)
                )
                .item(container)
                .unify(),
            None => container.unify(),
        }
    }
}

fn option_element(
    index: usize,
    option: &DropdownOption,
    selected_value: &Mutable<Option<String>>,
    highlighted: &Mutable<Option<usize>>,
    select: Rc<dyn Fn(String)>,
) -> impl Element + use<> {
    let value = option.value.clone();
    let option_disabled = option.disabled;
    let selected_signal = selected_value.signal_ref(clone!((value) move |selected| selected.as_deref() == Some(value.as_str())));

    El::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_12).y(SPACING_8))
        .s(Font::new().size(FONT_SIZE_14).color_signal(if option_disabled {
            text_disabled().boxed_local()
        } else {
            text().boxed_local()
        }))
        .s(Cursor::new(if option_disabled { CursorIcon::NotAllowed } else { CursorIcon::Pointer }))
        .s(Background::new().color_signal(map_ref! {
            let is_selected = selected_signal,
            let is_highlighted = highlighted.signal_ref(move |highlighted| *highlighted == Some(index)),
            let subtle = accent_subtle(),
            let hover = surface_muted() =>
            if *is_selected { *subtle } else if *is_highlighted { *hover } else { TRANSPARENT }
        }))
        .update_raw_el(|raw_el| raw_el.attr("role", "option"))
        .on_hovered_change(clone!((highlighted) move |hovered| {
            if hovered && !option_disabled {
                highlighted.set(Some(index));
            }
        }))
        .child(option.label.clone())
        .on_click(move || {
            if !option_disabled {
                select(value.clone());
            }
        })
}

/// Index of the next enabled option `direction` steps away, wrapping around
/// Keys the closed or open trigger handles itself
fn consumes_key(key: &str) -> bool {
    matches!(key, "ArrowDown" | "ArrowUp" | "Enter" | " " | "Escape")
}

fn step_enabled(options: &[DropdownOption], current: Option<usize>, direction: isize) -> Option<usize> {
    let len = options.len() as isize;
    if len == 0 {
        return None;
    }
    let mut index = current.map_or(if direction > 0 { -1 } else { len }, |index| index as isize);
    for _ in 0..len {
        index = (index + direction).rem_euclid(len);
        if !options[index as usize].disabled {
            return Some(index as usize);
        }
    }
    None
}

// Convenience functions
pub fn dropdown() -> DropdownBuilder {
    DropdownBuilder::new()
}

pub fn dropdown_option(value: impl Into<String>, label: impl Into<String>) -> DropdownOption {
    DropdownOption::new(value, label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<DropdownOption> {
        vec![
            dropdown_option("a", "A"),
            dropdown_option("b", "B").disabled(true),
            dropdown_option("c", "C"),
        ]
    }

    #[test]
    fn arrow_down_starts_at_first_enabled_option() {
        assert_eq!(step_enabled(&options(), None, 1), Some(0));
    }

    #[test]
    fn arrow_up_starts_at_last_enabled_option() {
        assert_eq!(step_enabled(&options(), None, -1), Some(2));
    }

    #[test]
    fn stepping_skips_disabled_and_wraps() {
        let options = options();
        assert_eq!(step_enabled(&options, Some(0), 1), Some(2));
        assert_eq!(step_enabled(&options, Some(2), 1), Some(0));
        assert_eq!(step_enabled(&options, Some(0), -1), Some(2));
    }

    #[test]
    fn navigation_keys_are_consumed() {
        for key in [" ", "Enter", "ArrowDown", "ArrowUp", "Escape"] {
            assert!(consumes_key(key), "{key:?}");
        }
        assert!(!consumes_key("Tab"));
        assert!(!consumes_key("a"));
    }

    #[test]
    fn nothing_to_step_to() {
        assert_eq!(step_enabled(&[], None, 1), None);
        let all_disabled = vec![dropdown_option("x", "X").disabled(true)];
        assert_eq!(step_enabled(&all_disabled, Some(0), 1), None);
    }
}
