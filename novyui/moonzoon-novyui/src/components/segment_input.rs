// One digit segment (day, month, year, hour, ...) of a date/time control.
// Shared by DateInput and TimePicker; all value logic sits in the editors.

use crate::tokens::*;
use novyui_shared::{Field, SegmentKey};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use zoon::events::KeyDown;
use zoon::*;

/// Callbacks a segment reports to its owning control
#[derive(Clone)]
pub(crate) struct SegmentHandlers {
    pub on_input: Rc<dyn Fn(Field, String)>,
    pub on_focus: Rc<dyn Fn(Field)>,
    pub on_blur: Rc<dyn Fn(Field)>,
    pub on_key: Rc<dyn Fn(Field, SegmentKey, Option<usize>)>,
}

/// Rendered text and requested focus of every segment in a control
#[derive(Clone)]
pub(crate) struct SegmentState {
    pub texts: Rc<Vec<(Field, Mutable<String>)>>,
    pub focus: Mutable<Option<Field>>,
}

impl SegmentState {
    pub fn new(fields: &[Field]) -> Self {
        Self {
            texts: Rc::new(fields.iter().map(|field| (*field, Mutable::new(String::new()))).collect()),
            focus: Mutable::new(None),
        }
    }

    pub fn text(&self, field: Field) -> Option<&Mutable<String>> {
        self.texts.iter().find(|(candidate, _)| *candidate == field).map(|(_, text)| text)
    }

    /// Always notifies, so the DOM drops characters the editor refused
    pub fn show(&self, field: Field, text: impl Into<String>) {
        if let Some(mutable) = self.text(field) {
            mutable.set(text.into());
        }
    }

    pub fn request_focus(&self, field: Option<Field>) {
        if let Some(field) = field {
            self.focus.set(Some(field));
        }
    }

    pub fn release_focus(&self, field: Field) {
        let mut focus = self.focus.lock_mut();
        if *focus == Some(field) {
            *focus = None;
        }
    }
}

pub(crate) fn segment_input<S>(
    field: Field,
    placeholder: String,
    state: &SegmentState,
    handlers: &SegmentHandlers,
    invalid: S,
    disabled: bool,
) -> impl Element + use<S>
where
    S: Signal<Item = bool> + Unpin + 'static,
{
    let segment_text = state.text(field).cloned().unwrap_or_default();
    let width = segment_width(field);
    let handlers = handlers.clone();
    let SegmentHandlers { on_input, on_focus, on_blur, on_key } = handlers;

    TextInput::new()
        .s(Width::exact(width))
        .s(Padding::new().y(SPACING_2))
        .s(Background::new().color(TRANSPARENT))
        .s(Borders::new())
        .s(Font::new()
            .size(FONT_SIZE_14)
            .family([FontFamily::new(FONT_FAMILY_MONO)])
            .center()
            .color_signal(map_ref! {
                let invalid = invalid,
                let error_color = error(),
                let text_color = text() =>
                if *invalid { *error_color } else { *text_color }
            }))
        .update_raw_el(move |raw_el| {
            let input = raw_el.dom_element();
            let raw_el = raw_el
                .attr("inputmode", "numeric")
                .attr("autocomplete", "off")
                .attr("maxlength", &field.max_digits().to_string())
                .attr("name", field.name())
                .event_handler(move |event: KeyDown| {
                    let key = SegmentKey::from_key(&event.key());
                    if key == SegmentKey::Other {
                        return;
                    }
                    let caret = input
                        .dyn_ref::<web_sys::HtmlInputElement>()
                        .and_then(|input| input.selection_start().ok().flatten())
                        .map(|caret| caret as usize);
                    on_key(field, key, caret);
                });
            if disabled { raw_el.attr("disabled", "") } else { raw_el }
        })
        .placeholder(
            Placeholder::new(placeholder)
                .s(Font::new().color_signal(text_disabled()))
        )
        .label_hidden(field.name())
        .text_signal(segment_text.signal_cloned())
        .focus_signal(state.focus.signal_ref(move |focused| *focused == Some(field)))
        .on_change(move |raw| on_input(field, raw))
        .on_focus(move || on_focus(field))
        .on_blur(move || on_blur(field))
}

fn segment_width(field: Field) -> u32 {
    match field.max_digits() {
        4 => 44,
        _ => 24,
    }
}

/// `/` or `:` between segments
pub(crate) fn separator(symbol: &'static str) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_14).color_signal(text_muted()))
        .child(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_flag_takes_any_bool_signal() {
        fn instantiate<S: Signal<Item = bool> + Unpin + 'static>(_invalid: S) {
            let _ = segment_input::<S>;
        }
        instantiate(always(false));
        instantiate(Mutable::new(false).signal());
        instantiate(Mutable::new(3u8).signal().map(|digits| digits > 2));
    }

    #[test]
    fn year_segment_is_wider() {
        assert_eq!(segment_width(Field::Year), 44);
        assert_eq!(segment_width(Field::Day), 24);
        assert_eq!(segment_width(Field::Minute), 24);
    }

    #[test]
    fn show_notifies_and_release_only_clears_own_focus() {
        let state = SegmentState::new(&Field::DATE);
        state.show(Field::Month, "07");
        assert_eq!(state.text(Field::Month).map(|text| text.get_cloned()), Some("07".to_string()));
        assert!(state.text(Field::Hour).is_none());

        state.request_focus(Some(Field::Year));
        state.release_focus(Field::Day);
        assert_eq!(state.focus.get(), Some(Field::Year));
        state.release_focus(Field::Year);
        assert_eq!(state.focus.get(), None);

        state.request_focus(None);
        assert_eq!(state.focus.get(), None);
    }
}
