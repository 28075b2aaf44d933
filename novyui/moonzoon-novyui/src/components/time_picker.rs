// TimePicker Component
// Hour / minute (/ second) segments with 12/24-hour display and Now/Clear actions

use crate::components::button::{button, ButtonSize, ButtonVariant};
use crate::components::date_input::{error_line, field_label, ChangeHandler};
use crate::components::segment_input::{segment_input, separator, SegmentHandlers, SegmentState};
use crate::tokens::*;
use novyui_shared::chrono::{Local, NaiveTime};
use novyui_shared::{
    DateFieldConfig, Field, HourCycle, QuickAction, SegmentKey, TimeChange, TimeEditor, TimeValue,
    ValueError,
};
use std::rc::Rc;
use zoon::*;

pub struct TimePickerBuilder {
    label: Option<String>,
    name: String,
    required: bool,
    hour_cycle: HourCycle,
    with_seconds: bool,
    cycle_switch: bool,
    quick_actions: bool,
    value: Option<String>,
    now: Option<NaiveTime>,
    disabled: bool,
    on_change: Option<ChangeHandler>,
}

impl TimePickerBuilder {
    pub fn new() -> Self {
        Self {
            label: None,
            name: "time".to_string(),
            required: false,
            hour_cycle: HourCycle::default(),
            with_seconds: false,
            cycle_switch: false,
            quick_actions: true,
            value: None,
            now: None,
            disabled: false,
            on_change: None,
        }
    }

    /// Takes name, label, required, quick actions, hour cycle and seconds
    pub fn config(mut self, config: &DateFieldConfig) -> Self {
        self.name = config.name.clone();
        if !config.label.is_empty() {
            self.label = Some(config.label.clone());
        }
        self.required = config.required;
        self.quick_actions = config.quick_actions;
        self.hour_cycle = config.hour_cycle;
        self.with_seconds = config.show_seconds;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn hour_cycle(mut self, hour_cycle: HourCycle) -> Self {
        self.hour_cycle = hour_cycle;
        self
    }

    pub fn with_seconds(mut self, with_seconds: bool) -> Self {
        self.with_seconds = with_seconds;
        self
    }

    /// Shows a 12h/24h switch next to the segments
    pub fn cycle_switch(mut self, cycle_switch: bool) -> Self {
        self.cycle_switch = cycle_switch;
        self
    }

    pub fn quick_actions(mut self, quick_actions: bool) -> Self {
        self.quick_actions = quick_actions;
        self
    }

    /// Initial value in 24-hour form, `HH:MM` or `HH:MM:SS`
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Pins the time `Now` inserts instead of reading the local clock
    pub fn now(mut self, now: NaiveTime) -> Self {
        self.now = Some(now);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &str) + 'static,
    {
        self.on_change = Some(Rc::new(handler));
        self
    }

    /// Canonical text of an untouched picker, `:` or `::` with seconds
    pub(crate) fn empty_value(&self) -> String {
        TimeValue::empty(self.hour_cycle, self.with_seconds).canonical()
    }

    pub fn build(mut self) -> impl Element {
        let label = self.label.take();
        let required = self.required;
        let name = self.name.clone();

        let field = match self.control() {
            Ok(control) => control.render().unify(),
            Err(error) => {
                zoon::eprintln!("TimePicker '{name}' is misconfigured: {error}");
                error_line(error.to_string()).unify()
            }
        };

        Column::new()
            .s(Gap::new().y(SPACING_4))
            .item(label.map(|label| field_label(label, required)))
            .item(field)
    }

    fn control(self) -> Result<TimeControl, ValueError> {
        let mut editor = TimeEditor::new(self.name, self.hour_cycle, self.with_seconds);
        if let Some(value) = &self.value {
            let mut parsed = TimeValue::parse(value, self.hour_cycle)?;
            if parsed.with_seconds != self.with_seconds {
                let time = parsed.to_time();
                parsed = time
                    .map(|time| TimeValue::from_time(time, self.hour_cycle, self.with_seconds))
                    .unwrap_or(parsed);
            }
            editor = editor.with_value(parsed);
        }
        Ok(TimeControl::new(
            editor,
            self.now,
            self.cycle_switch,
            self.quick_actions,
            self.disabled,
            self.on_change,
        ))
    }
}

/// Live state of one rendered time field. Clones share the same state.
#[derive(Clone)]
struct TimeControl {
    editor: Mutable<TimeEditor>,
    segments: SegmentState,
    now: Option<NaiveTime>,
    cycle_switch: bool,
    quick_actions: bool,
    disabled: bool,
    on_change: Option<ChangeHandler>,
}

impl TimeControl {
    fn new(
        editor: TimeEditor,
        now: Option<NaiveTime>,
        cycle_switch: bool,
        quick_actions: bool,
        disabled: bool,
        on_change: Option<ChangeHandler>,
    ) -> Self {
        let segments = SegmentState::new(editor.fields());
        let control = Self {
            editor: Mutable::new(editor),
            segments,
            now,
            cycle_switch,
            quick_actions,
            disabled,
            on_change,
        };
        control.refresh();
        control
    }

    fn fields(&self) -> Vec<Field> {
        self.editor.lock_ref().fields().to_vec()
    }

    fn input(&self, field: Field, raw: String) {
        let change = self.editor.lock_mut().input(field, &raw);
        self.segments.show(field, change.text.clone());
        self.segments.request_focus(change.focus);
        self.emit(&change);
    }

    fn focus(&self, field: Field) {
        self.editor.lock_mut().focus(field);
        self.segments.focus.set_neq(Some(field));
    }

    fn blur(&self, field: Field) {
        let change = self.editor.lock_mut().finish(field);
        self.segments.release_focus(field);
        if let Some(change) = change {
            self.segments.show(field, change.text.clone());
            self.emit(&change);
        }
    }

    fn key(&self, field: Field, key: SegmentKey, caret: Option<usize>) {
        let target = self.editor.lock_mut().key(field, key, caret);
        self.segments.request_focus(target);
    }

    fn quick_action(&self, action: QuickAction) {
        let now = self.now.unwrap_or_else(|| Local::now().time());
        let change = self.editor.lock_mut().quick_action(action, now);
        self.refresh();
        self.emit(&change);
    }

    fn toggle_meridiem(&self) {
        let change = self.editor.lock_mut().toggle_meridiem();
        self.emit(&change);
    }

    fn toggle_cycle(&self) {
        let change = {
            let mut editor = self.editor.lock_mut();
            let cycle = match editor.value().cycle {
                HourCycle::H12 => HourCycle::H24,
                HourCycle::H24 => HourCycle::H12,
            };
            editor.set_cycle(cycle)
        };
        self.refresh();
        self.emit(&change);
    }

    fn refresh(&self) {
        let editor = self.editor.lock_ref();
        for field in editor.fields() {
            self.segments.show(*field, editor.value().get(*field));
        }
    }

    fn emit(&self, change: &TimeChange) {
        if let Some(on_change) = &self.on_change {
            on_change(&change.name, &change.value);
        }
    }

    fn handlers(&self) -> SegmentHandlers {
        let (on_input, on_focus, on_blur, on_key) = (self.clone(), self.clone(), self.clone(), self.clone());
        SegmentHandlers {
            on_input: Rc::new(move |field, raw| on_input.input(field, raw)),
            on_focus: Rc::new(move |field| on_focus.focus(field)),
            on_blur: Rc::new(move |field| on_blur.blur(field)),
            on_key: Rc::new(move |field, key, caret| on_key.key(field, key, caret)),
        }
    }

    fn render(self) -> impl Element {
        let handlers = self.handlers();
        let disabled = self.disabled;

        let mut segments = Row::new()
            .s(Padding::new().x(SPACING_8).y(SPACING_4))
            .s(Gap::new().x(SPACING_2))
            .s(Align::new().center_y())
            .s(RoundedCorners::all(CORNER_RADIUS_4))
            .s(Background::new().color_signal(if disabled {
                surface_muted().boxed_local()
            } else {
                surface_raised().boxed_local()
            }))
            .s(Borders::all_signal(map_ref! {
                let focused = self.segments.focus.signal_ref(Option::is_some),
                let idle = border_strong(),
                let active = accent() =>
                Border::new().width(1).color(if *focused { *active } else { *idle })
            }))
            .s(transition_colors())
            .update_raw_el(|raw_el| raw_el.attr("role", "group"));

        for (index, field) in self.fields().into_iter().enumerate() {
            if index > 0 {
                segments = segments.item(separator(":"));
            }
            segments = segments.item(segment_input(
                field,
                field.placeholder().to_string(),
                &self.segments,
                &handlers,
                always(false),
                disabled,
            ));
        }

        let meridiem = {
            let control = self.clone();
            El::new().child_signal(self.editor.signal_ref(|editor| {
                let value = editor.value();
                (value.cycle == HourCycle::H12).then(|| value.meridiem)
            }).dedupe().map(move |meridiem| {
                meridiem.map(|meridiem| {
                    let control = control.clone();
                    button(meridiem.label())
                        .variant(ButtonVariant::Outline)
                        .size(ButtonSize::Small)
                        .min_width(44)
                        .title("Toggle AM/PM")
                        .disabled(disabled)
                        .on_press(move || control.toggle_meridiem())
                        .build()
                })
            }))
        };

        let cycle_switch = (self.cycle_switch && !disabled).then(|| {
            let control = self.clone();
            El::new().child_signal(self.editor.signal_ref(|editor| editor.value().cycle).dedupe().map(move |cycle| {
                let control = control.clone();
                let label = match cycle {
                    HourCycle::H12 => "12h",
                    HourCycle::H24 => "24h",
                };
                button(label)
                    .variant(ButtonVariant::Ghost)
                    .size(ButtonSize::Small)
                    .title("Switch hour cycle")
                    .on_press(move || control.toggle_cycle())
                    .build()
            }))
        });

        let quick_actions = (self.quick_actions && !disabled).then(|| {
            Row::new()
                .s(Gap::new().x(SPACING_4))
                .items(QuickAction::TIME.map(|action| {
                    let control = self.clone();
                    button(action.label())
                        .variant(ButtonVariant::Ghost)
                        .size(ButtonSize::Small)
                        .on_press(move || control.quick_action(action))
                        .build()
                }))
        });

        let name = self.editor.lock_ref().name().to_string();
        let form_value = RawHtmlEl::new("input")
            .attr("type", "hidden")
            .attr("name", &name)
            .attr_signal("value", self.editor.signal_ref(|editor| editor.canonical()));

        Column::new()
            .s(Gap::new().y(SPACING_4))
            .item(
                Row::new()
                    .s(Gap::new().x(SPACING_8))
                    .s(Align::new().center_y())
                    .item(segments)
                    .item(meridiem)
                    .item(cycle_switch)
                    .item(quick_actions)
            )
            .item(form_value)
    }
}

// Convenience function
pub fn time_picker() -> TimePickerBuilder {
    TimePickerBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_follows_the_seconds_setting() {
        assert_eq!(time_picker().empty_value(), ":");
        assert_eq!(time_picker().with_seconds(true).empty_value(), "::");
        assert_eq!(time_picker().hour_cycle(HourCycle::H12).with_seconds(true).empty_value(), "::");
    }

    #[test]
    fn config_carries_cycle_and_seconds() {
        let mut config = DateFieldConfig::new("starts_at");
        config.hour_cycle = HourCycle::H12;
        config.show_seconds = true;
        let builder = time_picker().config(&config);
        assert_eq!(builder.name, "starts_at");
        assert_eq!(builder.hour_cycle, HourCycle::H12);
        assert!(builder.with_seconds);
    }
}
