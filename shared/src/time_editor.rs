use chrono::NaiveTime;

use crate::quick_action::{apply_to_time, QuickAction};
use crate::segment::{pad_segment, sanitize_field, Field, SegmentController, SegmentKey};
use crate::time_value::{HourCycle, Meridiem, TimeValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeChange {
    pub name: String,
    pub value: String,
    pub text: String,
    pub focus: Option<Field>,
}

/// State behind an hour/minute(/second) control.
#[derive(Debug, Clone)]
pub struct TimeEditor {
    name: String,
    value: TimeValue,
    controller: SegmentController,
}

impl TimeEditor {
    pub fn new(name: impl Into<String>, cycle: HourCycle, with_seconds: bool) -> Self {
        Self {
            name: name.into(),
            value: TimeValue::empty(cycle, with_seconds),
            controller: SegmentController::time(with_seconds),
        }
    }

    pub fn with_value(mut self, value: TimeValue) -> Self {
        self.controller = SegmentController::time(value.with_seconds);
        self.value = value;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &TimeValue {
        &self.value
    }

    pub fn canonical(&self) -> String {
        self.value.canonical()
    }

    pub fn fields(&self) -> &[Field] {
        self.controller.fields()
    }

    pub fn focus(&mut self, field: Field) {
        self.controller.focus(field);
    }

    pub fn input(&mut self, field: Field, raw: &str) -> TimeChange {
        let text = sanitize_field(field, raw, self.value.cycle);
        self.value.set(field, text.clone());
        let focus = self.controller.after_input(field, &text);
        self.change(text, focus)
    }

    /// Pads the segment on blur. In 12-hour form an hour of `00` reads `12`.
    pub fn finish(&mut self, field: Field) -> Option<TimeChange> {
        let current = self.value.get(field).to_string();
        let mut finished = pad_segment(field, &current);
        if field == Field::Hour && self.value.cycle == HourCycle::H12 && finished == "00" {
            finished = "12".to_string();
        }
        if self.controller.focused() == Some(field) {
            self.controller.blur();
        }
        if finished == current {
            return None;
        }
        self.value.set(field, finished.clone());
        Some(self.change(finished, None))
    }

    pub fn key(&mut self, field: Field, key: SegmentKey, caret: Option<usize>) -> Option<Field> {
        let text = self.value.get(field).to_string();
        self.controller.on_key(field, key, &text, caret)
    }

    pub fn set_cycle(&mut self, cycle: HourCycle) -> TimeChange {
        self.value.set_cycle(cycle);
        self.change(String::new(), None)
    }

    pub fn toggle_meridiem(&mut self) -> TimeChange {
        let meridiem: Meridiem = self.value.meridiem.toggled();
        self.value.set_meridiem(meridiem);
        self.change(String::new(), None)
    }

    pub fn quick_action(&mut self, action: QuickAction, now: NaiveTime) -> TimeChange {
        apply_to_time(action, &mut self.value, now);
        self.change(String::new(), None)
    }

    fn change(&self, text: String, focus: Option<Field>) -> TimeChange {
        TimeChange {
            name: self.name.clone(),
            value: self.value.canonical(),
            text,
            focus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_advances_through_time_segments() {
        let mut editor = TimeEditor::new("starts_at", HourCycle::H24, true);
        let change = editor.input(Field::Hour, "09");
        assert_eq!(change.focus, Some(Field::Minute));
        let change = editor.input(Field::Minute, "75");
        assert_eq!(change.text, "59");
        assert_eq!(change.focus, Some(Field::Second));
        let change = editor.input(Field::Second, "3");
        assert_eq!(change.value, "09:59:3");
        let change = editor.finish(Field::Second).unwrap();
        assert_eq!(change.value, "09:59:03");
    }

    #[test]
    fn twelve_hour_editing_emits_24_hour_value() {
        let mut editor = TimeEditor::new("alarm", HourCycle::H12, false);
        editor.input(Field::Hour, "07");
        editor.input(Field::Minute, "30");
        assert_eq!(editor.canonical(), "07:30");
        let change = editor.toggle_meridiem();
        assert_eq!(change.value, "19:30");
        assert_eq!(editor.value().display(), "07:30 PM");
    }

    #[test]
    fn zero_hour_reads_twelve_in_twelve_hour_form() {
        let mut editor = TimeEditor::new("alarm", HourCycle::H12, false);
        editor.input(Field::Hour, "0");
        let change = editor.finish(Field::Hour).unwrap();
        assert_eq!(change.text, "12");
    }

    #[test]
    fn now_and_clear() {
        let mut editor = TimeEditor::new("t", HourCycle::H24, false);
        let now = NaiveTime::from_hms_opt(23, 1, 0).unwrap();
        assert_eq!(editor.quick_action(QuickAction::Now, now).value, "23:01");
        assert_eq!(editor.quick_action(QuickAction::Clear, now).value, ":");
    }

    #[test]
    fn cycle_switch_keeps_the_instant() {
        let mut editor = TimeEditor::new("t", HourCycle::H24, false)
            .with_value(TimeValue::parse("13:10", HourCycle::H24).unwrap());
        let change = editor.set_cycle(HourCycle::H12);
        assert_eq!(change.value, "13:10");
        assert_eq!(editor.value().hour, "01");
    }
}
