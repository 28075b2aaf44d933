use chrono::{Datelike, NaiveDate};

use crate::age_window::{AgeConstraint, AgeWindow};
use crate::config::DateFieldConfig;
use crate::date_value::DateValue;
use crate::disabled_dates::DisabledDateSet;
use crate::error::{Result, ValueError};
use crate::quick_action::{apply_to_date, QuickAction, TomorrowMode};
use crate::segment::{pad_segment, sanitize_field, Field, SegmentController, SegmentKey};
use crate::time_value::HourCycle;

/// Result of one edit: what the segment should display, the value handed
/// to the change callback and where focus goes next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateChange {
    pub name: String,
    pub value: String,
    pub text: String,
    pub focus: Option<Field>,
}

/// State behind a three-segment date control.
///
/// Keystrokes go through `input`, quick actions through `quick_action` and
/// calendar clicks through `pick`. The editor never panics on bad input; the
/// only failures it surfaces are the age window and disabled-date errors,
/// kept in `error()` until a compliant value replaces them.
#[derive(Debug)]
pub struct DateEditor {
    name: String,
    value: DateValue,
    window: AgeWindow,
    disabled: DisabledDateSet,
    tomorrow_mode: TomorrowMode,
    controller: SegmentController,
    error: Option<ValueError>,
}

impl DateEditor {
    pub fn new(name: impl Into<String>, today: NaiveDate, constraint: AgeConstraint) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            value: DateValue::empty(),
            window: constraint.window(today.year())?,
            disabled: DisabledDateSet::new(),
            tomorrow_mode: TomorrowMode::default(),
            controller: SegmentController::date(),
            error: None,
        })
    }

    pub fn from_config(config: &DateFieldConfig, today: NaiveDate) -> Result<Self> {
        let mut editor = Self::new(config.name.clone(), today, config.age_constraint())?
            .with_disabled(config.disabled_date_set()?)
            .with_tomorrow_mode(config.tomorrow_mode);
        if let Some(default) = &config.default_value {
            editor.value = DateValue::parse(default)?;
        }
        Ok(editor)
    }

    pub fn with_disabled(mut self, disabled: DisabledDateSet) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_tomorrow_mode(mut self, mode: TomorrowMode) -> Self {
        self.tomorrow_mode = mode;
        self
    }

    pub fn with_value(mut self, value: DateValue) -> Self {
        self.value = value;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &DateValue {
        &self.value
    }

    pub fn canonical(&self) -> String {
        self.value.canonical()
    }

    pub fn window(&self) -> AgeWindow {
        self.window
    }

    pub fn disabled_dates(&self) -> &DisabledDateSet {
        &self.disabled
    }

    pub fn focused(&self) -> Option<Field> {
        self.controller.focused()
    }

    pub fn focus(&mut self, field: Field) {
        self.controller.focus(field);
    }

    pub fn error(&self) -> Option<&ValueError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ValueError::display_message)
    }

    /// A calendar day the picker may offer.
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        self.window.contains(date.year()) && !self.disabled.contains(date)
    }

    /// Handles new text in one segment.
    pub fn input(&mut self, field: Field, raw: &str) -> DateChange {
        let text = sanitize_field(field, raw, HourCycle::H24);

        if field == Field::Year && text.len() == Field::Year.max_digits() {
            let year = text.parse().unwrap_or_default();
            match self.window.check_year(year) {
                Ok(()) => {
                    self.commit(field, &text);
                    if matches!(self.error, Some(ValueError::YearOutsideAgeWindow { .. })) {
                        self.error = None;
                    }
                }
                Err(error) => self.error = Some(error),
            }
        } else {
            self.commit(field, &text);
        }

        let focus = self.controller.after_input(field, &text);
        self.change(text, focus)
    }

    /// Called when a segment loses focus; pads a single digit.
    pub fn finish(&mut self, field: Field) -> Option<DateChange> {
        let current = self.value.get(field).to_string();
        let padded = pad_segment(field, &current);
        if self.controller.focused() == Some(field) {
            self.controller.blur();
        }
        if padded == current {
            return None;
        }
        self.commit(field, &padded);
        let text = self.value.get(field).to_string();
        Some(self.change(text, None))
    }

    pub fn key(&mut self, field: Field, key: SegmentKey, caret: Option<usize>) -> Option<Field> {
        let text = self.value.get(field).to_string();
        self.controller.on_key(field, key, &text, caret)
    }

    /// Overwrites all segments. Quick actions bypass the age window check.
    pub fn quick_action(&mut self, action: QuickAction, today: NaiveDate) -> DateChange {
        apply_to_date(action, &mut self.value, today, self.tomorrow_mode);
        self.change(String::new(), None)
    }

    /// Selects a whole date, as the calendar popover does.
    pub fn pick(&mut self, date: NaiveDate) -> Result<DateChange> {
        self.window.check_year(date.year())?;
        self.disabled.check(date)?;
        self.value = DateValue::from_date(date);
        self.error = None;
        Ok(self.change(String::new(), None))
    }

    fn commit(&mut self, field: Field, text: &str) {
        let previous = self.value.get(field).to_string();
        self.value.set(field, text);

        if let Some(date) = self.value.to_date() {
            if let Err(error) = self.disabled.check(date) {
                self.value.set(field, previous);
                self.error = Some(error);
                return;
            }
        }
        if matches!(self.error, Some(ValueError::DisabledDate(_))) {
            self.error = None;
        }
    }

    fn change(&self, text: String, focus: Option<Field>) -> DateChange {
        DateChange {
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
    use crate::error::{AGE_WINDOW_MESSAGE, DISABLED_DATE_MESSAGE};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn adult_editor() -> DateEditor {
        DateEditor::new("birth_date", date(2024, 6, 15), AgeConstraint::new(Some(18), Some(65))).unwrap()
    }

    #[test]
    fn every_keystroke_emits_the_canonical_value() {
        let mut editor = adult_editor();
        let change = editor.input(Field::Day, "1");
        assert_eq!(change.name, "birth_date");
        assert_eq!(change.value, "--1");
        assert_eq!(change.focus, None);

        let change = editor.input(Field::Day, "12");
        assert_eq!(change.value, "--12");
        assert_eq!(change.focus, Some(Field::Month));

        editor.input(Field::Month, "04");
        let change = editor.input(Field::Year, "19");
        assert_eq!(change.value, "19-04-12");
    }

    #[test]
    fn day_45_clamps_to_31() {
        let mut editor = adult_editor();
        let change = editor.input(Field::Day, "45");
        assert_eq!(change.text, "31");
        assert_eq!(editor.value().day, "31");
    }

    #[test]
    fn year_outside_window_is_rejected_and_not_committed() {
        let mut editor = adult_editor();
        editor.input(Field::Year, "201");
        let change = editor.input(Field::Year, "2010");

        assert_eq!(editor.error_message().as_deref(), Some(AGE_WINDOW_MESSAGE));
        assert_eq!(editor.value().year, "201");
        assert_eq!(change.text, "2010");
        assert_eq!(change.value, "201--");
    }

    #[test]
    fn compliant_year_clears_the_error() {
        let mut editor = adult_editor();
        editor.input(Field::Year, "2010");
        assert!(editor.error().is_some());

        editor.input(Field::Day, "05");
        assert!(editor.error().is_some(), "other segments do not clear the age error");

        editor.input(Field::Year, "1990");
        assert!(editor.error().is_none());
        assert_eq!(editor.value().year, "1990");
    }

    #[test]
    fn partial_year_is_never_validated() {
        let mut editor = adult_editor();
        editor.input(Field::Year, "203");
        assert!(editor.error().is_none());
        assert_eq!(editor.value().year, "203");
    }

    #[test]
    fn quick_actions_bypass_the_age_window() {
        let mut editor = adult_editor();
        let change = editor.quick_action(QuickAction::Today, date(2024, 6, 15));
        assert_eq!(change.value, "2024-06-15");
        assert!(editor.error().is_none());

        let change = editor.quick_action(QuickAction::Clear, date(2024, 6, 15));
        assert_eq!(change.value, "--");
    }

    #[test]
    fn blur_pads_single_digits() {
        let mut editor = adult_editor();
        editor.focus(Field::Day);
        editor.input(Field::Day, "7");
        let change = editor.finish(Field::Day).unwrap();
        assert_eq!(change.text, "07");
        assert_eq!(change.value, "--07");
        assert_eq!(editor.focused(), None);
        assert!(editor.finish(Field::Day).is_none());
    }

    #[test]
    fn disabled_date_is_refused() {
        let disabled = DisabledDateSet::from_iso(["1990-12-25"]).unwrap();
        let mut editor = adult_editor().with_disabled(disabled);
        editor.input(Field::Day, "25");
        editor.input(Field::Month, "12");
        let change = editor.input(Field::Year, "1990");

        assert_eq!(editor.error_message().as_deref(), Some(DISABLED_DATE_MESSAGE));
        assert_eq!(change.value, "-12-25");

        editor.input(Field::Year, "1991");
        assert!(editor.error().is_none());
        assert_eq!(editor.canonical(), "1991-12-25");
    }

    #[test]
    fn pick_checks_window_and_disabled_dates() {
        let disabled = DisabledDateSet::from_iso(["2000-01-01"]).unwrap();
        let mut editor = adult_editor().with_disabled(disabled);
        assert!(!editor.is_selectable(date(2000, 1, 1)));
        assert!(!editor.is_selectable(date(2010, 1, 1)));
        assert!(editor.pick(date(2010, 1, 1)).is_err());
        assert!(editor.pick(date(2000, 1, 1)).is_err());

        let change = editor.pick(date(2000, 1, 2)).unwrap();
        assert_eq!(change.value, "2000-01-02");
    }

    #[test]
    fn inverted_age_bounds_fail_construction() {
        let result = DateEditor::new("dob", date(2024, 1, 1), AgeConstraint::new(Some(40), Some(30)));
        assert!(matches!(result, Err(ValueError::EmptyAgeWindow { .. })));
    }
}
