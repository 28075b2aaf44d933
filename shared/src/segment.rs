use serde::{Deserialize, Serialize};

use crate::time_value::HourCycle;

// ===== FIELDS =====

/// One editable sub-field of a date or time value.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Day,
    Month,
    Year,
    Hour,
    Minute,
    Second,
}

impl Field {
    pub const DATE: [Field; 3] = [Field::Day, Field::Month, Field::Year];

    pub fn max_digits(self) -> usize {
        match self {
            Field::Year => 4,
            _ => 2,
        }
    }

    /// Largest value the segment accepts before clamping kicks in.
    pub fn max_value(self, cycle: HourCycle) -> u32 {
        match self {
            Field::Day => 31,
            Field::Month => 12,
            Field::Year => 9999,
            Field::Hour => match cycle {
                HourCycle::H24 => 23,
                HourCycle::H12 => 12,
            },
            Field::Minute | Field::Second => 59,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Day => "day",
            Field::Month => "month",
            Field::Year => "year",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Day => "DD",
            Field::Month => "MM",
            Field::Year => "YYYY",
            Field::Hour => "hh",
            Field::Minute => "mm",
            Field::Second => "ss",
        }
    }

    pub fn time(with_seconds: bool) -> Vec<Field> {
        if with_seconds {
            vec![Field::Hour, Field::Minute, Field::Second]
        } else {
            vec![Field::Hour, Field::Minute]
        }
    }
}

// ===== NORMALIZATION =====

/// Keeps digits only, truncates to the field width and clamps a full-width
/// value to `max_value`. Partial input is returned as typed.
pub fn sanitize_segment(raw: &str, max_digits: usize, max_value: u32) -> String {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max_digits)
        .collect();

    if digits.len() < max_digits {
        return digits;
    }

    match digits.parse::<u32>() {
        Ok(value) if value > max_value => format!("{:0width$}", max_value, width = max_digits),
        _ => digits,
    }
}

/// Sanitizes `raw` with the limits of `field`.
pub fn sanitize_field(field: Field, raw: &str, cycle: HourCycle) -> String {
    sanitize_segment(raw, field.max_digits(), field.max_value(cycle))
}

/// Zero-pads a partially typed two-digit segment ("4" -> "04").
/// Years and empty segments are left alone.
pub fn pad_segment(field: Field, value: &str) -> String {
    if value.is_empty() || field == Field::Year || value.len() >= field.max_digits() {
        return value.to_string();
    }
    format!("{:0>width$}", value, width = field.max_digits())
}

// ===== FOCUS CONTROL =====

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKey {
    ArrowLeft,
    ArrowRight,
    Backspace,
    Other,
}

impl SegmentKey {
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowLeft" => SegmentKey::ArrowLeft,
            "ArrowRight" => SegmentKey::ArrowRight,
            "Backspace" => SegmentKey::Backspace,
            _ => SegmentKey::Other,
        }
    }
}

/// Tracks which segment owns focus and decides when focus moves while the
/// user types or navigates with the keyboard.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentController {
    order: Vec<Field>,
    focused: Option<Field>,
}

impl SegmentController {
    pub fn new(order: impl Into<Vec<Field>>) -> Self {
        Self {
            order: order.into(),
            focused: None,
        }
    }

    pub fn date() -> Self {
        Self::new(Field::DATE)
    }

    pub fn time(with_seconds: bool) -> Self {
        Self::new(Field::time(with_seconds))
    }

    pub fn fields(&self) -> &[Field] {
        &self.order
    }

    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    pub fn focus(&mut self, field: Field) {
        if self.order.contains(&field) {
            self.focused = Some(field);
        }
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn next(&self, field: Field) -> Option<Field> {
        let index = self.order.iter().position(|f| *f == field)?;
        self.order.get(index + 1).copied()
    }

    pub fn previous(&self, field: Field) -> Option<Field> {
        let index = self.order.iter().position(|f| *f == field)?;
        index.checked_sub(1).and_then(|i| self.order.get(i).copied())
    }

    /// Called after `field` received new text. Returns the segment that
    /// should take focus when the field just reached its full width.
    pub fn after_input(&mut self, field: Field, value: &str) -> Option<Field> {
        if value.len() < field.max_digits() {
            return None;
        }
        let next = self.next(field)?;
        self.focused = Some(next);
        Some(next)
    }

    /// Keyboard navigation between segments. `caret` is the cursor offset
    /// inside the segment when known; without it arrows always move.
    pub fn on_key(&mut self, field: Field, key: SegmentKey, value: &str, caret: Option<usize>) -> Option<Field> {
        let target = match key {
            SegmentKey::ArrowRight if caret.is_none_or(|c| c >= value.len()) => self.next(field),
            SegmentKey::ArrowLeft if caret.is_none_or(|c| c == 0) => self.previous(field),
            SegmentKey::Backspace if value.is_empty() => self.previous(field),
            _ => None,
        }?;
        self.focused = Some(target);
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_above_31_clamps() {
        assert_eq!(sanitize_field(Field::Day, "45", HourCycle::H24), "31");
        assert_eq!(sanitize_field(Field::Day, "31", HourCycle::H24), "31");
        assert_eq!(sanitize_field(Field::Day, "00", HourCycle::H24), "00");
    }

    #[test]
    fn month_above_12_clamps() {
        assert_eq!(sanitize_field(Field::Month, "13", HourCycle::H24), "12");
        assert_eq!(sanitize_field(Field::Month, "99", HourCycle::H24), "12");
        assert_eq!(sanitize_field(Field::Month, "07", HourCycle::H24), "07");
    }

    #[test]
    fn non_digits_are_stripped_and_width_capped() {
        assert_eq!(sanitize_field(Field::Day, "a1b", HourCycle::H24), "1");
        assert_eq!(sanitize_field(Field::Year, "19845", HourCycle::H24), "1984");
        assert_eq!(sanitize_field(Field::Month, "--", HourCycle::H24), "");
    }

    #[test]
    fn partial_input_is_not_clamped() {
        assert_eq!(sanitize_field(Field::Day, "9", HourCycle::H24), "9");
        assert_eq!(sanitize_field(Field::Year, "20", HourCycle::H24), "20");
    }

    #[test]
    fn hour_limit_follows_cycle() {
        assert_eq!(sanitize_field(Field::Hour, "25", HourCycle::H24), "23");
        assert_eq!(sanitize_field(Field::Hour, "13", HourCycle::H12), "12");
        assert_eq!(sanitize_field(Field::Minute, "75", HourCycle::H24), "59");
    }

    #[test]
    fn padding_applies_to_two_digit_fields_only() {
        assert_eq!(pad_segment(Field::Day, "4"), "04");
        assert_eq!(pad_segment(Field::Minute, "0"), "00");
        assert_eq!(pad_segment(Field::Year, "198"), "198");
        assert_eq!(pad_segment(Field::Month, ""), "");
    }

    #[test]
    fn full_segment_advances_focus() {
        let mut controller = SegmentController::date();
        controller.focus(Field::Day);
        assert_eq!(controller.after_input(Field::Day, "1"), None);
        assert_eq!(controller.after_input(Field::Day, "12"), Some(Field::Month));
        assert_eq!(controller.focused(), Some(Field::Month));
        assert_eq!(controller.after_input(Field::Month, "03"), Some(Field::Year));
        assert_eq!(controller.after_input(Field::Year, "2001"), None);
    }

    #[test]
    fn keyboard_navigation_respects_caret() {
        let mut controller = SegmentController::date();
        assert_eq!(controller.on_key(Field::Month, SegmentKey::ArrowRight, "03", Some(1)), None);
        assert_eq!(controller.on_key(Field::Month, SegmentKey::ArrowRight, "03", Some(2)), Some(Field::Year));
        assert_eq!(controller.on_key(Field::Month, SegmentKey::ArrowLeft, "03", Some(0)), Some(Field::Day));
        assert_eq!(controller.on_key(Field::Day, SegmentKey::ArrowLeft, "", None), None);
    }

    #[test]
    fn backspace_on_empty_segment_moves_back() {
        let mut controller = SegmentController::time(true);
        assert_eq!(controller.on_key(Field::Second, SegmentKey::Backspace, "", None), Some(Field::Minute));
        assert_eq!(controller.on_key(Field::Second, SegmentKey::Backspace, "3", None), None);
        assert_eq!(SegmentKey::from_key("Backspace"), SegmentKey::Backspace);
    }
}
