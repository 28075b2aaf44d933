use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::date_value::DateValue;
use crate::time_value::TimeValue;

/// One-shot shortcuts offered next to date and time controls.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    Today,
    Tomorrow,
    Clear,
    Now,
}

impl QuickAction {
    pub const DATE: [QuickAction; 3] = [QuickAction::Today, QuickAction::Tomorrow, QuickAction::Clear];
    pub const TIME: [QuickAction; 2] = [QuickAction::Now, QuickAction::Clear];

    pub fn label(self) -> &'static str {
        match self {
            QuickAction::Today => "Today",
            QuickAction::Tomorrow => "Tomorrow",
            QuickAction::Clear => "Clear",
            QuickAction::Now => "Now",
        }
    }
}

/// How "Tomorrow" derives the next day.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TomorrowMode {
    /// Adds one to the day segment and keeps month and year, so the 31st
    /// becomes day `32`.
    #[default]
    Naive,
    /// Uses the real next calendar day.
    CalendarSafe,
}

pub fn tomorrow(today: NaiveDate, mode: TomorrowMode) -> DateValue {
    match mode {
        TomorrowMode::Naive => {
            let mut value = DateValue::from_date(today);
            value.day = format!("{:02}", today.day() + 1);
            value
        }
        TomorrowMode::CalendarSafe => {
            DateValue::from_date(today.succ_opt().unwrap_or(today))
        }
    }
}

/// Overwrites all date segments. Time-only actions leave the value alone.
pub fn apply_to_date(action: QuickAction, value: &mut DateValue, today: NaiveDate, mode: TomorrowMode) {
    match action {
        QuickAction::Today => *value = DateValue::from_date(today),
        QuickAction::Tomorrow => *value = tomorrow(today, mode),
        QuickAction::Clear => *value = DateValue::empty(),
        QuickAction::Now => {}
    }
}

/// Overwrites all time segments, keeping the cycle and seconds setting.
pub fn apply_to_time(action: QuickAction, value: &mut TimeValue, now: NaiveTime) {
    match action {
        QuickAction::Now => *value = TimeValue::from_time(now, value.cycle, value.with_seconds),
        QuickAction::Clear => value.clear(),
        QuickAction::Today | QuickAction::Tomorrow => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_value::HourCycle;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn today_sets_zero_padded_components() {
        let mut value = DateValue::empty();
        apply_to_date(QuickAction::Today, &mut value, date(2024, 3, 5), TomorrowMode::Naive);
        assert_eq!((value.day.as_str(), value.month.as_str(), value.year.as_str()), ("05", "03", "2024"));
        assert_eq!(value.canonical(), "2024-03-05");
    }

    #[test]
    fn clear_resets_to_dash_shape() {
        let mut value = DateValue::parse("2024-03-05").unwrap();
        apply_to_date(QuickAction::Clear, &mut value, date(2024, 3, 5), TomorrowMode::Naive);
        assert_eq!(value, DateValue::empty());
        assert_eq!(value.canonical(), "--");
    }

    #[test]
    fn naive_tomorrow_does_not_carry() {
        let value = tomorrow(date(2024, 1, 31), TomorrowMode::Naive);
        assert_eq!(value.canonical(), "2024-01-32");
        assert_eq!(value.to_date(), None);

        let value = tomorrow(date(2024, 1, 9), TomorrowMode::Naive);
        assert_eq!(value.canonical(), "2024-01-10");
    }

    #[test]
    fn calendar_safe_tomorrow_carries_into_next_year() {
        let value = tomorrow(date(2024, 12, 31), TomorrowMode::CalendarSafe);
        assert_eq!(value.canonical(), "2025-01-01");
    }

    #[test]
    fn now_fills_time_segments() {
        let mut value = TimeValue::empty(HourCycle::H12, true);
        let now = NaiveTime::from_hms_opt(15, 4, 9).unwrap();
        apply_to_time(QuickAction::Now, &mut value, now);
        assert_eq!(value.display(), "03:04:09 PM");
        apply_to_time(QuickAction::Clear, &mut value, now);
        assert!(value.is_empty());
    }
}
