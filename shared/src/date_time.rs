use chrono::NaiveDateTime;

use crate::date_value::DateValue;
use crate::error::{Result, ValueError};
use crate::time_value::{HourCycle, TimeValue};

/// Joins a canonical date and a canonical time into `YYYY-MM-DDTHH:MM[:SS]`.
pub fn combine(date: &str, time: &str) -> String {
    format!("{date}T{time}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeValue {
    pub date: DateValue,
    pub time: TimeValue,
}

impl DateTimeValue {
    pub fn empty(cycle: HourCycle, with_seconds: bool) -> Self {
        Self {
            date: DateValue::empty(),
            time: TimeValue::empty(cycle, with_seconds),
        }
    }

    pub fn from_datetime(datetime: NaiveDateTime, cycle: HourCycle, with_seconds: bool) -> Self {
        Self {
            date: DateValue::from_date(datetime.date()),
            time: TimeValue::from_time(datetime.time(), cycle, with_seconds),
        }
    }

    /// Parses a full ISO datetime. Fractional seconds and offsets are not
    /// accepted.
    pub fn parse(text: &str, cycle: HourCycle) -> Result<Self> {
        let (date, time) = text
            .split_once('T')
            .ok_or_else(|| ValueError::InvalidIsoDate(text.to_string()))?;
        let date = DateValue::parse(date)?;
        if date.to_date().is_none() {
            return Err(ValueError::InvalidIsoDate(text.to_string()));
        }
        Ok(Self {
            date,
            time: TimeValue::parse(time, cycle)?,
        })
    }

    pub fn canonical(&self) -> String {
        combine(&self.date.canonical(), &self.time.canonical())
    }

    pub fn to_datetime(&self) -> Option<NaiveDateTime> {
        Some(self.date.to_date()?.and_time(self.time.to_time()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_and_renders_iso_datetime() {
        let value = DateTimeValue::parse("2024-02-29T18:05:00", HourCycle::H12).unwrap();
        assert_eq!(value.time.display(), "06:05:00 PM");
        assert_eq!(value.canonical(), "2024-02-29T18:05:00");

        let expected = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap().and_hms_opt(18, 5, 0).unwrap();
        assert_eq!(value.to_datetime(), Some(expected));
    }

    #[test]
    fn empty_value_keeps_separators() {
        let value = DateTimeValue::empty(HourCycle::H24, false);
        assert_eq!(value.canonical(), "--T:");
        assert_eq!(value.to_datetime(), None);
    }

    #[test]
    fn invalid_halves_are_rejected() {
        assert!(DateTimeValue::parse("2023-02-29T10:00", HourCycle::H24).is_err());
        assert!(DateTimeValue::parse("2023-02-28T10:60", HourCycle::H24).is_err());
        assert!(DateTimeValue::parse("2023-02-28 10:00", HourCycle::H24).is_err());
    }
}
