use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValueError};
use crate::segment::Field;

/// A date held as three independently edited segments.
///
/// The canonical string is always `"{year}-{month}-{day}"`, so an empty value
/// renders as `"--"` and partial values keep their shape (`"19-04-"`).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DateValue {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl DateValue {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            day: format!("{:02}", date.day()),
            month: format!("{:02}", date.month()),
            year: format!("{:04}", date.year()),
        }
    }

    /// Parses a canonical string. Segments may be partial or empty, but each
    /// must be digits only and no wider than its field.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || ValueError::InvalidIsoDate(text.to_string());
        let mut parts = text.splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let valid = |field: Field, segment: &str| {
            segment.len() <= field.max_digits() && segment.chars().all(|c| c.is_ascii_digit())
        };
        if !(valid(Field::Year, year) && valid(Field::Month, month) && valid(Field::Day, day)) {
            return Err(invalid());
        }

        Ok(Self {
            day: day.to_string(),
            month: month.to_string(),
            year: year.to_string(),
        })
    }

    pub fn canonical(&self) -> String {
        format!("{}-{}-{}", self.year, self.month, self.day)
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Day => &self.day,
            Field::Month => &self.month,
            Field::Year => &self.year,
            _ => "",
        }
    }

    /// Sets a date segment; time fields are ignored.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Day => self.day = value.into(),
            Field::Month => self.month = value.into(),
            Field::Year => self.year = value.into(),
            _ => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.day.is_empty() && self.month.is_empty() && self.year.is_empty()
    }

    /// All three segments are at full width.
    pub fn is_complete(&self) -> bool {
        Field::DATE.iter().all(|field| self.get(*field).len() == field.max_digits())
    }

    /// The calendar date, if the segments are complete and form a real date.
    pub fn to_date(&self) -> Option<NaiveDate> {
        if !self.is_complete() {
            return None;
        }
        let year = self.year.parse().ok()?;
        let month = self.month.parse().ok()?;
        let day = self.day.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Four-digit year, once typed.
    pub fn full_year(&self) -> Option<i32> {
        if self.year.len() == Field::Year.max_digits() {
            self.year.parse().ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_value_is_dash_shaped() {
        assert_eq!(DateValue::empty().canonical(), "--");
        assert!(DateValue::empty().is_empty());
    }

    #[test]
    fn from_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let value = DateValue::from_date(date);
        assert_eq!(value.canonical(), "2024-03-07");
        assert_eq!(value.to_date(), Some(date));
    }

    #[test]
    fn partial_values_keep_their_shape() {
        let mut value = DateValue::empty();
        value.set(Field::Day, "1");
        value.set(Field::Year, "19");
        assert_eq!(value.canonical(), "19--1");
        assert!(!value.is_complete());
        assert_eq!(value.to_date(), None);
        assert_eq!(value.full_year(), None);
    }

    #[test]
    fn calendar_invalid_combination_has_no_date() {
        let value = DateValue::parse("2023-02-31").unwrap();
        assert!(value.is_complete());
        assert_eq!(value.to_date(), None);
    }

    #[test]
    fn parse_round_trips_partial_canonical_strings() {
        let value = DateValue::parse("2024-1-").unwrap();
        assert_eq!(value.month, "1");
        assert_eq!(value.day, "");
        assert_eq!(value.canonical(), "2024-1-");
        assert_eq!(DateValue::parse("--").unwrap(), DateValue::empty());
    }

    #[test]
    fn parse_rejects_malformed_strings() {
        assert!(DateValue::parse("2024/01/01").is_err());
        assert!(DateValue::parse("2024-001-01").is_err());
        assert!(DateValue::parse("20x4-01-01").is_err());
    }

    #[test]
    fn serializes_segments_by_name() {
        let value = DateValue::parse("1990-05-20").unwrap();
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"day":"20","month":"05","year":"1990"}"#);
    }
}
