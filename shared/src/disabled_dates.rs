use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{Result, ValueError};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_iso_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), ISO_DATE_FORMAT)
        .map_err(|_| ValueError::InvalidIsoDate(text.to_string()))
}

/// Dates a picker must refuse: single days, inclusive ranges and whole
/// weekdays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisabledDateSet {
    dates: BTreeSet<NaiveDate>,
    ranges: Vec<(NaiveDate, NaiveDate)>,
    weekdays: Vec<Weekday>,
}

impl DisabledDateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from ISO strings. An entry is either `YYYY-MM-DD` or an
    /// inclusive range `YYYY-MM-DD..YYYY-MM-DD`.
    pub fn from_iso<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for entry in entries {
            let entry = entry.as_ref();
            match entry.split_once("..") {
                Some((from, to)) => set.insert_range(parse_iso_date(from)?, parse_iso_date(to)?),
                None => set.insert(parse_iso_date(entry)?),
            }
        }
        Ok(set)
    }

    pub fn insert(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    /// Reversed bounds are swapped.
    pub fn insert_range(&mut self, from: NaiveDate, to: NaiveDate) {
        if from <= to {
            self.ranges.push((from, to));
        } else {
            self.ranges.push((to, from));
        }
    }

    pub fn insert_weekday(&mut self, weekday: Weekday) {
        if !self.weekdays.contains(&weekday) {
            self.weekdays.push(weekday);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() && self.ranges.is_empty() && self.weekdays.is_empty()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
            || self.weekdays.contains(&date.weekday())
            || self.ranges.iter().any(|(from, to)| (*from..=*to).contains(&date))
    }

    /// Membership for a canonical string; strings that are not a full date
    /// are never disabled.
    pub fn contains_iso(&self, text: &str) -> bool {
        parse_iso_date(text).is_ok_and(|date| self.contains(date))
    }

    pub fn check(&self, date: NaiveDate) -> Result<()> {
        if self.contains(date) {
            Err(ValueError::DisabledDate(date))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_dates_and_ranges() {
        let set = DisabledDateSet::from_iso(["2024-01-01", "2024-12-24..2024-12-26"]).unwrap();
        assert!(set.contains(date(2024, 1, 1)));
        assert!(set.contains(date(2024, 12, 25)));
        assert!(set.contains(date(2024, 12, 26)));
        assert!(!set.contains(date(2024, 12, 27)));
        assert!(set.check(date(2024, 12, 24)).is_err());
        assert!(set.check(date(2024, 6, 1)).is_ok());
    }

    #[test]
    fn weekday_exclusion() {
        let mut set = DisabledDateSet::new();
        set.insert_weekday(Weekday::Sun);
        set.insert_weekday(Weekday::Sun);
        // 2024-06-02 is a Sunday.
        assert!(set.contains(date(2024, 6, 2)));
        assert!(!set.contains(date(2024, 6, 3)));
    }

    #[test]
    fn reversed_range_is_normalized() {
        let mut set = DisabledDateSet::new();
        set.insert_range(date(2024, 3, 10), date(2024, 3, 1));
        assert!(set.contains(date(2024, 3, 5)));
    }

    #[test]
    fn partial_strings_are_never_disabled() {
        let set = DisabledDateSet::from_iso(["2024-01-01"]).unwrap();
        assert!(set.contains_iso("2024-01-01"));
        assert!(!set.contains_iso("2024-01-"));
        assert!(!set.contains_iso("--"));
    }

    #[test]
    fn malformed_entry_is_an_error() {
        let error = DisabledDateSet::from_iso(["2024-02-30"]).unwrap_err();
        assert!(matches!(error, ValueError::InvalidIsoDate(text) if text == "2024-02-30"));
    }
}
