use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValueError};
use crate::segment::Field;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HourCycle {
    H12,
    #[default]
    H24,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Meridiem {
    #[default]
    Am,
    Pm,
}

impl Meridiem {
    pub fn of_hour(hour24: u32) -> Self {
        if hour24 >= 12 { Meridiem::Pm } else { Meridiem::Am }
    }

    pub fn label(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Meridiem::Am => Meridiem::Pm,
            Meridiem::Pm => Meridiem::Am,
        }
    }
}

fn to_12_hour(hour24: u32) -> u32 {
    match hour24 % 12 {
        0 => 12,
        hour => hour,
    }
}

fn to_24_hour(hour12: u32, meridiem: Meridiem) -> u32 {
    let base = hour12 % 12;
    match meridiem {
        Meridiem::Am => base,
        Meridiem::Pm => base + 12,
    }
}

/// A clock time held as editable segments.
///
/// In `H12` the hour segment holds the 1-12 display hour and `meridiem`
/// carries AM/PM; `canonical()` always renders 24-hour time.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeValue {
    pub hour: String,
    pub minute: String,
    pub second: String,
    pub cycle: HourCycle,
    pub meridiem: Meridiem,
    pub with_seconds: bool,
}

impl TimeValue {
    pub fn empty(cycle: HourCycle, with_seconds: bool) -> Self {
        Self {
            cycle,
            with_seconds,
            ..Self::default()
        }
    }

    pub fn from_time(time: NaiveTime, cycle: HourCycle, with_seconds: bool) -> Self {
        let hour = match cycle {
            HourCycle::H24 => time.hour(),
            HourCycle::H12 => to_12_hour(time.hour()),
        };
        Self {
            hour: format!("{hour:02}"),
            minute: format!("{:02}", time.minute()),
            second: if with_seconds { format!("{:02}", time.second()) } else { String::new() },
            cycle,
            meridiem: Meridiem::of_hour(time.hour()),
            with_seconds,
        }
    }

    /// Parses `HH:MM` or `HH:MM:SS` in 24-hour form.
    pub fn parse(text: &str, cycle: HourCycle) -> Result<Self> {
        let with_seconds = text.matches(':').count() == 2;
        let format = if with_seconds { "%H:%M:%S" } else { "%H:%M" };
        let time = NaiveTime::parse_from_str(text, format)
            .map_err(|_| ValueError::InvalidIsoTime(text.to_string()))?;
        Ok(Self::from_time(time, cycle, with_seconds))
    }

    pub fn fields(&self) -> Vec<Field> {
        Field::time(self.with_seconds)
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Hour => &self.hour,
            Field::Minute => &self.minute,
            Field::Second => &self.second,
            _ => "",
        }
    }

    /// Sets a time segment; date fields are ignored.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        match field {
            Field::Hour => self.hour = value.into(),
            Field::Minute => self.minute = value.into(),
            Field::Second => self.second = value.into(),
            _ => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields().iter().all(|field| self.get(*field).is_empty())
    }

    pub fn is_complete(&self) -> bool {
        self.fields()
            .iter()
            .all(|field| self.get(*field).len() == field.max_digits())
    }

    /// The hour in 24-hour form, once both hour digits are present.
    pub fn hour24(&self) -> Option<u32> {
        if self.hour.len() != Field::Hour.max_digits() {
            return None;
        }
        let hour: u32 = self.hour.parse().ok()?;
        Some(match self.cycle {
            HourCycle::H24 => hour,
            HourCycle::H12 => to_24_hour(hour, self.meridiem),
        })
    }

    /// 24-hour `HH:MM[:SS]`; partial segments are emitted as typed.
    pub fn canonical(&self) -> String {
        let hour = match (self.cycle, self.hour24()) {
            (HourCycle::H12, Some(hour24)) => format!("{hour24:02}"),
            _ => self.hour.clone(),
        };
        if self.with_seconds {
            format!("{}:{}:{}", hour, self.minute, self.second)
        } else {
            format!("{}:{}", hour, self.minute)
        }
    }

    /// Text shown to the user, with the AM/PM suffix in `H12`.
    pub fn display(&self) -> String {
        let mut text = if self.with_seconds {
            format!("{}:{}:{}", self.hour, self.minute, self.second)
        } else {
            format!("{}:{}", self.hour, self.minute)
        };
        if self.cycle == HourCycle::H12 {
            text.push(' ');
            text.push_str(self.meridiem.label());
        }
        text
    }

    pub fn to_time(&self) -> Option<NaiveTime> {
        if !self.is_complete() {
            return None;
        }
        let hour = self.hour24()?;
        let minute = self.minute.parse().ok()?;
        let second = if self.with_seconds { self.second.parse().ok()? } else { 0 };
        NaiveTime::from_hms_opt(hour, minute, second)
    }

    /// Switches the hour cycle, converting a complete hour segment.
    pub fn set_cycle(&mut self, cycle: HourCycle) {
        if cycle == self.cycle {
            return;
        }
        if let Some(hour24) = self.hour24() {
            self.meridiem = Meridiem::of_hour(hour24);
            let hour = match cycle {
                HourCycle::H24 => hour24,
                HourCycle::H12 => to_12_hour(hour24),
            };
            self.hour = format!("{hour:02}");
        }
        self.cycle = cycle;
    }

    pub fn set_meridiem(&mut self, meridiem: Meridiem) {
        self.meridiem = meridiem;
    }

    pub fn clear(&mut self) {
        self.hour.clear();
        self.minute.clear();
        self.second.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn twelve_hour_display_and_canonical() {
        let value = TimeValue::from_time(time(21, 5, 0), HourCycle::H12, false);
        assert_eq!(value.hour, "09");
        assert_eq!(value.display(), "09:05 PM");
        assert_eq!(value.canonical(), "21:05");
    }

    #[test]
    fn midnight_and_noon_in_twelve_hour_form() {
        let midnight = TimeValue::from_time(time(0, 0, 0), HourCycle::H12, false);
        assert_eq!(midnight.display(), "12:00 AM");
        assert_eq!(midnight.canonical(), "00:00");

        let noon = TimeValue::from_time(time(12, 30, 0), HourCycle::H12, false);
        assert_eq!(noon.display(), "12:30 PM");
        assert_eq!(noon.canonical(), "12:30");
    }

    #[test]
    fn seconds_are_optional() {
        let value = TimeValue::parse("08:15:42", HourCycle::H24).unwrap();
        assert!(value.with_seconds);
        assert_eq!(value.canonical(), "08:15:42");
        assert_eq!(value.to_time(), Some(time(8, 15, 42)));

        let value = TimeValue::parse("08:15", HourCycle::H24).unwrap();
        assert_eq!(value.canonical(), "08:15");
    }

    #[test]
    fn switching_cycle_converts_hour() {
        let mut value = TimeValue::parse("18:45", HourCycle::H24).unwrap();
        value.set_cycle(HourCycle::H12);
        assert_eq!(value.display(), "06:45 PM");
        value.set_meridiem(Meridiem::Am);
        value.set_cycle(HourCycle::H24);
        assert_eq!(value.canonical(), "06:45");
    }

    #[test]
    fn partial_time_is_emitted_as_typed() {
        let mut value = TimeValue::empty(HourCycle::H12, false);
        value.set(Field::Hour, "1");
        assert_eq!(value.canonical(), "1:");
        assert_eq!(value.to_time(), None);
    }

    #[test]
    fn malformed_time_is_an_error() {
        assert!(matches!(
            TimeValue::parse("25:00", HourCycle::H24),
            Err(ValueError::InvalidIsoTime(_))
        ));
    }
}
