use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::age_window::AgeConstraint;
use crate::date_value::DateValue;
use crate::disabled_dates::DisabledDateSet;
use crate::error::Result;
use crate::quick_action::TomorrowMode;
use crate::time_value::HourCycle;

/// Props of one date/time field, loadable from TOML.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DateFieldConfig {
    pub name: String,
    pub label: String,
    pub required: bool,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub quick_actions: bool,
    pub tomorrow_mode: TomorrowMode,
    /// `YYYY-MM-DD` or `YYYY-MM-DD..YYYY-MM-DD` entries.
    pub disabled_dates: Vec<String>,
    pub default_value: Option<String>,
    pub hour_cycle: HourCycle,
    pub show_seconds: bool,
}

impl Default for DateFieldConfig {
    fn default() -> Self {
        Self {
            name: "date".to_string(),
            label: String::new(),
            required: false,
            min_age: None,
            max_age: None,
            quick_actions: true,
            tomorrow_mode: TomorrowMode::default(),
            disabled_dates: Vec::new(),
            default_value: None,
            hour_cycle: HourCycle::default(),
            show_seconds: false,
        }
    }
}

impl DateFieldConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn age_constraint(&self) -> AgeConstraint {
        AgeConstraint::new(self.min_age, self.max_age)
    }

    pub fn disabled_date_set(&self) -> Result<DisabledDateSet> {
        DisabledDateSet::from_iso(&self.disabled_dates)
    }

    /// Checks everything that can be wrong before a control is built.
    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        self.age_constraint().window(today.year())?;
        self.disabled_date_set()?;
        if let Some(default) = &self.default_value {
            DateValue::parse(default)?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct FormConfig {
    pub fields: Vec<DateFieldConfig>,
}

impl FormConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn field(&self, name: &str) -> Option<&DateFieldConfig> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Validates every field; the first failure wins.
    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        self.fields.iter().try_for_each(|field| field.validate(today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValueError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn loads_fields_from_toml_with_defaults() {
        let config = FormConfig::from_toml_str(
            r#"
            [[fields]]
            name = "birth_date"
            label = "Date of birth"
            required = true
            min_age = 18
            max_age = 65
            disabled_dates = ["2000-01-01", "2001-12-24..2001-12-26"]

            [[fields]]
            name = "meeting"
            hour_cycle = "h12"
            show_seconds = true
            tomorrow_mode = "calendar_safe"
            "#,
        )
        .unwrap();

        let birth = config.field("birth_date").unwrap();
        assert!(birth.required);
        assert!(birth.quick_actions);
        assert_eq!(birth.age_constraint(), AgeConstraint::new(Some(18), Some(65)));
        assert!(birth.disabled_date_set().unwrap().contains_iso("2001-12-25"));

        let meeting = config.field("meeting").unwrap();
        assert_eq!(meeting.hour_cycle, HourCycle::H12);
        assert_eq!(meeting.tomorrow_mode, TomorrowMode::CalendarSafe);
        assert!(config.validate(today()).is_ok());
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let error = FormConfig::from_toml_str("fields = 3").unwrap_err();
        assert!(matches!(error, ValueError::Config(_)));
    }

    #[test]
    fn validation_catches_inverted_ages_and_bad_dates() {
        let mut field = DateFieldConfig::new("dob");
        field.min_age = Some(50);
        field.max_age = Some(20);
        assert!(matches!(field.validate(today()), Err(ValueError::EmptyAgeWindow { .. })));

        let mut field = DateFieldConfig::new("dob");
        field.disabled_dates = vec!["not-a-date".to_string()];
        assert!(matches!(field.validate(today()), Err(ValueError::InvalidIsoDate(_))));
    }

    #[test]
    fn oversized_age_in_toml_fails_validation() {
        let config = FormConfig::from_toml_str(
            r#"
            [[fields]]
            name = "dob"
            max_age = 2147483648
            "#,
        )
        .unwrap();
        let error = config.validate(today()).unwrap_err();
        assert!(matches!(error, ValueError::AgeOutOfRange { age: 2_147_483_648 }));
    }

    #[test]
    fn serializes_to_json_for_hosts() {
        let json = serde_json::to_value(DateFieldConfig::new("dob")).unwrap();
        assert_eq!(json["name"], "dob");
        assert_eq!(json["tomorrow_mode"], "naive");
        assert_eq!(json["hour_cycle"], "h24");
    }
}
