use chrono::NaiveDate;

/// Fixed message shown beside a date control when the typed year falls
/// outside the configured age window.
pub const AGE_WINDOW_MESSAGE: &str = "Year is outside the allowed age range";

/// Fixed message shown when a typed or picked date is in the disabled set.
pub const DISABLED_DATE_MESSAGE: &str = "This date is not available";

#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error("year {year} is outside the allowed window {earliest:?}..={latest:?}")]
    YearOutsideAgeWindow {
        year: i32,
        earliest: Option<i32>,
        latest: Option<i32>,
    },
    #[error("min age {min_age} is greater than max age {max_age}, no year can satisfy both")]
    EmptyAgeWindow { min_age: u32, max_age: u32 },
    #[error("age {age} cannot be turned into a birth year")]
    AgeOutOfRange { age: u32 },
    #[error("date {0} is disabled")]
    DisabledDate(NaiveDate),
    #[error("'{0}' is not a valid YYYY-MM-DD date")]
    InvalidIsoDate(String),
    #[error("'{0}' is not a valid HH:MM[:SS] time")]
    InvalidIsoTime(String),
    #[error("file '{name}' rejected: {reason}")]
    FileRejected { name: String, reason: String },
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl ValueError {
    /// Text rendered next to the control for errors that are presentational.
    pub fn display_message(&self) -> String {
        match self {
            ValueError::YearOutsideAgeWindow { .. } => AGE_WINDOW_MESSAGE.to_string(),
            ValueError::DisabledDate(_) => DISABLED_DATE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ValueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_window_error_displays_fixed_text() {
        let error = ValueError::YearOutsideAgeWindow {
            year: 2010,
            earliest: Some(1959),
            latest: Some(2006),
        };
        assert_eq!(error.display_message(), AGE_WINDOW_MESSAGE);
        assert!(error.to_string().contains("2010"));
    }

    #[test]
    fn other_errors_display_their_own_text() {
        let error = ValueError::InvalidIsoDate("2024-13-01".to_string());
        assert_eq!(error.display_message(), "'2024-13-01' is not a valid YYYY-MM-DD date");
    }
}
