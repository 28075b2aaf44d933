use serde::{Deserialize, Serialize};

use crate::error::{Result, ValueError};

/// Minimum and maximum age in years, relative to the evaluation date.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeConstraint {
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
}

impl AgeConstraint {
    pub fn new(min_age: Option<u32>, max_age: Option<u32>) -> Self {
        Self { min_age, max_age }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min_age.is_none() && self.max_age.is_none()
    }

    /// Translates the ages into an inclusive window of birth years.
    ///
    /// `earliest = current_year - max_age`, `latest = current_year - min_age`.
    /// A missing bound leaves that side of the window open. Ages too large to
    /// subtract from `current_year` are an error.
    pub fn window(&self, current_year: i32) -> Result<AgeWindow> {
        if let (Some(min_age), Some(max_age)) = (self.min_age, self.max_age) {
            if min_age > max_age {
                return Err(ValueError::EmptyAgeWindow { min_age, max_age });
            }
        }
        Ok(AgeWindow {
            earliest: self.max_age.map(|age| birth_year(current_year, age)).transpose()?,
            latest: self.min_age.map(|age| birth_year(current_year, age)).transpose()?,
        })
    }
}

fn birth_year(current_year: i32, age: u32) -> Result<i32> {
    i32::try_from(age)
        .ok()
        .and_then(|age| current_year.checked_sub(age))
        .ok_or(ValueError::AgeOutOfRange { age })
}

/// Inclusive range of calendar years accepted by a date control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgeWindow {
    pub earliest: Option<i32>,
    pub latest: Option<i32>,
}

impl AgeWindow {
    pub const UNBOUNDED: AgeWindow = AgeWindow {
        earliest: None,
        latest: None,
    };

    pub fn contains(&self, year: i32) -> bool {
        self.earliest.is_none_or(|earliest| year >= earliest)
            && self.latest.is_none_or(|latest| year <= latest)
    }

    pub fn check_year(&self, year: i32) -> Result<()> {
        if self.contains(year) {
            Ok(())
        } else {
            Err(ValueError::YearOutsideAgeWindow {
                year,
                earliest: self.earliest,
                latest: self.latest,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adult_window_in_2024() {
        let window = AgeConstraint::new(Some(18), Some(65)).window(2024).unwrap();
        assert_eq!(window.earliest, Some(1959));
        assert_eq!(window.latest, Some(2006));
        assert!(window.contains(1959));
        assert!(window.contains(2006));
        assert!(!window.contains(1958));
        assert!(!window.contains(2010));
    }

    #[test]
    fn rejected_year_reports_bounds() {
        let window = AgeConstraint::new(Some(18), Some(65)).window(2024).unwrap();
        match window.check_year(2010) {
            Err(ValueError::YearOutsideAgeWindow { year, earliest, latest }) => {
                assert_eq!((year, earliest, latest), (2010, Some(1959), Some(2006)));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn single_bound_leaves_other_side_open() {
        let window = AgeConstraint::new(Some(18), None).window(2024).unwrap();
        assert!(window.contains(1800));
        assert!(!window.contains(2007));

        let window = AgeConstraint::new(None, Some(100)).window(2024).unwrap();
        assert!(window.contains(2024));
        assert!(!window.contains(1923));
    }

    #[test]
    fn inverted_bounds_are_an_error() {
        let error = AgeConstraint::new(Some(70), Some(20)).window(2024).unwrap_err();
        assert!(matches!(error, ValueError::EmptyAgeWindow { min_age: 70, max_age: 20 }));
    }

    #[test]
    fn huge_ages_are_an_error() {
        let error = AgeConstraint::new(None, Some(2_147_483_648)).window(2024).unwrap_err();
        assert!(matches!(error, ValueError::AgeOutOfRange { age: 2_147_483_648 }));

        let error = AgeConstraint::new(Some(18), Some(3_000_000_000)).window(2024).unwrap_err();
        assert!(matches!(error, ValueError::AgeOutOfRange { age: 3_000_000_000 }));

        let error = AgeConstraint::new(Some(2_147_483_647), None).window(-10).unwrap_err();
        assert!(matches!(error, ValueError::AgeOutOfRange { .. }));
    }

    #[test]
    fn large_but_representable_age_still_works() {
        let window = AgeConstraint::new(None, Some(2_000_000_000)).window(2024).unwrap();
        assert_eq!(window.earliest, Some(2024 - 2_000_000_000));
        assert!(window.contains(1990));
    }

    #[test]
    fn no_constraint_accepts_everything() {
        let constraint = AgeConstraint::default();
        assert!(constraint.is_unbounded());
        assert_eq!(constraint.window(2024).unwrap(), AgeWindow::UNBOUNDED);
    }
}
