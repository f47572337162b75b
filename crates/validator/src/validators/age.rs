//! Age validation from a birth date
//!
//! Age is the difference between the current calendar year and the birth
//! year. Month and day are ignored, so someone born on 31 December counts as
//! a year older from 1 January onwards.

use chrono::{Datelike, Local, NaiveDate};

use crate::foundation::{Validate, ValidationError};

/// Youngest accepted age.
pub const MIN_AGE: i32 = 18;

/// Oldest accepted age.
pub const MAX_AGE: i32 = 120;

/// Accepted textual birth date format.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates that a birth date yields an age within `min..=max` years.
///
/// By default "today" is read from the local clock at validation time; use
/// [`AgeRange::as_of`] to pin it.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use crm_validator::foundation::Validate;
/// use crm_validator::validators::AgeRange;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let validator = AgeRange::adult().as_of(today);
///
/// assert!(validator.validate(&NaiveDate::from_ymd_opt(1990, 3, 14).unwrap()).is_ok());
/// assert!(validator.validate(&NaiveDate::from_ymd_opt(2010, 3, 14).unwrap()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AgeRange {
    /// Minimum age in whole years (inclusive).
    pub min: i32,
    /// Maximum age in whole years (inclusive).
    pub max: i32,
    today: Option<NaiveDate>,
}

impl AgeRange {
    /// Creates an age range validator.
    #[must_use]
    pub fn new(min: i32, max: i32) -> Self {
        Self {
            min,
            max,
            today: None,
        }
    }

    /// The 18..=120 range used by customer and staff onboarding forms.
    #[must_use]
    pub fn adult() -> Self {
        Self::new(MIN_AGE, MAX_AGE)
    }

    /// Evaluates ages relative to a fixed date instead of the local clock.
    #[must_use = "builder methods must be chained or built"]
    pub fn as_of(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Whole-year age by calendar-year subtraction.
    #[must_use]
    pub fn age_of(&self, birth: NaiveDate) -> i32 {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        today.year() - birth.year()
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self::adult()
    }
}

impl Validate for AgeRange {
    type Input = NaiveDate;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let age = self.age_of(*input);
        if age < self.min {
            Err(ValidationError::new(
                "age_out_of_range",
                format!("You must be at least {} years old", self.min),
            )
            .with_param("min", self.min.to_string())
            .with_param("actual", age.to_string()))
        } else if age > self.max {
            Err(invalid_birth_date()
                .with_param("max", self.max.to_string())
                .with_param("actual", age.to_string()))
        } else {
            Ok(())
        }
    }
}

fn invalid_birth_date() -> ValidationError {
    ValidationError::new("age_out_of_range", "Please enter a valid birth date")
}

/// Parses a `YYYY-MM-DD` birth date as entered in a date input.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), BIRTH_DATE_FORMAT).map_err(|_| {
        ValidationError::new("invalid_date", "Please enter a valid birth date")
            .with_param("expected", BIRTH_DATE_FORMAT)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(date(2006, 6, 1), true)]
    #[case(date(2007, 1, 1), false)]
    #[case(date(1904, 1, 1), true)]
    #[case(date(1903, 12, 31), false)]
    fn test_bounds(#[case] birth: NaiveDate, #[case] valid: bool) {
        let validator = AgeRange::adult().as_of(date(2024, 6, 1));
        assert_eq!(validator.validate(&birth).is_ok(), valid);
    }

    #[test]
    fn test_calendar_year_subtraction_ignores_month_and_day() {
        // Born on 31 Dec 2006: 17 years and one day old on 1 Jan 2024, still counted as 18.
        let validator = AgeRange::adult().as_of(date(2024, 1, 1));
        assert_eq!(validator.age_of(date(2006, 12, 31)), 18);
        assert!(validator.validate(&date(2006, 12, 31)).is_ok());
    }

    #[test]
    fn test_messages() {
        let validator = AgeRange::adult().as_of(date(2024, 6, 1));
        assert_eq!(
            validator.check(&date(2015, 1, 1)).as_deref(),
            Some("You must be at least 18 years old")
        );
        assert_eq!(
            validator.check(&date(1800, 1, 1)).as_deref(),
            Some("Please enter a valid birth date")
        );
    }

    #[test]
    fn test_parse_birth_date() {
        assert_eq!(parse_birth_date("1990-03-14").unwrap(), date(1990, 3, 14));
        assert!(parse_birth_date("14/03/1990").is_err());
        assert!(parse_birth_date("1990-02-30").is_err());
    }
}
