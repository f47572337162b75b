//! Preset rules and standalone validators
//!
//! The presets are process-wide immutable rules for the field types that
//! recur across the dashboard's forms. They are built on first use and never
//! change afterwards.
//!
//! The standalone functions cover checks that do not fit the single-string
//! [`Rule`] model (two values, dates, files). Each returns the message to
//! display, or `None`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::foundation::{ConfigError, Validate};
use crate::rule::{CustomCheck, Rule};
use crate::validators::content::{EMAIL_REGEX, PHONE_REGEX};
use crate::validators::{
    AgeRange, AllowedFileTypes, Email, FileInfo, MIN_PASSWORD_LENGTH, MatchesPattern, MaxFileSize,
    PasswordConfirmation, Phone, StrongPassword, parse_birth_date,
};

// ============================================================================
// PRESET RULES
// ============================================================================

static EMAIL: LazyLock<Rule> = LazyLock::new(|| Rule {
    required: true,
    pattern: Some(MatchesPattern {
        pattern: EMAIL_REGEX.clone(),
    }),
    custom: Some(CustomCheck::from_validator(Email)),
    ..Rule::default()
});

static PASSWORD: LazyLock<Rule> = LazyLock::new(|| Rule {
    required: true,
    min_length: Some(MIN_PASSWORD_LENGTH),
    custom: Some(CustomCheck::from_validator(StrongPassword)),
    ..Rule::default()
});

static PHONE: LazyLock<Rule> = LazyLock::new(|| Rule {
    required: true,
    pattern: Some(MatchesPattern {
        pattern: PHONE_REGEX.clone(),
    }),
    custom: Some(CustomCheck::from_validator(Phone)),
    ..Rule::default()
});

static REQUIRED: LazyLock<Rule> = LazyLock::new(Rule::required);

static OPTIONAL: LazyLock<Rule> = LazyLock::new(Rule::optional);

/// Required email address.
pub fn email() -> &'static Rule {
    &EMAIL
}

/// Required password: eight or more characters with lowercase, uppercase and a digit.
pub fn password() -> &'static Rule {
    &PASSWORD
}

/// Required phone number.
pub fn phone() -> &'static Rule {
    &PHONE
}

/// Any non-blank value.
pub fn required() -> &'static Rule {
    &REQUIRED
}

/// Always valid.
pub fn optional() -> &'static Rule {
    &OPTIONAL
}

/// Names of the preset catalog, as used in rule configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Email,
    Password,
    Phone,
    Required,
    Optional,
}

impl Preset {
    /// Every preset, in catalog order.
    pub const ALL: [Preset; 5] = [
        Preset::Email,
        Preset::Password,
        Preset::Phone,
        Preset::Required,
        Preset::Optional,
    ];

    /// The configuration name of the preset.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Preset::Email => "email",
            Preset::Password => "password",
            Preset::Phone => "phone",
            Preset::Required => "required",
            Preset::Optional => "optional",
        }
    }

    /// The shared rule for this preset.
    #[must_use]
    pub fn rule(self) -> &'static Rule {
        match self {
            Preset::Email => email(),
            Preset::Password => password(),
            Preset::Phone => phone(),
            Preset::Required => required(),
            Preset::Optional => optional(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownPreset {
                field: String::new(),
                preset: s.to_owned(),
            })
    }
}

/// Looks up a preset rule by its configuration name.
pub fn by_name(name: &str) -> Option<&'static Rule> {
    name.parse::<Preset>().ok().map(Preset::rule)
}

// ============================================================================
// STANDALONE VALIDATORS
// ============================================================================

/// Fails unless `confirmation` is identical to `password`.
pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Option<String> {
    PasswordConfirmation::new(password).check(confirmation)
}

/// Checks that the age implied by `birth_date` is between 18 and 120,
/// relative to the local date today.
pub fn validate_age(birth_date: NaiveDate) -> Option<String> {
    AgeRange::adult().check(&birth_date)
}

/// Like [`validate_age`], relative to a given `today`.
pub fn validate_age_on(birth_date: NaiveDate, today: NaiveDate) -> Option<String> {
    AgeRange::adult().as_of(today).check(&birth_date)
}

/// Parses a `YYYY-MM-DD` birth date and checks the implied age.
pub fn validate_birth_date(birth_date: &str) -> Option<String> {
    match parse_birth_date(birth_date) {
        Ok(date) => validate_age(date),
        Err(err) => Some(err.into_message()),
    }
}

/// Fails when `file` is larger than `max_megabytes` (1 MB = 1,048,576 bytes).
pub fn validate_file_size(file: &FileInfo, max_megabytes: f64) -> Option<String> {
    MaxFileSize::new(max_megabytes).check(file)
}

/// Fails when the media type of `file` is not in `allowed`.
pub fn validate_file_type<S: AsRef<str>>(file: &FileInfo, allowed: &[S]) -> Option<String> {
    AllowedFileTypes::new(allowed.iter().map(<S as AsRef<str>>::as_ref)).check(file)
}

// ============================================================================
// TESTS
// ============================================================================
