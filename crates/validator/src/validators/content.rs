//! String content validators
//!
//! Regex-backed format checks: arbitrary patterns, email addresses and phone
//! numbers.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

pub(crate) static EMAIL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Digits with optional leading `+` and common separators.
pub(crate) static PHONE_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^\+?[0-9(][0-9\s\-().]{6,19}$").unwrap());

/// Accepted digit count for a phone number once separators are stripped.
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=15;

// ============================================================================
// PATTERN VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    pub MatchesPattern { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("pattern")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: regex::Regex::new(pattern)?,
        })
    }
    fn matches_pattern(pattern: &str) -> regex::Error;
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email format: one `@`, no whitespace, a dotted domain.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) {
        ValidationError::new("invalid_email", "Please enter a valid email address")
    }
    fn email();
}

// ============================================================================
// PHONE VALIDATOR
// ============================================================================

fn digit_count(input: &str) -> usize {
    input.chars().filter(char::is_ascii_digit).count()
}

crate::validator! {
    /// Validates a phone number written with optional `+`, spaces, dashes,
    /// dots or parentheses, carrying 10 to 15 digits.
    pub Phone for str;
    rule(input) { PHONE_REGEX.is_match(input) && PHONE_DIGITS.contains(&digit_count(input)) }
    error(input) {
        ValidationError::new("invalid_phone", "Please enter a valid phone number")
            .with_param("digits", digit_count(input).to_string())
    }
    fn phone();
}

// ============================================================================
// TESTS
// ============================================================================
