//! Error types for validation failures
//!
//! A validation failure is a value, not an exceptional condition: every
//! outcome is either "no error" or a human-readable message that the
//! rendering layer shows beneath the offending input. [`ValidationError`]
//! carries that message together with a stable code and a few parameters so
//! callers can branch on the kind of failure without parsing text.
//!
//! Problems with the *rules themselves* (a malformed regex, contradictory
//! length bounds, an unknown preset) are reported separately through
//! [`ConfigError`], because those are programming or configuration mistakes
//! rather than user input errors.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single field-level validation failure.
///
/// Uses `Cow<'static, str>` so the common case of a static code and message
/// does not allocate.
///
/// # Examples
///
/// ```rust
/// use crm_validator::foundation::ValidationError;
///
/// let error = ValidationError::min_length(8, 3).with_field("password");
/// assert_eq!(error.code, "min_length");
/// assert_eq!(error.param("min"), Some("8"));
/// assert_eq!(error.to_string(), "Minimum 8 characters required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "required", "min_length", "invalid_format"
    pub code: Cow<'static, str>,

    /// Human-readable message displayed to the user.
    pub message: Cow<'static, str>,

    /// Name of the form field the error belongs to, when known.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters (typically 0-3).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Consumes the error, keeping only the display message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message.into_owned()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// The message shown for a blank required field.
    pub const REQUIRED_MESSAGE: &'static str = "This field is required.";

    /// The message shown when a value does not match its pattern.
    pub const INVALID_FORMAT_MESSAGE: &'static str = "Invalid format";

    /// Creates a "required" error.
    #[must_use]
    pub fn required() -> Self {
        Self::new("required", Self::REQUIRED_MESSAGE)
    }

    /// Creates a "min_length" error.
    #[must_use]
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Minimum {min} characters required"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    #[must_use]
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Maximum {max} characters allowed"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", Self::INVALID_FORMAT_MESSAGE).with_param("expected", expected)
    }

    /// Creates a "custom" error with a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// Error raised while building a [`Rule`](crate::Rule) or loading a
/// [`RuleSet`](crate::RuleSet) from configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The pattern is not a valid regular expression.
    #[error("invalid pattern for `{field}`: {reason}")]
    InvalidPattern { field: String, reason: String },

    /// `min_length` is greater than `max_length`.
    #[error("invalid length bounds for `{field}`: min {min} > max {max}")]
    InvalidLengthBounds {
        field: String,
        min: usize,
        max: usize,
    },

    /// The configuration names a preset that does not exist.
    #[error("unknown preset `{preset}` for `{field}`")]
    UnknownPreset { field: String, preset: String },

    /// The configuration document could not be parsed.
    #[error("failed to parse rule configuration: {reason}")]
    Parse { reason: String },
}

impl ConfigError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidPattern { .. } => "RULE_INVALID_PATTERN",
            Self::InvalidLengthBounds { .. } => "RULE_INVALID_LENGTH",
            Self::UnknownPreset { .. } => "RULE_UNKNOWN_PRESET",
            Self::Parse { .. } => "RULE_PARSE",
        }
    }

    /// Attaches a field name to errors raised before the field was known.
    #[must_use]
    pub(crate) fn for_field(self, name: &str) -> Self {
        match self {
            Self::InvalidPattern { reason, .. } => Self::InvalidPattern {
                field: name.to_owned(),
                reason,
            },
            Self::InvalidLengthBounds { min, max, .. } => Self::InvalidLengthBounds {
                field: name.to_owned(),
                min,
                max,
            },
            Self::UnknownPreset { preset, .. } => Self::UnknownPreset {
                field: name.to_owned(),
                preset,
            },
            other @ Self::Parse { .. } => other,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
