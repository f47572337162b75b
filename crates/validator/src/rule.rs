//! Field rules
//!
//! A [`Rule`] is the declarative constraint set attached to one form field.
//! Every constraint is an explicit optional member, and a rule can only be
//! obtained through constructors that check it, so a `Rule` value is always
//! well formed: its pattern compiles and its length bounds are ordered.
//!
//! # Evaluation order
//!
//! 1. `required` and the trimmed value is empty: "This field is required."
//! 2. The trimmed value is empty and the field is optional: valid, nothing
//!    else runs.
//! 3. `min_length`, then `max_length`, then `pattern`; the first failure wins.
//! 4. `custom`, when present, always runs last and its result replaces the
//!    outcome of step 3, whether that was a pass or a failure.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{ConfigError, Validate, ValidationError, ValidationResult};
use crate::validators::{MatchesPattern, MaxLength, MinLength, not_blank};

// ============================================================================
// CUSTOM CHECK
// ============================================================================

/// Signature of a custom predicate: a message on failure, `None` when valid.
pub type CustomFn = dyn Fn(&str) -> Option<String> + Send + Sync;

/// A shareable caller-supplied predicate attached to a [`Rule`].
#[derive(Clone)]
pub struct CustomCheck(Arc<CustomFn>);

impl CustomCheck {
    /// Wraps a closure.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self(Arc::new(check))
    }

    /// Adapts any string validator into a custom predicate.
    pub fn from_validator<V>(validator: V) -> Self
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        Self::new(move |value| validator.check(value))
    }

    /// Runs the predicate.
    pub fn call(&self, value: &str) -> Option<String> {
        (self.0)(value)
    }
}

impl fmt::Debug for CustomCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomCheck(<function>)")
    }
}

// ============================================================================
// RULE
// ============================================================================

/// Constraints for a single form field.
///
/// # Examples
///
/// ```rust
/// use crm_validator::{Rule, validate_field};
///
/// let rule = Rule::builder().required().min_length(3).max_length(40).build()?;
///
/// assert_eq!(validate_field("", &rule).as_deref(), Some("This field is required."));
/// assert_eq!(validate_field("ab", &rule).as_deref(), Some("Minimum 3 characters required"));
/// assert_eq!(validate_field("Kundan Jewellers", &rule), None);
/// # Ok::<(), crm_validator::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Rule {
    pub(crate) required: bool,
    pub(crate) min_length: Option<usize>,
    pub(crate) max_length: Option<usize>,
    pub(crate) pattern: Option<MatchesPattern>,
    pub(crate) custom: Option<CustomCheck>,
}

impl Rule {
    /// Starts building a rule.
    #[must_use]
    pub fn builder() -> RuleBuilder {
        RuleBuilder::default()
    }

    /// A rule that only requires a non-blank value.
    #[must_use]
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    /// A rule with no constraints; every value passes.
    #[must_use]
    pub fn optional() -> Self {
        Self::default()
    }

    /// Returns a builder pre-filled with this rule's constraints.
    #[must_use]
    pub fn to_builder(&self) -> RuleBuilder {
        RuleBuilder {
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            pattern: self.pattern.clone().map(PatternInput::Compiled),
            custom: self.custom.clone(),
        }
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn min_length(&self) -> Option<usize> {
        self.min_length
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Source of the pattern, if any.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(|p| p.pattern.as_str())
    }

    pub fn has_custom(&self) -> bool {
        self.custom.is_some()
    }

    /// Length and pattern checks, stopping at the first failure.
    fn check_constraints(&self, input: &str) -> ValidationResult<()> {
        if let Some(min) = self.min_length {
            MinLength::new(min).validate(input)?;
        }
        if let Some(max) = self.max_length {
            MaxLength::new(max).validate(input)?;
        }
        if let Some(pattern) = &self.pattern {
            pattern.validate(input)?;
        }
        Ok(())
    }
}

impl Validate for Rule {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if let Err(err) = not_blank().validate(input) {
            return if self.required { Err(err) } else { Ok(()) };
        }

        let outcome = self.check_constraints(input);

        match &self.custom {
            Some(custom) => custom.call(input).map_or(Ok(()), |message| {
                Err(ValidationError::custom(message))
            }),
            None => outcome,
        }
    }
}

/// Evaluates one field's value against its rule.
///
/// Returns the message to display, or `None` when the value is valid.
pub fn validate_field(value: &str, rule: &Rule) -> Option<String> {
    rule.check(value)
}

// ============================================================================
// BUILDER
// ============================================================================

#[derive(Debug, Clone)]
enum PatternInput {
    Source(String),
    Compiled(MatchesPattern),
}

/// Builder for [`Rule`]; [`build`](RuleBuilder::build) checks the result.
#[derive(Debug, Clone, Default)]
pub struct RuleBuilder {
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<PatternInput>,
    custom: Option<CustomCheck>,
}

impl RuleBuilder {
    /// Marks the field as required.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field as optional (the default).
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Sets a regex source; it is compiled by [`build`](RuleBuilder::build).
    #[must_use = "builder methods must be chained or built"]
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(PatternInput::Source(pattern.into()));
        self
    }

    /// Sets an already compiled regex.
    #[must_use = "builder methods must be chained or built"]
    pub fn regex(mut self, pattern: regex::Regex) -> Self {
        self.pattern = Some(PatternInput::Compiled(MatchesPattern { pattern }));
        self
    }

    /// Sets the custom predicate.
    #[must_use = "builder methods must be chained or built"]
    pub fn custom<F>(mut self, check: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.custom = Some(CustomCheck::new(check));
        self
    }

    /// Sets the custom predicate from an existing check.
    #[must_use = "builder methods must be chained or built"]
    pub fn custom_check(mut self, check: CustomCheck) -> Self {
        self.custom = Some(check);
        self
    }

    /// Validates the constraints and produces the rule.
    pub fn build(self) -> Result<Rule, ConfigError> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length)
            && min > max
        {
            return Err(ConfigError::InvalidLengthBounds {
                field: String::new(),
                min,
                max,
            });
        }

        let pattern = match self.pattern {
            Some(PatternInput::Source(source)) => Some(MatchesPattern::new(&source).map_err(
                |err| ConfigError::InvalidPattern {
                    field: String::new(),
                    reason: err.to_string(),
                },
            )?),
            Some(PatternInput::Compiled(compiled)) => Some(compiled),
            None => None,
        };

        Ok(Rule {
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            pattern,
            custom: self.custom,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
