//! Core traits for the validation system
//!
//! This module defines the fundamental trait that all validators implement.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// The trait is generic over the input type, so a length validator only
/// accepts strings and a file validator only accepts [`FileInfo`]. Every
/// validator is pure: the same input always yields the same result, and no
/// state is read or written outside the arguments.
///
/// # Examples
///
/// ```rust
/// use crm_validator::foundation::{Validate, ValidationError};
///
/// struct NoDigits;
///
/// impl Validate for NoDigits {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.chars().any(|c| c.is_ascii_digit()) {
///             Err(ValidationError::custom("Digits are not allowed"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoDigits.validate("ruby").is_ok());
/// assert_eq!(NoDigits.check("ruby1").as_deref(), Some("Digits are not allowed"));
/// ```
///
/// [`FileInfo`]: crate::validators::FileInfo
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Validates the input and returns only the display message.
    ///
    /// `None` means the input is valid. This is the shape the form layer
    /// consumes: a message to show, or nothing.
    fn check(&self, input: &Self::Input) -> Option<String> {
        self.validate(input).err().map(ValidationError::into_message)
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysValid;

    impl Validate for AlwaysValid {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Ok(())
        }
    }

    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = str;

        fn validate(&self, _input: &Self::Input) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "Always fails"))
        }
    }

    #[test]
    fn test_validator_trait() {
        assert!(AlwaysValid.validate("test").is_ok());
        assert!(AlwaysFails.validate("test").is_err());
    }

    #[test]
    fn test_check_returns_message() {
        assert_eq!(AlwaysValid.check("test"), None);
        assert_eq!(AlwaysFails.check("test").as_deref(), Some("Always fails"));
    }

    #[test]
    fn test_reference_is_validator() {
        let validators: [&dyn Validate<Input = str>; 2] = [&AlwaysValid, &AlwaysFails];
        let failures = validators.iter().filter_map(|v| v.check("x")).count();
        assert_eq!(failures, 1);
    }
}
