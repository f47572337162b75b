//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Traits**: `Validate`
//! - **Errors**: `ValidationError` for user input, `ConfigError` for rule construction
//!
//! # Architecture
//!
//! Validators are generic over their input type and return a structured
//! error on failure:
//!
//! ```rust
//! use crm_validator::foundation::Validate;
//! use crm_validator::validators::min_length;
//!
//! let validator = min_length(5);
//! assert!(validator.validate("hello").is_ok());
//! assert_eq!(validator.check("hi").as_deref(), Some("Minimum 5 characters required"));
//! ```

pub mod error;
pub mod traits;

pub use error::{ConfigError, ValidationError};
pub use traits::Validate;

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
