//! Built-in validators
//!
//! Ready-to-use leaf validators. Each one implements
//! [`Validate`](crate::foundation::Validate) and has a lowercase factory
//! function.
//!
//! # Categories
//!
//! - **Text**: presence, length, regex pattern, email, phone
//! - **Password**: strength, confirmation
//! - **Temporal**: age from birth date
//! - **Files**: size ceiling, media type allow-list
//!
//! # Examples
//!
//! ```rust
//! use crm_validator::foundation::Validate;
//! use crm_validator::validators::{email, max_length};
//!
//! assert!(email().validate("owner@goldsmiths.in").is_ok());
//! assert!(max_length(5).validate("diamond").is_err());
//! ```

pub mod age;
pub mod content;
pub mod file;
pub mod length;
pub mod password;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use length::{MaxLength, MinLength, NotBlank, max_length, min_length, not_blank};

pub use content::{Email, MatchesPattern, Phone, email, matches_pattern, phone};

pub use password::{
    MIN_PASSWORD_LENGTH, PasswordConfirmation, StrongPassword, password_confirmation,
    strong_password,
};

pub use age::{AgeRange, MAX_AGE, MIN_AGE, parse_birth_date};

pub use file::{
    AllowedFileTypes, BYTES_PER_MB, FileInfo, MaxFileSize, allowed_file_types, max_file_size,
};
