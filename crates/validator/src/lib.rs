//! # crm-validator
//!
//! Field- and form-level validation for the CRM dashboard's forms.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use crm_validator::prelude::*;
//!
//! let rules = RuleSet::new()
//!     .field("name", Rule::builder().required().min_length(2).build()?)
//!     .field("email", presets::email().clone())
//!     .field("password", presets::password().clone());
//!
//! let form = HashMap::from([
//!     ("name".to_string(), "A".to_string()),
//!     ("email".to_string(), "owner@goldsmiths.in".to_string()),
//! ]);
//!
//! let errors = validate_form(&form, &rules);
//! assert_eq!(errors.get("name"), Some("Minimum 2 characters required"));
//! assert_eq!(errors.get("password"), Some("This field is required."));
//! assert!(!errors.contains("email"));
//! # Ok::<(), ConfigError>(())
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait and error types
//! - [`validators`]: leaf validators (length, pattern, email, phone, password,
//!   age, files)
//! - [`Rule`] / [`validate_field`]: one field's constraints, evaluated in a
//!   fixed order
//! - [`RuleSet`] / [`validate_form`]: a whole form, producing an [`ErrorMap`]
//! - [`presets`]: the shared rule catalog and standalone checks
//! - [`config`]: rule sets declared as JSON
//!
//! Everything is synchronous and pure; validators hold no mutable state and
//! can be shared freely across threads.

// ValidationError is the fundamental error type for all validators; boxing it
// would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod config;
pub mod form;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod presets;
pub mod rule;
pub mod validators;

pub use config::{RuleConfig, RuleSetConfig};
pub use form::{ErrorMap, FormValues, RuleSet, validate_form};
pub use foundation::{ConfigError, Validate, ValidationError};
pub use rule::{CustomCheck, Rule, RuleBuilder, validate_field};
