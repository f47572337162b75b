//! Prelude module for convenient imports.
//!
//! `use crm_validator::prelude::*;` brings in the traits, rule and form
//! types, the preset catalog and the standalone checks.

// ============================================================================
// FOUNDATION: Core trait and errors
// ============================================================================

pub use crate::foundation::{ConfigError, Validate, ValidationError};

// ============================================================================
// RULES AND FORMS
// ============================================================================

pub use crate::config::{RuleConfig, RuleSetConfig};
pub use crate::form::{ErrorMap, FormValues, RuleSet, validate_form};
pub use crate::rule::{CustomCheck, Rule, RuleBuilder, validate_field};

// ============================================================================
// PRESETS AND STANDALONE CHECKS
// ============================================================================

pub use crate::presets::{
    self, Preset, validate_age, validate_age_on, validate_birth_date, validate_file_size,
    validate_file_type, validate_password_confirmation,
};

pub use crate::validators::FileInfo;
