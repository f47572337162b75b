//! Declarative rule configuration
//!
//! Forms can declare their rules as data instead of code. Each field names an
//! optional [`Preset`](crate::presets::Preset) as its starting point and may
//! override individual constraints:
//!
//! ```json
//! {
//!   "email":    { "preset": "email" },
//!   "password": { "preset": "password", "max_length": 64 },
//!   "gstin":    { "required": true, "pattern": "^[0-9A-Z]{15}$" },
//!   "notes":    { "max_length": 500 }
//! }
//! ```
//!
//! Custom predicates cannot be expressed as data; they only arrive through a
//! preset.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::foundation::ConfigError;
use crate::form::RuleSet;
use crate::presets::Preset;
use crate::rule::{Rule, RuleBuilder};

/// Constraints of one field as written in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    /// Preset to start from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Regular expression source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl RuleConfig {
    /// Resolves the preset, applies the overrides and checks the result.
    pub fn build(&self) -> Result<Rule, ConfigError> {
        let mut builder = match &self.preset {
            Some(name) => name.parse::<Preset>()?.rule().to_builder(),
            None => RuleBuilder::default(),
        };

        if let Some(required) = self.required {
            builder = if required {
                builder.required()
            } else {
                builder.optional()
            };
        }
        if let Some(min) = self.min_length {
            builder = builder.min_length(min);
        }
        if let Some(max) = self.max_length {
            builder = builder.max_length(max);
        }
        if let Some(pattern) = &self.pattern {
            builder = builder.pattern(pattern.clone());
        }

        builder.build()
    }
}

/// A whole form's rule configuration, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSetConfig {
    pub fields: IndexMap<String, RuleConfig>,
}

impl RuleSet {
    /// Builds a rule set from parsed configuration.
    ///
    /// Fails on the first field whose rule is invalid; the error names it.
    pub fn from_config(config: &RuleSetConfig) -> Result<Self, ConfigError> {
        let mut rules = RuleSet::new();
        for (name, field) in &config.fields {
            let rule = field.build().map_err(|err| err.for_field(name))?;
            rules.insert(name.clone(), rule);
        }

        tracing::debug!(fields = rules.len(), "rule set loaded from config");
        Ok(rules)
    }

    /// Parses a JSON rule configuration and builds the rule set.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RuleSetConfig = serde_json::from_str(json)?;
        Self::from_config(&config)
    }
}

impl TryFrom<&RuleSetConfig> for RuleSet {
    type Error = ConfigError;

    fn try_from(config: &RuleSetConfig) -> Result<Self, Self::Error> {
        Self::from_config(config)
    }
}
