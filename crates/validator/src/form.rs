//! Form-level validation
//!
//! A [`RuleSet`] maps field names to [`Rule`]s for a whole form. Validating a
//! form runs every rule against the matching value and collects the failures
//! into an [`ErrorMap`]. Only fields named in the rule set are ever looked
//! at, so the error map's keys are always a subset of the rule set's keys.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::foundation::Validate;
use crate::rule::Rule;

// ============================================================================
// FORM VALUES
// ============================================================================

/// Read access to the current values of a form.
///
/// Implemented for the common string maps and for JSON objects. A JSON value
/// that is not a string (a number, `null`, ...) reads as absent.
pub trait FormValues {
    /// Returns the current value of `field`, if the form has one.
    fn value(&self, field: &str) -> Option<&str>;
}

impl<S: BuildHasher> FormValues for HashMap<String, String, S> {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl FormValues for BTreeMap<String, String> {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl<S: BuildHasher> FormValues for IndexMap<String, String, S> {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).map(String::as_str)
    }
}

impl FormValues for serde_json::Map<String, serde_json::Value> {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(serde_json::Value::as_str)
    }
}

impl FormValues for serde_json::Value {
    fn value(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(serde_json::Value::as_str)
    }
}

impl<T: FormValues + ?Sized> FormValues for &T {
    fn value(&self, field: &str) -> Option<&str> {
        (**self).value(field)
    }
}

// ============================================================================
// ERROR MAP
// ============================================================================

/// Field name to error message for every field that currently fails.
///
/// Valid fields are absent, never present with an empty message. Keys are
/// kept sorted so two maps with the same content serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, String>);

// Validity is the emptiness check, so `is_valid` stands in for `is_empty`.
#[allow(clippy::len_without_is_empty)]
impl ErrorMap {
    /// Creates an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when no field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The message for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Iterates `(field, message)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Names of the failing fields.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }

    pub(crate) fn insert(&mut self, field: String, message: String) {
        self.0.insert(field, message);
    }
}

impl IntoIterator for ErrorMap {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<ErrorMap> for BTreeMap<String, String> {
    fn from(errors: ErrorMap) -> Self {
        errors.0
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// Rules for every validated field of a form, in declaration order.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use crm_validator::{RuleSet, presets};
///
/// let rules = RuleSet::new()
///     .field("email", presets::email().clone())
///     .field("phone", presets::phone().clone());
///
/// let form = HashMap::from([
///     ("email".to_string(), "owner@goldsmiths.in".to_string()),
///     ("phone".to_string(), String::new()),
/// ]);
///
/// let errors = rules.validate(&form);
/// assert_eq!(errors.get("phone"), Some("This field is required."));
/// assert!(!errors.contains("email"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: IndexMap<String, Rule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the rule for `name`.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.insert(name, rule);
        self
    }

    /// Adds or replaces the rule for `name`, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, rule: Rule) -> Option<Rule> {
        self.rules.insert(name.into(), rule)
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Validates a whole form. Equivalent to [`validate_form`].
    pub fn validate<F: FormValues + ?Sized>(&self, form: &F) -> ErrorMap {
        validate_form(form, self)
    }

    /// Validates a single field as the user types.
    ///
    /// A field without a rule is never validated and yields `None`.
    pub fn validate_field(&self, name: &str, value: &str) -> Option<String> {
        self.rules.get(name).and_then(|rule| rule.check(value))
    }
}

impl<K: Into<String>> FromIterator<(K, Rule)> for RuleSet {
    fn from_iter<I: IntoIterator<Item = (K, Rule)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Validates every field named in `rules` against `form`.
///
/// A field missing from the form is validated as the empty string. Fields
/// present in the form but absent from `rules` are ignored.
pub fn validate_form<F: FormValues + ?Sized>(form: &F, rules: &RuleSet) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for (name, rule) in &rules.rules {
        let value = form.value(name).unwrap_or_default();
        if let Err(err) = rule.validate(value) {
            tracing::trace!(field = %name, code = %err.code, "field failed validation");
            errors.insert(name.clone(), err.into_message());
        }
    }

    tracing::debug!(
        fields = rules.len(),
        errors = errors.len(),
        "form validated"
    );
    errors
}

// ============================================================================
// TESTS
// ============================================================================
