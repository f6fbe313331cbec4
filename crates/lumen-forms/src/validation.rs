// File: src/validation.rs
// Purpose: Field and form validation

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, trace};

use crate::rule::{RuleSet, ValidationRule};
use crate::value::{FieldValue, FieldValues};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid format";

/// Result of validating a whole form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: IndexMap<String, String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        Self {
            is_valid: true,
            errors: IndexMap::new(),
        }
    }

    /// Build a result from collected errors; valid exactly when there are none
    pub fn from_errors(errors: IndexMap<String, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get the error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

/// Validate one value against one rule.
///
/// Returns the error message, or `None` when the value passes. A rule's custom
/// validator runs last and its answer replaces whatever the built-in checks
/// concluded, including an earlier failure.
pub fn validate_field(value: &FieldValue, rule: &ValidationRule) -> Option<String> {
    if value.is_missing() {
        return rule.required.then(|| REQUIRED_MESSAGE.to_string());
    }

    let builtin = match value {
        FieldValue::String(s) => check_string(s, rule),
        FieldValue::Number(n) => check_number(*n, rule),
        _ => None,
    };

    match &rule.custom {
        Some(custom) => custom(value),
        None => builtin,
    }
}

/// Validate every field named in `rules`.
///
/// Fields missing from `values` are treated as absent and extra values are
/// ignored. Errors keep the order of `rules`.
pub fn validate_form(values: &FieldValues, rules: &RuleSet) -> ValidationResult {
    let mut errors = IndexMap::new();

    for (field, rule) in rules {
        let value = values.get(field).unwrap_or(&FieldValue::Absent);
        if let Some(message) = validate_field(value, rule) {
            trace!(field = %field, kind = value.kind(), %message, "field failed validation");
            errors.insert(field.clone(), message);
        }
    }

    debug!(
        fields = rules.len(),
        failed = errors.len(),
        "form validated"
    );

    ValidationResult::from_errors(errors)
}

fn check_string(s: &str, rule: &ValidationRule) -> Option<String> {
    let len = s.chars().count();

    if let Some(min) = rule.min_length {
        if len < min {
            return Some(format!("Must be at least {} characters", min));
        }
    }

    if let Some(max) = rule.max_length {
        if len > max {
            return Some(format!("Must be at most {} characters", max));
        }
    }

    if let Some(pattern) = &rule.pattern {
        if !pattern.is_match(s) {
            return Some(INVALID_FORMAT_MESSAGE.to_string());
        }
    }

    None
}

fn check_number(n: f64, rule: &ValidationRule) -> Option<String> {
    if let Some(min) = rule.min {
        if n < min {
            return Some(format!("Must be at least {}", min));
        }
    }

    if let Some(max) = rule.max {
        if n > max {
            return Some(format!("Must be at most {}", max));
        }
    }

    None
}
