// File: src/rule.rs
// Purpose: Declarative per-field constraints

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use regex::Regex;

use crate::value::FieldValue;

/// Custom validator: returns an error message, or `None` when the value passes
pub type CustomValidator = Arc<dyn Fn(&FieldValue) -> Option<String> + Send + Sync>;

/// Field name to rule, evaluated in insertion order
pub type RuleSet = IndexMap<String, ValidationRule>;

/// Constraints for a single field.
///
/// Every constraint is optional. Length and pattern checks apply to string
/// values, `min`/`max` to numbers, and `custom` always runs last when set.
#[derive(Clone, Default)]
pub struct ValidationRule {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub custom: Option<CustomValidator>,
}

impl ValidationRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn custom<F>(mut self, validator: F) -> Self
    where
        F: Fn(&FieldValue) -> Option<String> + Send + Sync + 'static,
    {
        self.custom = Some(Arc::new(validator));
        self
    }

    /// Share an already boxed validator, e.g. one from the named registry
    pub fn custom_arc(mut self, validator: CustomValidator) -> Self {
        self.custom = Some(validator);
        self
    }

    /// True when the rule places no constraint at all
    pub fn is_empty(&self) -> bool {
        !self.required
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.pattern.is_none()
            && self.min.is_none()
            && self.max.is_none()
            && self.custom.is_none()
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .field("min", &self.min)
            .field("max", &self.max)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

impl fmt::Display for ValidationRule {
    /// Compact summary such as `required, length 2..=50, pattern ^\d+$`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.required {
            parts.push("required".to_string());
        }
        match (self.min_length, self.max_length) {
            (Some(min), Some(max)) => parts.push(format!("length {}..={}", min, max)),
            (Some(min), None) => parts.push(format!("length >= {}", min)),
            (None, Some(max)) => parts.push(format!("length <= {}", max)),
            (None, None) => {}
        }
        if let Some(pattern) = &self.pattern {
            parts.push(format!("pattern {}", pattern.as_str()));
        }
        match (self.min, self.max) {
            (Some(min), Some(max)) => parts.push(format!("range {}..={}", min, max)),
            (Some(min), None) => parts.push(format!(">= {}", min)),
            (None, Some(max)) => parts.push(format!("<= {}", max)),
            (None, None) => {}
        }
        if self.custom.is_some() {
            parts.push("custom".to_string());
        }

        if parts.is_empty() {
            write!(f, "no constraints")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}
