// File: src/schema.rs
// Purpose: Form schemas loaded from TOML
//
// A schema names a form and lists its fields in evaluation order:
//
//     [form]
//     name = "quote"
//
//     [fields.email]
//     required = true
//     custom = "business_email"
//
//     [fields.screen_width_m]
//     required = true
//     min = 0.5
//     max = 40
//
// Explicit keys override whatever the preset sets. `pattern` takes either a
// regular expression or `@name` for a prebuilt one.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::custom;
use crate::error::{Result, SchemaError};
use crate::patterns;
use crate::presets;
use crate::rule::{RuleSet, ValidationRule};
use crate::validation::{validate_form, ValidationResult};
use crate::value::FieldValues;

/// On-disk shape of a schema file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaFile {
    #[serde(default)]
    pub form: FormMeta,

    #[serde(default)]
    pub fields: IndexMap<String, FieldSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormMeta {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// Constraints for one field as written in the schema file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub custom: Option<String>,
}

/// A named form and its compiled rules
#[derive(Debug, Clone)]
pub struct FormSchema {
    pub name: String,
    pub description: Option<String>,
    pub rules: RuleSet,
}

impl FormSchema {
    /// Parse and compile a schema document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: SchemaFile = toml::from_str(content)?;
        Self::from_file(file)
    }

    /// Load a schema from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut schema = Self::from_toml_str(&content)?;

        // Unnamed schemas take their file stem
        if schema.name.is_empty() {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                schema.name = stem.to_string();
            }
        }

        debug!(form = %schema.name, fields = schema.rules.len(), path = ?path, "schema loaded");
        Ok(schema)
    }

    /// Compile an already parsed schema file
    pub fn from_file(file: SchemaFile) -> Result<Self> {
        let rules = file
            .fields
            .iter()
            .map(|(field, spec)| Ok((field.clone(), compile_field(field, spec)?)))
            .collect::<Result<RuleSet>>()?;

        Ok(Self {
            name: file.form.name,
            description: file.form.description,
            rules,
        })
    }

    pub fn validate(&self, values: &FieldValues) -> ValidationResult {
        validate_form(values, &self.rules)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

/// Turn one field spec into a rule, applying the preset first
pub fn compile_field(field: &str, spec: &FieldSpec) -> Result<ValidationRule> {
    let mut rule = match &spec.preset {
        Some(name) => presets::preset(name).ok_or_else(|| SchemaError::UnknownPreset {
            field: field.to_string(),
            name: name.clone(),
        })?,
        None => ValidationRule::new(),
    };

    if let Some(required) = spec.required {
        rule.required = required;
    }
    if spec.min_length.is_some() {
        rule.min_length = spec.min_length;
    }
    if spec.max_length.is_some() {
        rule.max_length = spec.max_length;
    }
    if let Some(pattern) = &spec.pattern {
        rule.pattern = Some(compile_pattern(field, pattern)?);
    }
    if spec.min.is_some() {
        rule.min = spec.min;
    }
    if spec.max.is_some() {
        rule.max = spec.max;
    }
    if let Some(name) = &spec.custom {
        let validator = custom::lookup(name).ok_or_else(|| SchemaError::UnknownValidator {
            field: field.to_string(),
            name: name.clone(),
        })?;
        rule = rule.custom_arc(validator);
    }

    check_bounds(field, &rule)?;
    Ok(rule)
}

fn compile_pattern(field: &str, pattern: &str) -> Result<Regex> {
    if let Some(name) = pattern.strip_prefix('@') {
        return patterns::named(name)
            .cloned()
            .ok_or_else(|| SchemaError::UnknownPattern {
                field: field.to_string(),
                name: name.to_string(),
            });
    }

    Regex::new(pattern).map_err(|source| SchemaError::InvalidPattern {
        field: field.to_string(),
        source,
    })
}

fn check_bounds(field: &str, rule: &ValidationRule) -> Result<()> {
    if let (Some(min), Some(max)) = (rule.min_length, rule.max_length) {
        if min > max {
            return Err(SchemaError::InvalidBounds {
                field: field.to_string(),
                lower: "min_length",
                upper: "max_length",
            });
        }
    }

    if let (Some(min), Some(max)) = (rule.min, rule.max) {
        if min > max {
            return Err(SchemaError::InvalidBounds {
                field: field.to_string(),
                lower: "min",
                upper: "max",
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_schema() {
        let schema = FormSchema::from_toml_str("").unwrap();
        assert!(schema.name.is_empty());
        assert!(schema.rules.is_empty());
    }

    #[test]
    fn test_preset_then_overrides() {
        let spec = FieldSpec {
            preset: Some("name".to_string()),
            required: Some(false),
            max_length: Some(80),
            ..Default::default()
        };
        let rule = compile_field("company", &spec).unwrap();
        assert!(!rule.required);
        assert_eq!(rule.min_length, Some(2));
        assert_eq!(rule.max_length, Some(80));
    }

    #[test]
    fn test_named_pattern() {
        let spec = FieldSpec {
            pattern: Some("@email".to_string()),
            ..Default::default()
        };
        let rule = compile_field("email", &spec).unwrap();
        assert_eq!(rule.pattern.unwrap().as_str(), patterns::EMAIL.as_str());
    }

    #[test]
    fn test_errors() {
        let bad_regex = FieldSpec {
            pattern: Some("(".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            compile_field("code", &bad_regex),
            Err(SchemaError::InvalidPattern { .. })
        ));

        let bad_name = FieldSpec {
            pattern: Some("@postcode".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            compile_field("zip", &bad_name),
            Err(SchemaError::UnknownPattern { .. })
        ));

        let bad_preset = FieldSpec {
            preset: Some("captcha".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            compile_field("captcha", &bad_preset),
            Err(SchemaError::UnknownPreset { .. })
        ));

        let bad_custom = FieldSpec {
            custom: Some("is_robot".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            compile_field("captcha", &bad_custom),
            Err(SchemaError::UnknownValidator { .. })
        ));

        let bad_bounds = FieldSpec {
            min: Some(10.0),
            max: Some(1.0),
            ..Default::default()
        };
        let err = compile_field("quantity", &bad_bounds).unwrap_err();
        assert_eq!(err.to_string(), "field `quantity`: min is greater than max");
    }

    #[test]
    fn test_preset_bounds_are_checked() {
        // message preset has min_length 10
        let spec = FieldSpec {
            preset: Some("message".to_string()),
            max_length: Some(5),
            ..Default::default()
        };
        assert!(matches!(
            compile_field("notes", &spec),
            Err(SchemaError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let toml = r#"
            [fields.email]
            requird = true
        "#;
        assert!(matches!(
            FormSchema::from_toml_str(toml),
            Err(SchemaError::Parse(_))
        ));
    }
}
