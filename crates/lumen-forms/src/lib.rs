//! Lumen Forms
//!
//! Rule-driven validation for the contact, quote and account forms of the
//! Lumen LED display site, plus the small formatting helpers those forms use.
//!
//! ```
//! use lumen_forms::{presets, validate_form, FieldValue, FieldValues, RuleSet};
//!
//! let mut rules = RuleSet::new();
//! rules.insert("email".to_string(), presets::email());
//!
//! let mut values = FieldValues::new();
//! values.insert("email".to_string(), FieldValue::from("buyer@example.com"));
//!
//! assert!(validate_form(&values, &rules).is_valid);
//! ```

pub mod custom;
pub mod error;
pub mod format;
pub mod patterns;
pub mod presets;
pub mod rule;
pub mod schema;
pub mod validation;
pub mod value;

pub use error::SchemaError;
pub use format::{format_currency, format_phone_number, parse_number};
pub use rule::{CustomValidator, RuleSet, ValidationRule};
pub use schema::{FieldSpec, FormSchema, SchemaFile};
pub use validation::{validate_field, validate_form, ValidationResult};
pub use value::{values_from_json, FieldValue, FieldValues};
