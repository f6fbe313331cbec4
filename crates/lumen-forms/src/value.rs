// File: src/value.rs
// Purpose: Submitted field values

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A value submitted for one form field.
///
/// Only `String` and `Number` carry type-specific constraints. The remaining
/// shapes skip straight to a rule's custom validator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum FieldValue {
    #[default]
    Absent,
    String(String),
    Number(f64),
    Bool(bool),
    List(Vec<FieldValue>),
    Object(IndexMap<String, FieldValue>),
}

/// Field name to submitted value
pub type FieldValues = IndexMap<String, FieldValue>;

impl FieldValue {
    /// True for an absent value, a NaN, or a string that is empty after
    /// trimming
    pub fn is_missing(&self) -> bool {
        match self {
            FieldValue::Absent => true,
            FieldValue::String(s) => s.trim().is_empty(),
            FieldValue::Number(n) => n.is_nan(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Short name of the runtime shape, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Absent => "absent",
            FieldValue::String(_) => "string",
            FieldValue::Number(_) => "number",
            FieldValue::Bool(_) => "bool",
            FieldValue::List(_) => "list",
            FieldValue::Object(_) => "object",
        }
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Absent,
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            // as_f64 only fails under arbitrary_precision
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(FieldValue::Number)
                .unwrap_or_else(|| FieldValue::String(n.to_string())),
            serde_json::Value::String(s) => FieldValue::String(s),
            serde_json::Value::Array(items) => {
                FieldValue::List(items.into_iter().map(FieldValue::from).collect())
            }
            serde_json::Value::Object(map) => FieldValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, FieldValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<FieldValue> for serde_json::Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Absent => serde_json::Value::Null,
            FieldValue::String(s) => serde_json::Value::String(s),
            FieldValue::Number(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(b),
            FieldValue::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            FieldValue::Object(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Absent)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// Parse a JSON object of submitted values.
///
/// A non-object document yields an empty set, so every field reads as absent.
pub fn values_from_json(json: serde_json::Value) -> FieldValues {
    match FieldValue::from(json) {
        FieldValue::Object(map) => map,
        _ => FieldValues::new(),
    }
}
