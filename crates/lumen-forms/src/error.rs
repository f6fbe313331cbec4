// File: src/error.rs
// Purpose: Errors raised while building rule sets from schema files

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read schema file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema")]
    Parse(#[from] toml::de::Error),

    #[error("field `{field}`: invalid pattern")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("field `{field}`: unknown named pattern `@{name}`")]
    UnknownPattern { field: String, name: String },

    #[error("field `{field}`: unknown preset `{name}`")]
    UnknownPreset { field: String, name: String },

    #[error("field `{field}`: unknown custom validator `{name}`")]
    UnknownValidator { field: String, name: String },

    #[error("field `{field}`: {lower} is greater than {upper}")]
    InvalidBounds {
        field: String,
        lower: &'static str,
        upper: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
