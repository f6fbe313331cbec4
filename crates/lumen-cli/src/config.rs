// File: src/config.rs
// Purpose: Configuration parsing from lumen.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use lumen_forms::format::{DEFAULT_CURRENCY, DEFAULT_LOCALE};

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub schemas: SchemasConfig,

    #[serde(default)]
    pub formatting: FormattingConfig,
}

/// Where form schemas live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemasConfig {
    /// Directory searched for `<form>.toml` (default: "forms")
    #[serde(default = "default_schemas_dir")]
    pub dir: String,
}

/// Defaults for the formatting commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattingConfig {
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default = "default_currency")]
    pub currency: String,
}

// Default values
fn default_schemas_dir() -> String {
    "forms".to_string()
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Default for SchemasConfig {
    fn default() -> Self {
        Self {
            dir: default_schemas_dir(),
        }
    }
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            currency: default_currency(),
        }
    }
}

impl Config {
    /// Load configuration from lumen.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            debug!(path = ?path, "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Resolve a form argument to a schema path.
    ///
    /// Anything that looks like a path (has a `.toml` extension or a
    /// separator) is used as given; a bare name is looked up in the schemas
    /// directory.
    pub fn schema_path(&self, form: &str) -> PathBuf {
        let as_path = Path::new(form);
        let is_path = as_path.extension().is_some_and(|ext| ext == "toml")
            || as_path.components().count() > 1;

        if is_path {
            as_path.to_path_buf()
        } else {
            Path::new(&self.schemas.dir).join(format!("{}.toml", form))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.schemas.dir, "forms");
        assert_eq!(config.formatting.locale, "en-US");
        assert_eq!(config.formatting.currency, "USD");
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert_eq!(config.schemas.dir, "forms");
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [formatting]
            locale = "zh-CN"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.formatting.locale, "zh-CN");
        assert_eq!(config.formatting.currency, "USD");
        assert_eq!(config.schemas.dir, "forms");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("definitely-not-here/lumen.toml").unwrap();
        assert_eq!(config.schemas.dir, "forms");
    }

    #[test]
    fn test_schema_path() {
        let config = Config::default();
        assert_eq!(config.schema_path("quote"), Path::new("forms").join("quote.toml"));
        assert_eq!(config.schema_path("custom.toml"), PathBuf::from("custom.toml"));
        assert_eq!(
            config.schema_path("site/forms/contact"),
            PathBuf::from("site/forms/contact")
        );
    }
}
