use std::fs;
use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use colored::Colorize;
use tracing::info;

use lumen_forms::{values_from_json, FieldValues, FormSchema};

use crate::config::Config;

/// Validate a submission; returns whether it passed
pub fn execute(config: &Config, form: &str, values: &str, json: bool) -> Result<bool> {
    let path = config.schema_path(form);
    let schema = FormSchema::load(&path)
        .with_context(|| format!("Failed to load form schema: {:?}", path))?;

    let submitted = read_values(values)?;
    info!(form = %schema.name, submitted = submitted.len(), "validating submission");

    let result = schema.validate(&submitted);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(result.is_valid);
    }

    if result.is_valid {
        println!("{} {}", "✓".green().bold(), format!("{} is valid", schema.name).green());
    } else {
        println!(
            "{} {}",
            "✗".red().bold(),
            format!("{} has {} invalid field(s)", schema.name, result.errors.len()).red()
        );
        println!();
        for (field, message) in &result.errors {
            println!("  {}: {}", field.cyan(), message);
        }
    }

    Ok(result.is_valid)
}

/// Read submitted values from a JSON file, or stdin for `-`
fn read_values(source: &str) -> Result<FieldValues> {
    let content = if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read values from stdin")?;
        buf
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("Failed to read values file: {}", source))?
    };

    parse_values(&content)
}

fn parse_values(content: &str) -> Result<FieldValues> {
    let json: serde_json::Value =
        serde_json::from_str(content).context("Submitted values are not valid JSON")?;

    if !json.is_object() {
        bail!("Submitted values must be a JSON object keyed by field name");
    }

    Ok(values_from_json(json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_forms::FieldValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_values() {
        let values = parse_values(r#"{"email": "a@b.com", "quantity": 3}"#).unwrap();
        assert_eq!(values["email"], FieldValue::from("a@b.com"));
        assert_eq!(values["quantity"], FieldValue::from(3));
    }

    #[test]
    fn test_parse_values_rejects_non_objects() {
        assert!(parse_values("[1, 2]").is_err());
        assert!(parse_values("not json").is_err());
    }
}
