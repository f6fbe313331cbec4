use anyhow::{Context, Result};
use colored::Colorize;

use lumen_forms::FormSchema;

use crate::config::Config;

pub fn execute(config: &Config, form: &str) -> Result<bool> {
    let path = config.schema_path(form);
    let schema = FormSchema::load(&path)
        .with_context(|| format!("Failed to load form schema: {:?}", path))?;

    println!("{}", schema.name.green().bold());
    if let Some(description) = &schema.description {
        println!("{}", description.dimmed());
    }
    println!();

    let width = schema.field_names().map(str::len).max().unwrap_or(0);
    for (field, rule) in &schema.rules {
        println!("  {:width$}  {}", field.cyan(), rule, width = width);
    }

    Ok(true)
}
