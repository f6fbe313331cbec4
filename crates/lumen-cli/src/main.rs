mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "lumen")]
#[command(version, about = "Lumen CLI - validate and format site form submissions", long_about = None)]
struct Cli {
    /// Path to the CLI configuration file
    #[arg(short, long, global = true, default_value = "lumen.toml")]
    config: PathBuf,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a JSON submission against a form schema
    Validate {
        /// Form name (looked up in the schemas dir) or path to a .toml schema
        #[arg(short, long)]
        form: String,

        /// JSON file holding the submitted values, `-` for stdin
        #[arg(long, default_value = "-")]
        values: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List a schema's fields and their constraints
    Schema {
        /// Form name or path to a .toml schema
        form: String,
    },

    /// Rewrite a 10-digit phone number as (XXX) XXX-XXXX
    #[command(name = "format-phone")]
    FormatPhone {
        number: String,
    },

    /// Format an amount of money for a locale
    #[command(name = "format-currency")]
    FormatCurrency {
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// ISO currency code (defaults to the configured currency)
        #[arg(long)]
        currency: Option<String>,

        /// Locale tag such as en-US or zh-CN (defaults to the configured locale)
        #[arg(long)]
        locale: Option<String>,
    },

    /// Parse a plain decimal number
    #[command(name = "parse-number")]
    ParseNumber {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(&cli.config)?;

    // Execute command
    let ok = match cli.command {
        Commands::Validate { form, values, json } => {
            commands::validate::execute(&config, &form, &values, json)?
        }
        Commands::Schema { form } => commands::schema::execute(&config, &form)?,
        Commands::FormatPhone { number } => commands::format::phone(&number),
        Commands::FormatCurrency {
            amount,
            currency,
            locale,
        } => commands::format::currency(&config, amount, currency.as_deref(), locale.as_deref()),
        Commands::ParseNumber { input } => commands::format::number(&input),
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
