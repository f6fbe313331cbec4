use colored::Colorize;

use lumen_forms::{format_currency, format_phone_number, parse_number};

use crate::config::Config;

pub fn phone(number: &str) -> bool {
    println!("{}", format_phone_number(number));
    true
}

pub fn currency(config: &Config, amount: f64, currency: Option<&str>, locale: Option<&str>) -> bool {
    let currency = currency.unwrap_or(&config.formatting.currency);
    let locale = locale.unwrap_or(&config.formatting.locale);
    println!("{}", format_currency(amount, currency, locale));
    true
}

/// Prints the parsed value; an unparseable input is reported and fails
pub fn number(input: &str) -> bool {
    match parse_number(input) {
        Some(n) => {
            println!("{}", n);
            true
        }
        None => {
            eprintln!("{} {:?} is not a number", "✗".red().bold(), input);
            false
        }
    }
}
