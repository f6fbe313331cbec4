// File: src/patterns.rs
// Purpose: Prebuilt regular expressions for common field formats

use once_cell::sync::Lazy;
use regex::Regex;

// Email: something@something.tld, no whitespace
pub static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

// Phone: optional leading +, digits with spaces, dashes or parentheses
pub static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9\s\-()]{7,20}$").unwrap()
});

pub static URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap()
});

pub static ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9]+$").unwrap()
});

pub static NUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+$").unwrap()
});

pub static DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap()
});

// Mainland China mobile numbers (11 digits, 13x-19x)
pub static CN_MOBILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^1[3-9][0-9]{9}$").unwrap()
});

/// Names accepted by [`named`]
pub const PATTERN_NAMES: &[&str] = &[
    "email",
    "phone",
    "url",
    "alphanumeric",
    "numeric",
    "decimal",
    "cn_mobile",
];

/// Look up a prebuilt pattern by name
pub fn named(name: &str) -> Option<&'static Regex> {
    let pattern = match name {
        "email" => &EMAIL,
        "phone" => &PHONE,
        "url" => &URL,
        "alphanumeric" => &ALPHANUMERIC,
        "numeric" => &NUMERIC,
        "decimal" => &DECIMAL,
        "cn_mobile" => &CN_MOBILE,
        _ => return None,
    };
    Some(Lazy::force(pattern))
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Validate URL format
pub fn is_valid_url(url: &str) -> bool {
    URL.is_match(url)
}
