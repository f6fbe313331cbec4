//! Named custom validators
//!
//! Schemas written in TOML cannot carry closures, so fields refer to these
//! validators by name. A custom validator has the final say on a field, so
//! each one re-checks anything it depends on (e.g. `business_email` checks
//! the email format itself).

use std::sync::Arc;

use crate::patterns;
use crate::rule::CustomValidator;
use crate::value::FieldValue;

/// Free email providers rejected on B2B forms (quote requests, dealer sign-up)
pub static PUBLIC_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "aol.com",
    "icloud.com",
    "mail.com",
    "protonmail.com",
    "qq.com",
    "163.com",
    "126.com",
    "sina.com",
];

/// Names accepted by [`lookup`]
pub const VALIDATOR_NAMES: &[&str] = &[
    "no_public_email",
    "business_email",
    "password_medium",
    "password_strong",
    "cn_mobile",
    "accepted",
];

/// Resolve a named validator
pub fn lookup(name: &str) -> Option<CustomValidator> {
    let validator: CustomValidator = match name {
        "no_public_email" => Arc::new(no_public_email),
        "business_email" => Arc::new(business_email),
        "password_medium" => Arc::new(|v: &FieldValue| password_strength(v, Strength::Medium)),
        "password_strong" => Arc::new(|v: &FieldValue| password_strength(v, Strength::Strong)),
        "cn_mobile" => Arc::new(cn_mobile),
        "accepted" => Arc::new(accepted),
        _ => return None,
    };
    Some(validator)
}

/// Reject addresses at a public email provider. Non-strings pass.
pub fn no_public_email(value: &FieldValue) -> Option<String> {
    let email = value.as_str()?;
    let domain = extract_domain(email).to_lowercase();

    if PUBLIC_DOMAINS.iter().any(|&d| d == domain) {
        return Some("Please use your company email address".to_string());
    }

    None
}

/// Email format plus [`no_public_email`]
pub fn business_email(value: &FieldValue) -> Option<String> {
    match value.as_str() {
        Some(email) if patterns::is_valid_email(email) => no_public_email(value),
        _ => Some("Invalid format".to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    /// 8+ characters with uppercase, lowercase and digit
    Medium,
    /// Medium plus a special character
    Strong,
}

pub fn password_strength(value: &FieldValue, strength: Strength) -> Option<String> {
    let Some(password) = value.as_str() else {
        return Some("Password must be text".to_string());
    };

    if password.chars().count() < 8 {
        return Some("Password must be at least 8 characters".to_string());
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Some("Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Some("Password must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number".to_string());
    }
    if strength == Strength::Strong && !password.chars().any(|c| !c.is_alphanumeric()) {
        return Some("Password must contain at least one special character".to_string());
    }

    None
}

/// Mainland China mobile number, spaces and dashes ignored
pub fn cn_mobile(value: &FieldValue) -> Option<String> {
    let cleaned: String = value
        .as_str()
        .unwrap_or_default()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect();

    if patterns::CN_MOBILE.is_match(&cleaned) {
        None
    } else {
        Some("Invalid mobile number".to_string())
    }
}

/// Checkbox that must be ticked (privacy policy, terms)
pub fn accepted(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Bool(true) => None,
        FieldValue::String(s) if matches!(s.as_str(), "on" | "true" | "yes" | "1") => None,
        _ => Some("This must be accepted".to_string()),
    }
}

/// Domain portion of an email address, empty when there is no `@`
fn extract_domain(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or("")
}
