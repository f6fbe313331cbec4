//! Ready-made rules for the fields that recur across the site's forms
//! (contact, quote request, newsletter, account).

use crate::patterns;
use crate::rule::ValidationRule;

/// Names accepted by [`preset`]
pub const PRESET_NAMES: &[&str] = &[
    "required", "email", "phone", "url", "name", "password", "message",
];

pub fn required() -> ValidationRule {
    ValidationRule::new().required()
}

pub fn email() -> ValidationRule {
    ValidationRule::new()
        .required()
        .pattern(patterns::EMAIL.clone())
}

/// Phone numbers are optional on every form that asks for one
pub fn phone() -> ValidationRule {
    ValidationRule::new().pattern(patterns::PHONE.clone())
}

pub fn url() -> ValidationRule {
    ValidationRule::new().pattern(patterns::URL.clone())
}

pub fn name() -> ValidationRule {
    ValidationRule::new().required().min_length(2).max_length(50)
}

pub fn password() -> ValidationRule {
    ValidationRule::new().required().min_length(8)
}

pub fn message() -> ValidationRule {
    ValidationRule::new().required().min_length(10).max_length(1000)
}

/// Look up a preset by name
pub fn preset(name: &str) -> Option<ValidationRule> {
    match name {
        "required" => Some(required()),
        "email" => Some(email()),
        "phone" => Some(phone()),
        "url" => Some(url()),
        "name" => Some(self::name()),
        "password" => Some(password()),
        "message" => Some(message()),
        _ => None,
    }
}
