//! Integration tests for TOML form schemas, using the site's own form files.

use lumen_forms::*;
use pretty_assertions::assert_eq;
use serde_json::json;

const CONTACT: &str = include_str!("../../../forms/contact.toml");
const QUOTE: &str = include_str!("../../../forms/quote.toml");
const DEALER_CN: &str = include_str!("../../../forms/dealer_cn.toml");

#[test]
fn test_site_schemas_compile() {
    for source in [CONTACT, QUOTE, DEALER_CN] {
        let schema = FormSchema::from_toml_str(source).unwrap();
        assert!(!schema.name.is_empty());
        assert!(!schema.rules.is_empty());
    }
}

#[test]
fn test_field_order_follows_document() {
    let schema = FormSchema::from_toml_str(CONTACT).unwrap();
    assert_eq!(
        schema.field_names().collect::<Vec<_>>(),
        vec!["name", "email", "phone", "subject", "message", "privacy"]
    );
}

#[test]
fn test_contact_submission() {
    let schema = FormSchema::from_toml_str(CONTACT).unwrap();

    let valid = values_from_json(json!({
        "name": "Maria Lopez",
        "email": "maria@arena.es",
        "phone": "",
        "subject": "Rental screens",
        "message": "Do you rent P3.9 cabinets for a weekend festival?",
        "privacy": true
    }));
    assert_eq!(schema.validate(&valid), ValidationResult::success());

    let invalid = values_from_json(json!({
        "name": "M",
        "email": "maria",
        "message": "Hi",
        "privacy": false
    }));
    let result = schema.validate(&invalid);
    assert!(!result.is_valid);
    assert_eq!(
        result.errors.into_iter().collect::<Vec<_>>(),
        vec![
            ("name".to_string(), "Must be at least 2 characters".to_string()),
            ("email".to_string(), "Invalid format".to_string()),
            ("subject".to_string(), "This field is required".to_string()),
            ("message".to_string(), "Must be at least 10 characters".to_string()),
            ("privacy".to_string(), "This must be accepted".to_string()),
        ]
    );
}

#[test]
fn test_quote_numeric_fields() {
    let schema = FormSchema::from_toml_str(QUOTE).unwrap();

    let submitted = values_from_json(json!({
        "company": "Stadium Group",
        "contact_name": "Sam Lee",
        "email": "sam@stadium-group.com",
        "website": "https://stadium-group.com",
        "pixel_pitch": "P3.91",
        "screen_width_m": 60,
        "screen_height_m": "4",
        "quantity": 0,
        "budget_usd": 250000
    }));

    let result = schema.validate(&submitted);
    assert_eq!(result.get_error("screen_width_m"), Some("Must be at most 40"));
    // string input is not range checked
    assert_eq!(result.get_error("screen_height_m"), None);
    assert_eq!(result.get_error("quantity"), Some("Must be at least 1"));
    assert_eq!(result.get_error("pixel_pitch"), None);
    assert_eq!(result.errors.len(), 2);
}

#[test]
fn test_quote_rejects_public_email() {
    let schema = FormSchema::from_toml_str(QUOTE).unwrap();

    let submitted = values_from_json(json!({ "email": "sam@gmail.com" }));
    assert_eq!(
        schema.validate(&submitted).get_error("email"),
        Some("Please use your company email address")
    );

    let submitted = values_from_json(json!({ "email": "sam" }));
    assert_eq!(schema.validate(&submitted).get_error("email"), Some("Invalid format"));
}

#[test]
fn test_dealer_cn_email_format() {
    let schema = FormSchema::from_toml_str(DEALER_CN).unwrap();

    for email in ["not-an-email", "a b c", "@@@"] {
        let submitted = values_from_json(json!({
            "company": "深圳光显",
            "mobile": "138 1234 5678",
            "email": email,
            "city": "深圳"
        }));
        let result = schema.validate(&submitted);
        assert!(!result.is_valid, "{} accepted", email);
        assert_eq!(result.get_error("email"), Some("Invalid format"));
        assert_eq!(result.errors.len(), 1);
    }

    let submitted = values_from_json(json!({
        "company": "深圳光显",
        "mobile": "138 1234 5678",
        "email": "zhang@szgx-led.cn",
        "city": "深圳"
    }));
    assert_eq!(schema.validate(&submitted), ValidationResult::success());

    let submitted = values_from_json(json!({ "email": "zhang@qq.com" }));
    assert_eq!(
        schema.validate(&submitted).get_error("email"),
        Some("Please use your company email address")
    );
}

#[test]
fn test_load_names_unnamed_schema_after_file() {
    let dir = std::env::temp_dir().join(format!("lumen-forms-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("newsletter.toml");
    std::fs::write(&path, "[fields.email]\npreset = \"email\"\n").unwrap();

    let schema = FormSchema::load(&path).unwrap();
    assert_eq!(schema.name, "newsletter");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_load_missing_file() {
    let err = FormSchema::load("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, SchemaError::Io { .. }));
}
