use super::*;

// =============================================================
// Required fields
// =============================================================

#[test]
fn require_trims_and_accepts() {
    assert_eq!(require("  Ada  ", "Name").unwrap(), "Ada");
}

#[test]
fn require_rejects_blank_with_field_name() {
    let err = require("   ", "Name").unwrap_err();
    assert_eq!(err, "Name is required.");
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_a_plain_address() {
    assert_eq!(validate_email(" a@b.com ").unwrap(), "a@b.com");
}

#[test]
fn email_rejects_missing_at_sign() {
    assert!(validate_email("nope").is_err());
}

#[test]
fn email_rejects_empty_local_or_domain() {
    assert!(validate_email("@b.com").is_err());
    assert!(validate_email("a@").is_err());
}

#[test]
fn email_rejects_double_at() {
    assert!(validate_email("a@b@c").is_err());
}

// =============================================================
// Passwords
// =============================================================

#[test]
fn password_enforces_minimum_length() {
    assert!(validate_password("12345").is_err());
    assert_eq!(validate_password("123456").unwrap(), "123456");
}

#[test]
fn optional_password_blank_means_unchanged() {
    assert_eq!(validate_optional_password("   ").unwrap(), None);
}

#[test]
fn optional_password_still_enforces_minimum() {
    assert!(validate_optional_password("123").is_err());
    assert_eq!(
        validate_optional_password("123456").unwrap(),
        Some("123456".to_owned())
    );
}
