//! Field validation for the login, register, and profile forms.
//!
//! Pure functions returning the cleaned value or a display message, so
//! pages stay free of validation branching and the rules are testable
//! without a browser.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Minimum password length accepted by the forms.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Require a non-blank value, trimmed.
pub fn require(value: &str, field: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(format!("{field} is required."))
    } else {
        Ok(trimmed.to_owned())
    }
}

/// Require a plausible email address: non-blank, with a local part and a
/// domain around a single `@`. Full validation belongs to the backend.
pub fn validate_email(value: &str) -> Result<String, String> {
    let trimmed = require(value, "Email")?;
    let mut parts = trimmed.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        Err("Email is invalid.".to_owned())
    } else {
        Ok(trimmed)
    }
}

/// Require a password of at least [`MIN_PASSWORD_LEN`] characters.
pub fn validate_password(value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.len() < MIN_PASSWORD_LEN {
        Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters."
        ))
    } else {
        Ok(trimmed.to_owned())
    }
}

/// Optional password for profile edits: blank means "leave unchanged",
/// anything else must satisfy [`validate_password`].
pub fn validate_optional_password(value: &str) -> Result<Option<String>, String> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        validate_password(value).map(Some)
    }
}
