//! Wire and domain types exchanged with the accounts backend.
//!
//! IDENTIFIER NORMALIZATION
//! ========================
//! The backend is inconsistent about the user identifier key: some
//! responses carry `id`, older ones carry `_id`. [`UserRecord::normalize`]
//! is the single place that collapses the two into the canonical `id`
//! field, and it is applied at every boundary where user data enters the
//! client (login response, fetch by id, fetch by email, list, create,
//! update, and the stored-user JSON read at startup). Render code never
//! sees a raw record.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Public user as the rest of the client sees it, identifier normalized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Raw user payload as received on the wire, before normalization.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "_id", default)]
    pub alt_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl UserRecord {
    /// Collapse `id`/`_id` into the canonical identifier. `id` wins when
    /// both are present; neither yields an empty string, never a panic.
    pub fn normalize(self) -> User {
        let id = self.id.or(self.alt_id).unwrap_or_default();
        User {
            id,
            name: self.name,
            email: self.email,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Login credentials. Transient: sent once, never persisted.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Raw login response: bearer token plus the raw user record.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserRecord,
}

/// Login result after normalization, ready to install as the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// Registration input collected from the signup form.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Wire body for user creation. The backend expects the plaintext password
/// under the `passwordHash` key and hashes it server-side; the key name is
/// a compatibility contract and must not change.
#[derive(Debug, Serialize)]
pub struct CreateUserBody<'a> {
    pub name: &'a str,
    pub email: &'a str,
    #[serde(rename = "passwordHash")]
    pub password_hash: &'a str,
}

impl<'a> From<&'a NewUser> for CreateUserBody<'a> {
    fn from(new_user: &'a NewUser) -> Self {
        Self {
            name: &new_user.name,
            email: &new_user.email,
            password_hash: &new_user.password,
        }
    }
}

/// Profile edit input; `None` fields are left unchanged server-side.
#[derive(Clone, Debug, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Wire body for profile updates. Absent fields are omitted entirely, and
/// the password travels under `passwordHash` as in [`CreateUserBody`].
#[derive(Debug, Serialize)]
pub struct ProfileUpdateBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    #[serde(rename = "passwordHash", skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<&'a str>,
}

impl<'a> From<&'a ProfileUpdate> for ProfileUpdateBody<'a> {
    fn from(update: &'a ProfileUpdate) -> Self {
        Self {
            name: update.name.as_deref(),
            email: update.email.as_deref(),
            password_hash: update.password.as_deref(),
        }
    }
}
