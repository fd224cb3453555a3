//! Durable session storage backed by `localStorage`.
//!
//! Two keys share the session's lifetime: the bearer token string and the
//! JSON-serialized current user. Both are written only by the session
//! container's login/logout paths (and cleared by the HTTP layer's forced
//! logout), and read once at startup to restore the session. Requires a
//! browser environment; without the `hydrate` feature every read returns
//! `None` and every write is a no-op.

#[cfg(feature = "hydrate")]
use crate::net::types::{User, UserRecord};
#[cfg(not(feature = "hydrate"))]
use crate::net::types::User;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "auth_user";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the stored bearer token. Absence is a valid state, not an error.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Write or remove the stored bearer token. `None` removes the key.
pub fn write_token(token: Option<&str>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            match token {
                Some(value) => {
                    let _ = storage.set_item(TOKEN_KEY, value);
                }
                None => {
                    let _ = storage.remove_item(TOKEN_KEY);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Read the stored user, normalizing its identifier field.
///
/// Corrupt or missing JSON reads as `None`; a stored record carrying a
/// legacy `_id` key still comes back with a populated `id`.
pub fn read_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(USER_KEY).ok().flatten()?;
        let record: UserRecord = serde_json::from_str(&raw).ok()?;
        Some(record.normalize())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Write or remove the stored user. `None` removes the key.
pub fn write_user(user: Option<&User>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            match user.and_then(|u| serde_json::to_string(u).ok()) {
                Some(json) => {
                    let _ = storage.set_item(USER_KEY, &json);
                }
                None => {
                    let _ = storage.remove_item(USER_KEY);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}
