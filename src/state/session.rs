//! Session state container: the current token and user, their durable
//! copies, and the login/logout operations that are the only writers of
//! either.
//!
//! OWNERSHIP
//! =========
//! One `RwSignal<SessionState>` is created in `App` and provided via
//! context; it exclusively owns the in-memory session for the life of the
//! page. The localStorage copies are written only here (and by the HTTP
//! layer's forced logout) and read once, at startup, to compute the
//! initial state. Restoration is trusted without a network round-trip;
//! a stale token is discovered lazily by the first request that comes
//! back 401.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api;
use crate::net::http::ApiError;
use crate::net::types::{LoginRequest, User};
use crate::util::storage;

/// In-memory session: bearer token and current user, set and cleared
/// together, plus the route guard's initialization flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    /// True while the session is still being restored. Storage access is
    /// synchronous here, so this only ever shows as a transient placeholder.
    pub loading: bool,
}

impl SessionState {
    /// Build the startup session from the durable halves. Both must be
    /// present; a degraded state (one half missing, e.g. after storage
    /// corruption) restores as an empty, unauthenticated session.
    pub fn restore(token: Option<String>, user: Option<User>) -> Self {
        match (token, user) {
            (Some(token), Some(user)) => Self {
                token: Some(token),
                user: Some(user),
                loading: false,
            },
            _ => Self::default(),
        }
    }

    /// Install a fresh token and user after a successful login.
    pub fn establish(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Drop both halves of the session.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    /// Derived on every read, never cached: a token or a user counts as
    /// authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() || self.user.is_some()
    }
}

/// Restore the session from durable storage at startup. No network call;
/// returns an empty session when either half is missing.
pub fn initial_session() -> SessionState {
    SessionState::restore(storage::read_token(), storage::read_user())
}

/// Authenticate and install the resulting session.
///
/// On success the token and normalized user are written to durable
/// storage, then the in-memory state. On failure both are left untouched
/// and the error is handed back unchanged for the form to render.
///
/// Two overlapping calls resolve last-writer-wins; the login form
/// disables its submit button while a request is pending, so the UI does
/// not issue overlapping attempts.
///
/// # Errors
///
/// Whatever [`api::login`] returns.
pub async fn login(
    session: RwSignal<SessionState>,
    credentials: &LoginRequest,
) -> Result<(), ApiError> {
    let auth = api::login(credentials).await?;
    storage::write_token(Some(&auth.token));
    storage::write_user(Some(&auth.user));
    session.update(|state| state.establish(auth.token, auth.user));
    Ok(())
}

/// Clear durable storage and the in-memory session. Synchronous,
/// side-effect-only, cannot fail.
pub fn logout(session: RwSignal<SessionState>) {
    storage::write_token(None);
    storage::write_user(None);
    session.update(SessionState::clear);
}
