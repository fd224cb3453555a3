//! Authenticated HTTP wrapper around `gloo-net`.
//!
//! Every data-access call goes through [`send`]: it resolves the base URL
//! once per process, re-reads the bearer token from durable storage on
//! every request (so a token change from another tab or a logout takes
//! effect on the next call), and classifies error responses. A 401 from
//! any endpoint clears the stored session and hard-redirects to the login
//! page before the error is propagated to the caller; this is the only
//! place unauthorized handling lives.
//!
//! Browser-only pieces are gated behind `hydrate`; the pure parts (base
//! URL resolution, status classification, the forced-logout once-guard)
//! compile and test natively.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::cell::Cell;
use std::sync::OnceLock;

#[cfg(feature = "hydrate")]
use serde::Serialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
use crate::util::storage;

/// Entry point users land on after session invalidation.
pub const LOGIN_PATH: &str = "/login";

/// Error surface for every backend call.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport failure: the request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// 401 from any endpoint. Session-fatal: the stored session has
    /// already been cleared and a redirect to login triggered by the time
    /// a caller sees this.
    #[error("session expired, please sign in again")]
    Unauthorized,
    /// Any other non-success HTTP status, message surfaced verbatim so the
    /// caller can render it (duplicate email and friends).
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status carried by this error, if it reached the server.
    /// Lets call sites with "absent" semantics convert a 404 into `None`.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

/// Map a non-success HTTP status to its error. Side effects (forced
/// logout) belong to the caller; this stays pure for testability.
fn error_for_status(status: u16, message: String) -> ApiError {
    if status == 401 {
        ApiError::Unauthorized
    } else {
        ApiError::Status { status, message }
    }
}

/// Resolve the API base URL from build-time configuration.
///
/// Priority: explicit full API URL, explicit base URL, empty base in
/// development builds (the dev server proxies `/authorizers` and `/users`),
/// then the fixed `/api` prefix. Empty values count as unset.
fn resolve_base_url(api_url: Option<&str>, base_url: Option<&str>, dev: bool) -> String {
    if let Some(url) = api_url.filter(|u| !u.is_empty()) {
        return url.to_owned();
    }
    if let Some(url) = base_url.filter(|u| !u.is_empty()) {
        return url.to_owned();
    }
    if dev {
        return String::new();
    }
    "/api".to_owned()
}

/// Base URL for all backend calls, resolved exactly once per process.
pub fn base_url() -> &'static str {
    static BASE_URL: OnceLock<String> = OnceLock::new();
    BASE_URL.get_or_init(|| {
        resolve_base_url(
            option_env!("API_URL"),
            option_env!("API_BASE_URL"),
            cfg!(debug_assertions),
        )
    })
}

thread_local! {
    static FORCED_LOGOUT: Cell<bool> = const { Cell::new(false) };
}

/// Claim the forced-logout guard. Returns `true` only for the first 401
/// of the page's lifetime, so concurrent requests that each come back 401
/// collapse into a single clear-and-redirect. The full page load after
/// the redirect resets it.
fn begin_forced_logout() -> bool {
    FORCED_LOGOUT.with(|flag| !flag.replace(true))
}

#[cfg(test)]
fn reset_forced_logout() {
    FORCED_LOGOUT.with(|flag| flag.set(false));
}

/// Clear the durable session and hard-navigate to the login page.
///
/// A full navigation (not a client-side route change) so every piece of
/// in-memory state is torn down with it.
#[cfg(feature = "hydrate")]
fn force_logout() {
    if !begin_forced_logout() {
        return;
    }
    log::warn!("unauthorized response: clearing session and redirecting to login");
    storage::write_token(None);
    storage::write_user(None);
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(LOGIN_PATH);
    }
}

/// HTTP methods used by the accounts API.
#[derive(Clone, Copy, Debug)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// Send `method path` with an optional JSON body and the stored bearer
/// token, returning the raw response after status handling.
///
/// # Errors
///
/// [`ApiError::Network`] on transport failure, [`ApiError::Unauthorized`]
/// on 401 (after the forced-logout side effect), [`ApiError::Status`] for
/// any other non-success status.
#[cfg(feature = "hydrate")]
pub async fn send<B: Serialize>(
    method: Method,
    path: &str,
    body: Option<&B>,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let url = format!("{}{path}", base_url());
    let mut builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
    };

    // Re-read on every request rather than caching in a closure; see the
    // module docs.
    if let Some(token) = storage::read_token() {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?,
    };

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    let err = error_for_status(status, message);
    if matches!(err, ApiError::Unauthorized) {
        force_logout();
    }
    Err(err)
}

/// [`send`] plus JSON-decoding of the response body.
///
/// # Errors
///
/// Everything [`send`] returns, plus [`ApiError::Decode`] when the body
/// does not match `T`.
#[cfg(feature = "hydrate")]
pub async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<&B>,
) -> Result<T, ApiError> {
    let response = send(method, path, body).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
