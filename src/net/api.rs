//! REST endpoint functions for the accounts backend.
//!
//! Client-side (hydrate): real HTTP calls via the authenticated wrapper in
//! [`crate::net::http`]. Server-side (SSR) and native test builds: stubs
//! returning a network error, since these endpoints are only meaningful in
//! the browser.
//!
//! Every function that yields user data runs the payload through
//! [`UserRecord::normalize`] before returning, so callers only ever see
//! the canonical `id` field.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::ApiError;
use super::types::{AuthSession, LoginRequest, NewUser, ProfileUpdate, User};

#[cfg(feature = "hydrate")]
use super::http::{Method, send, send_json};
#[cfg(feature = "hydrate")]
use super::types::{CreateUserBody, LoginResponse, ProfileUpdateBody, UserRecord};

const LOGIN_PATH: &str = "/authorizers/auth/login";
const USERS_PATH: &str = "/users";

fn user_path(id: &str) -> String {
    format!("/users/{id}")
}

fn user_by_email_path(email: &str) -> String {
    format!("/users/by-email?email={}", encode_query(email))
}

fn user_inactive_path(id: &str) -> String {
    format!("/users/inactive/{id}")
}

/// Percent-encode a query-string component. Unreserved characters
/// (RFC 3986) pass through; everything else, including `+` and space, is
/// encoded so addresses like `a+b@c.com` survive the round trip.
fn encode_query(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push_str(&format!("%{byte:02X}"));
            }
        }
    }
    out
}

#[cfg(not(feature = "hydrate"))]
fn no_browser<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available outside the browser".to_owned()))
}

/// Authenticate with email and password.
///
/// # Errors
///
/// Propagates the backend's error unchanged; a 401 here surfaces as
/// [`ApiError::Unauthorized`] like anywhere else.
pub async fn login(credentials: &LoginRequest) -> Result<AuthSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response: LoginResponse =
            send_json(Method::Post, LOGIN_PATH, Some(credentials)).await?;
        Ok(AuthSession {
            token: response.token,
            user: response.user.normalize(),
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        no_browser()
    }
}

/// Register a new account.
///
/// # Errors
///
/// A duplicate email comes back as [`ApiError::Status`] with the backend's
/// message intact for display.
pub async fn create_user(new_user: &NewUser) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = CreateUserBody::from(new_user);
        let record: UserRecord = send_json(Method::Post, USERS_PATH, Some(&body)).await?;
        Ok(record.normalize())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = new_user;
        no_browser()
    }
}

/// Fetch all users.
///
/// # Errors
///
/// Propagates transport and HTTP errors from the wrapper.
pub async fn list_users() -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let records: Vec<UserRecord> =
            send_json::<(), _>(Method::Get, USERS_PATH, None).await?;
        Ok(records.into_iter().map(UserRecord::normalize).collect())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        no_browser()
    }
}

/// Fetch a single user by id.
///
/// # Errors
///
/// Propagates transport and HTTP errors from the wrapper.
pub async fn fetch_user(id: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let record: UserRecord = send_json::<(), _>(Method::Get, &user_path(id), None).await?;
        Ok(record.normalize())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        no_browser()
    }
}

/// Look a user up by email. A 404 means "no such user" and yields
/// `Ok(None)`; a blank email short-circuits without a request.
///
/// # Errors
///
/// Any error status other than 404 propagates (a 500 is still a failure).
pub async fn fetch_user_by_email(email: &str) -> Result<Option<User>, ApiError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    #[cfg(feature = "hydrate")]
    {
        match send_json::<(), UserRecord>(Method::Get, &user_by_email_path(trimmed), None).await {
            Ok(record) => Ok(Some(record.normalize())),
            Err(err) if err.status() == Some(404) => Ok(None),
            Err(err) => Err(err),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        no_browser()
    }
}

/// Update a user's profile. `None` fields are omitted from the request.
///
/// # Errors
///
/// Propagates transport and HTTP errors from the wrapper.
pub async fn update_profile(id: &str, update: &ProfileUpdate) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = ProfileUpdateBody::from(update);
        let record: UserRecord = send_json(Method::Put, &user_path(id), Some(&body)).await?;
        Ok(record.normalize())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, update);
        no_browser()
    }
}

/// Deactivate an account. The backend models deletion as a status flip,
/// hence PUT rather than DELETE.
///
/// # Errors
///
/// Propagates transport and HTTP errors from the wrapper.
pub async fn deactivate_account(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send::<()>(Method::Put, &user_inactive_path(id), None).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        no_browser()
    }
}
