use super::*;

// =============================================================
// Base URL resolution priority
// =============================================================

#[test]
fn explicit_api_url_wins() {
    let url = resolve_base_url(Some("https://api.example.com"), Some("/other"), true);
    assert_eq!(url, "https://api.example.com");
}

#[test]
fn base_url_override_is_second() {
    let url = resolve_base_url(None, Some("https://example.com/api"), true);
    assert_eq!(url, "https://example.com/api");
}

#[test]
fn dev_builds_default_to_same_origin() {
    // Empty base: the dev server proxies /authorizers and /users.
    assert_eq!(resolve_base_url(None, None, true), "");
}

#[test]
fn release_builds_fall_back_to_api_prefix() {
    assert_eq!(resolve_base_url(None, None, false), "/api");
}

#[test]
fn empty_env_values_count_as_unset() {
    assert_eq!(resolve_base_url(Some(""), Some(""), false), "/api");
}

// =============================================================
// Status classification
// =============================================================

#[test]
fn status_401_is_unauthorized() {
    let err = error_for_status(401, "expired".to_owned());
    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(err.status(), Some(401));
}

#[test]
fn status_404_is_distinguishable_for_absent_semantics() {
    let err = error_for_status(404, "not found".to_owned());
    assert_eq!(err.status(), Some(404));
}

#[test]
fn other_statuses_keep_the_backend_message() {
    let err = error_for_status(409, "email already registered".to_owned());
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "email already registered");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[test]
fn transport_errors_carry_no_status() {
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
    assert_eq!(ApiError::Decode("bad json".to_owned()).status(), None);
}

#[test]
fn unauthorized_message_is_user_facing() {
    let rendered = ApiError::Unauthorized.to_string();
    assert!(rendered.contains("sign in"));
}

// =============================================================
// Forced-logout once-guard
// =============================================================

#[test]
fn forced_logout_guard_fires_exactly_once() {
    reset_forced_logout();
    // First 401 claims the guard; concurrent 401s resolving afterwards
    // must not re-trigger the clear-and-redirect.
    assert!(begin_forced_logout());
    assert!(!begin_forced_logout());
    assert!(!begin_forced_logout());
    reset_forced_logout();
    assert!(begin_forced_logout());
    reset_forced_logout();
}
