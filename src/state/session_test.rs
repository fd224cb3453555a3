use super::*;

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        status: None,
        created_at: None,
        updated_at: None,
    }
}

// =============================================================
// Defaults and restore
// =============================================================

#[test]
fn default_session_is_unauthenticated() {
    let state = SessionState::default();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn restore_with_both_halves_is_authenticated() {
    let state = SessionState::restore(Some("t1".to_owned()), Some(user("u1")));
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("t1"));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
}

#[test]
fn restore_with_token_only_is_empty() {
    let state = SessionState::restore(Some("t1".to_owned()), None);
    assert_eq!(state, SessionState::default());
}

#[test]
fn restore_with_user_only_is_empty() {
    let state = SessionState::restore(None, Some(user("u1")));
    assert_eq!(state, SessionState::default());
}

#[test]
fn restore_with_neither_is_empty() {
    let state = SessionState::restore(None, None);
    assert_eq!(state, SessionState::default());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn establish_sets_both_halves() {
    let mut state = SessionState::default();
    state.establish("t1".to_owned(), user("u1"));
    assert!(state.is_authenticated());
    assert_eq!(state.token.as_deref(), Some("t1"));
}

#[test]
fn clear_after_establish_drops_both_halves() {
    let mut state = SessionState::default();
    state.establish("t1".to_owned(), user("u1"));
    state.clear();
    assert!(state.token.is_none());
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn establish_replaces_a_previous_session() {
    let mut state = SessionState::default();
    state.establish("t1".to_owned(), user("u1"));
    state.establish("t2".to_owned(), user("u2"));
    assert_eq!(state.token.as_deref(), Some("t2"));
    assert_eq!(state.user.as_ref().map(|u| u.id.as_str()), Some("u2"));
}

// =============================================================
// is_authenticated is derived from either half
// =============================================================

#[test]
fn token_alone_counts_as_authenticated() {
    let state = SessionState {
        token: Some("t1".to_owned()),
        user: None,
        loading: false,
    };
    assert!(state.is_authenticated());
}

#[test]
fn user_alone_counts_as_authenticated() {
    let state = SessionState {
        token: None,
        user: Some(user("u1")),
        loading: false,
    };
    assert!(state.is_authenticated());
}
