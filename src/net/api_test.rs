use super::*;

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn login_and_users_paths_match_the_backend() {
    assert_eq!(LOGIN_PATH, "/authorizers/auth/login");
    assert_eq!(USERS_PATH, "/users");
}

#[test]
fn user_paths_embed_the_id() {
    assert_eq!(user_path("u1"), "/users/u1");
    assert_eq!(user_inactive_path("u1"), "/users/inactive/u1");
}

#[test]
fn by_email_path_encodes_the_query() {
    assert_eq!(
        user_by_email_path("a@b.com"),
        "/users/by-email?email=a%40b.com"
    );
}

// =============================================================
// Query encoding
// =============================================================

#[test]
fn encode_query_passes_unreserved_characters() {
    assert_eq!(encode_query("abc-XYZ_0.9~"), "abc-XYZ_0.9~");
}

#[test]
fn encode_query_escapes_plus_and_space() {
    // `a+b@c.com` is a valid address and must survive the query string.
    assert_eq!(encode_query("a+b@c.com"), "a%2Bb%40c.com");
    assert_eq!(encode_query("a b"), "a%20b");
}

#[test]
fn encode_query_escapes_multibyte_utf8() {
    assert_eq!(encode_query("é"), "%C3%A9");
}
