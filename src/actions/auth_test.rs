use super::*;
use crate::net::error::ApiError;
use crate::net::http::{Method, RequestBody};
use crate::test_support::{mock_client, signed_in_session};
use futures::executor::block_on;
use serde_json::json;

fn login_form(email: &str, password: &str) -> LoginForm {
    LoginForm { email: email.to_owned(), password: password.to_owned() }
}

fn register_form(password: &str, confirm: &str) -> RegisterForm {
    RegisterForm {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_stores_session_and_redirects_home() {
    let session = Session::in_memory();
    let (client, transport) = mock_client(&session);
    transport.respond(
        Method::Post,
        "/auth/login",
        200,
        json!({ "token": "abc", "user": { "id": "42", "firstName": "Ada" } }),
    );

    let outcome = block_on(login(&client, &login_form("ada@example.com", "secret"))).unwrap();

    assert_eq!(session.token().as_deref(), Some("abc"));
    assert_eq!(session.user_id().as_deref(), Some("42"));
    assert_eq!(session.display_name().as_deref(), Some("Ada"));
    assert_eq!(outcome.redirect.as_deref(), Some("/"));
    assert_eq!(outcome.value.id, "42");
}

#[test]
fn login_sends_trimmed_email_without_bearer() {
    let session = Session::in_memory();
    let (client, transport) = mock_client(&session);
    transport.respond(Method::Post, "/auth/login", 200, json!({ "token": "t", "user": { "id": "1" } }));

    block_on(login(&client, &login_form("  ada@example.com ", "pw"))).unwrap();

    let req = transport.last_request().unwrap();
    assert_eq!(req.bearer, None);
    assert_eq!(req.body, RequestBody::Json(json!({ "email": "ada@example.com", "password": "pw" })));
}

#[test]
fn login_with_blank_fields_sends_nothing() {
    let session = Session::in_memory();
    let (client, transport) = mock_client(&session);
    let err = block_on(login(&client, &login_form("", "pw"))).unwrap_err();
    assert!(matches!(err, ActionError::Validation(_)));
    let err = block_on(login(&client, &login_form("a@b.c", ""))).unwrap_err();
    assert!(matches!(err, ActionError::Validation(_)));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn rejected_login_surfaces_server_message_and_keeps_session_empty() {
    let session = Session::in_memory();
    let (client, transport) = mock_client(&session);
    transport.respond(Method::Post, "/auth/login", 400, json!({ "message": "Invalid credentials" }));

    let err = block_on(login(&client, &login_form("a@b.c", "wrong"))).unwrap_err();
    assert_eq!(err.notice("Login failed"), "Invalid credentials");
    assert!(!session.is_authenticated());
}

#[test]
fn login_401_shows_server_message_not_session_expired() {
    let session = Session::in_memory();
    let (client, transport) = mock_client(&session);
    transport.respond(Method::Post, "/auth/login", 401, json!({ "message": "Wrong password" }));

    let err = block_on(login(&client, &login_form("a@b.c", "bad"))).unwrap_err();
    assert_eq!(err.notice("Login failed"), "Wrong password");
    assert!(!err.is_unauthorized());
}

#[test]
fn login_with_malformed_body_is_decode_error() {
    let session = Session::in_memory();
    let (client, transport) = mock_client(&session);
    transport.respond(Method::Post, "/auth/login", 200, json!({ "ok": true }));
    let err = block_on(login(&client, &login_form("a@b.c", "pw"))).unwrap_err();
    assert!(matches!(err, ActionError::Api(ApiError::Decode(_))));
    assert!(!session.is_authenticated());
}

// =============================================================
// Registration
// =============================================================

#[test]
fn register_validates_password_rules_locally() {
    let session = Session::in_memory();
    let (client, transport) = mock_client(&session);

    let short = block_on(register(&client, &register_form("abc", "abc"))).unwrap_err();
    assert_eq!(short.notice(""), "Password must be at least 6 characters.");

    let mismatch = block_on(register(&client, &register_form("secret1", "secret2"))).unwrap_err();
    assert_eq!(mismatch.notice(""), "Passwords do not match.");

    assert_eq!(transport.request_count(), 0);
}

#[test]
fn register_posts_camel_case_payload_and_signs_in() {
    let session = Session::in_memory();
    let (client, transport) = mock_client(&session);
    transport.respond(
        Method::Post,
        "/auth/register",
        201,
        json!({ "token": "new", "user": { "_id": "u5", "firstName": "Ada", "lastName": "Lovelace" } }),
    );

    let outcome = block_on(register(&client, &register_form("secret1", "secret1"))).unwrap();

    let req = transport.last_request().unwrap();
    assert_eq!(
        req.body,
        RequestBody::Json(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "secret1",
        }))
    );
    assert_eq!(session.token().as_deref(), Some("new"));
    assert_eq!(session.display_name().as_deref(), Some("Ada Lovelace"));
    assert_eq!(outcome.redirect.as_deref(), Some("/"));
}

// =============================================================
// OAuth + logout
// =============================================================

#[test]
fn complete_oauth_stores_credentials() {
    let session = Session::in_memory();
    let callback = OAuthCallback {
        token: Some("oauth-tok".to_owned()),
        user_id: Some("u7".to_owned()),
        name: Some("Ruth".to_owned()),
        avatar: None,
    };
    let outcome = complete_oauth(&session, &callback).unwrap();
    assert_eq!(session.token().as_deref(), Some("oauth-tok"));
    assert_eq!(session.user_id().as_deref(), Some("u7"));
    assert_eq!(session.display_name().as_deref(), Some("Ruth"));
    assert_eq!(outcome.redirect.as_deref(), Some("/"));
}

#[test]
fn complete_oauth_without_token_is_rejected() {
    let session = Session::in_memory();
    let callback = OAuthCallback { user_id: Some("u7".to_owned()), ..OAuthCallback::default() };
    assert!(complete_oauth(&session, &callback).is_err());
    assert!(!session.is_authenticated());
}

#[test]
fn logout_clears_session_and_redirects_to_login() {
    let session = signed_in_session();
    let outcome = logout(&session);
    assert!(!session.is_authenticated());
    assert_eq!(outcome.redirect.as_deref(), Some("/login"));
}

#[test]
fn oauth_start_url_uses_api_base() {
    let (client, _) = mock_client(&Session::in_memory());
    assert_eq!(oauth_start_url(&client), "https://api.test/auth/google");
}
