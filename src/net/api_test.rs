use super::*;
use crate::test_support::{TEST_BASE_URL, mock_client, signed_in_session};
use futures::executor::block_on;
use serde_json::json;

#[test]
fn url_joins_base_and_path() {
    let (client, _) = mock_client(&Session::in_memory());
    assert_eq!(client.url("/posts"), format!("{TEST_BASE_URL}/posts"));
    assert_eq!(client.url("posts"), format!("{TEST_BASE_URL}/posts"));
    assert_eq!(client.url("https://cdn.test/x.png"), "https://cdn.test/x.png");
}

#[test]
fn trailing_slash_on_base_is_ignored() {
    let client = ApiClient::new("https://api.test/", crate::test_support::MockTransport::new(), Session::in_memory());
    assert_eq!(client.url("/groups"), "https://api.test/groups");
}

#[test]
fn build_attaches_bearer_when_signed_in() {
    let (client, _) = mock_client(&signed_in_session());
    let req = client.build(Method::Get, "/users/me", RequestBody::Empty);
    assert_eq!(req.authorization().as_deref(), Some("Bearer tok-1"));
}

#[test]
fn build_omits_bearer_for_anonymous_session() {
    let (client, _) = mock_client(&Session::in_memory());
    let req = client.build(Method::Get, "/communities", RequestBody::Empty);
    assert_eq!(req.bearer, None);
}

#[test]
fn token_is_read_fresh_for_each_request() {
    let session = signed_in_session();
    let (client, transport) = mock_client(&session);
    transport.respond(Method::Get, "/users/me", 200, json!({}));
    transport.respond(Method::Get, "/users/me", 200, json!({}));

    block_on(client.get("/users/me")).unwrap();
    session.set_session("tok-2", "u1");
    block_on(client.get("/users/me")).unwrap();

    let bearers: Vec<_> = transport.requests().into_iter().map(|r| r.bearer).collect();
    assert_eq!(bearers, vec![Some("tok-1".to_owned()), Some("tok-2".to_owned())]);
}

#[test]
fn success_body_is_parsed_as_json() {
    let (client, transport) = mock_client(&Session::in_memory());
    transport.respond(Method::Get, "/groups", 200, json!({ "groups": [] }));
    assert_eq!(block_on(client.get("/groups")), Ok(json!({ "groups": [] })));
}

#[test]
fn empty_success_body_is_null() {
    let (client, transport) = mock_client(&signed_in_session());
    transport.respond_raw(Method::Delete, "/posts/p1", 204, b"");
    assert_eq!(block_on(client.delete("/posts/p1")), Ok(serde_json::Value::Null));
}

#[test]
fn non_2xx_carries_status_and_parsed_body() {
    let (client, transport) = mock_client(&signed_in_session());
    transport.respond(Method::Post, "/communities", 422, json!({ "message": "Name required" }));
    let err = block_on(client.post_json("/communities", &json!({ "name": "" }))).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 422, body: json!({ "message": "Name required" }) });
}

#[test]
fn unparsable_error_body_becomes_empty_object() {
    let (client, transport) = mock_client(&signed_in_session());
    transport.respond_raw(Method::Get, "/reels", 502, b"Bad Gateway");
    let err = block_on(client.get("/reels")).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 502, body: json!({}) });
}

#[test]
fn unauthorized_clears_session() {
    let session = signed_in_session();
    let (client, transport) = mock_client(&session);
    transport.respond(Method::Get, "/notifications", 401, json!({ "message": "jwt expired" }));

    let err = block_on(client.get("/notifications")).unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(session.token(), None);
    assert_eq!(session.user_id(), None);
}

#[test]
fn forbidden_does_not_clear_session() {
    let session = signed_in_session();
    let (client, transport) = mock_client(&session);
    transport.respond(Method::Post, "/groups/g1/join", 403, json!({}));
    let _ = block_on(client.post_empty("/groups/g1/join"));
    assert!(session.is_authenticated());
}

#[test]
fn network_failure_is_reported_as_network_error() {
    let (client, transport) = mock_client(&signed_in_session());
    transport.fail(Method::Get, "/chats");
    assert!(matches!(block_on(client.get("/chats")), Err(ApiError::Network(_))));
}

#[test]
fn post_json_sends_serialized_body() {
    let (client, transport) = mock_client(&signed_in_session());
    transport.respond(Method::Post, "/posts/p1/comments", 201, json!({}));
    block_on(client.post_json("/posts/p1/comments", &json!({ "content": "Amen" }))).unwrap();
    let req = transport.last_request().unwrap();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.body, RequestBody::Json(json!({ "content": "Amen" })));
}

#[test]
fn get_as_reports_decode_errors() {
    #[derive(Debug, serde::Deserialize)]
    struct Needs {
        #[allow(dead_code)]
        id: String,
    }
    let (client, transport) = mock_client(&Session::in_memory());
    transport.respond(Method::Get, "/users/u1", 200, json!({ "name": "x" }));
    assert!(matches!(block_on(client.get_as::<Needs>("/users/u1")), Err(ApiError::Decode(_))));
}
