use super::*;
use crate::net::endpoints::ResourceKey;
use crate::net::http::{Method, RequestBody};
use crate::test_support::{mock_client, signed_in_session};
use futures::executor::block_on;
use serde_json::json;

#[test]
fn blank_message_is_not_sent() {
    let session = signed_in_session();
    let (client, transport) = mock_client(&session);
    let err = block_on(send_message(&client, "ch1", "\n  ")).unwrap_err();
    assert_eq!(err.notice(""), "Message cannot be empty.");
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn message_posts_to_thread_and_refreshes_it() {
    let session = signed_in_session();
    let (client, transport) = mock_client(&session);
    transport.respond(
        Method::Post,
        "/chats/ch1/messages",
        201,
        json!({ "message": { "_id": "m1", "content": "Peace", "sender": "u1" } }),
    );

    let outcome = block_on(send_message(&client, "ch1", " Peace ")).unwrap();

    assert_eq!(transport.last_request().unwrap().body, RequestBody::Json(json!({ "content": "Peace" })));
    assert_eq!(outcome.value.content, "Peace");
    assert_eq!(outcome.value.sender.map(|s| s.id).as_deref(), Some("u1"));
    assert_eq!(outcome.affected, vec![ResourceKey::new("/chats/ch1/messages"), ResourceKey::new("/chats")]);
}

#[test]
fn expired_session_is_reported_as_unauthorized() {
    let session = signed_in_session();
    let (client, transport) = mock_client(&session);
    transport.respond(Method::Post, "/chats/ch1/messages", 401, json!({ "message": "jwt expired" }));

    let err = block_on(send_message(&client, "ch1", "hello")).unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!session.is_authenticated());
}
