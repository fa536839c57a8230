use super::*;
use crate::net::endpoints::ResourceKey;
use crate::net::http::{Method, RequestBody};
use crate::test_support::{mock_client, signed_in_session};
use futures::executor::block_on;
use serde_json::json;

#[test]
fn blank_name_sends_no_request() {
    let session = signed_in_session();
    let (client, transport) = mock_client(&session);
    let draft = CommunityDraft { name: "   ".to_owned(), description: "Prayer".to_owned() };

    let err = block_on(create_community(&client, &draft)).unwrap_err();

    assert_eq!(err.notice("Failed to create community"), "Community name is required.");
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn create_posts_trimmed_fields_and_opens_community() {
    let session = signed_in_session();
    let (client, transport) = mock_client(&session);
    transport.respond(
        Method::Post,
        "/communities",
        201,
        json!({ "community": { "_id": "c1", "name": "Youth", "createdBy": { "_id": "u1" } } }),
    );
    let draft = CommunityDraft { name: " Youth ".to_owned(), description: String::new() };

    let outcome = block_on(create_community(&client, &draft)).unwrap();

    let req = transport.last_request().unwrap();
    assert_eq!(req.body, RequestBody::Json(json!({ "name": "Youth" })));
    assert_eq!(outcome.value.created_by.as_deref(), Some("u1"));
    assert_eq!(outcome.affected, vec![ResourceKey::new("/communities")]);
    assert_eq!(outcome.redirect.as_deref(), Some("/communities/c1"));
}

#[test]
fn join_and_leave_refresh_list_and_detail() {
    let session = signed_in_session();
    let (client, transport) = mock_client(&session);
    transport.respond(Method::Post, "/communities/c1/join", 200, json!({ "message": "Joined" }));
    transport.respond(Method::Post, "/communities/c1/leave", 200, json!({ "message": "Left" }));

    let joined = block_on(join_community(&client, "c1")).unwrap();
    let left = block_on(leave_community(&client, "c1")).unwrap();

    let expected = vec![ResourceKey::new("/communities"), ResourceKey::new("/communities/c1")];
    assert_eq!(joined.affected, expected);
    assert_eq!(left.affected, expected);
    assert_eq!(transport.request_count(), 2);
}

#[test]
fn join_failure_keeps_server_message() {
    let session = signed_in_session();
    let (client, transport) = mock_client(&session);
    transport.respond(Method::Post, "/communities/c1/join", 400, json!({ "message": "Already a member" }));

    let err = block_on(join_community(&client, "c1")).unwrap_err();
    assert_eq!(err.notice("Could not join"), "Already a member");
}
