use super::*;
use serde_json::json;

#[test]
fn parse_error_body_reads_json() {
    assert_eq!(parse_error_body(br#"{"message":"nope"}"#), json!({ "message": "nope" }));
}

#[test]
fn parse_error_body_falls_back_to_empty_object() {
    assert_eq!(parse_error_body(b"<html>502</html>"), json!({}));
    assert_eq!(parse_error_body(b""), json!({}));
}

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::Status { status: 409, body: json!({ "message": "Community name taken" }) };
    assert_eq!(err.user_message("Failed to create community"), "Community name taken");
}

#[test]
fn user_message_falls_back_when_message_missing_or_blank() {
    let missing = ApiError::Status { status: 500, body: json!({}) };
    assert_eq!(missing.user_message("Failed to send message"), "Failed to send message");

    let blank = ApiError::Status { status: 400, body: json!({ "message": "   " }) };
    assert_eq!(blank.user_message("Failed"), "Failed");

    let not_string = ApiError::Status { status: 400, body: json!({ "message": 42 }) };
    assert_eq!(not_string.user_message("Failed"), "Failed");
}

#[test]
fn network_errors_use_connection_notice() {
    let err = ApiError::Network("TypeError: Failed to fetch".to_owned());
    assert_eq!(err.user_message("ignored"), NETWORK_ERROR_MESSAGE);
    assert_eq!(err.status(), None);
}

#[test]
fn unauthorized_is_distinct_from_generic_status() {
    let err = ApiError::Unauthorized { body: json!({ "message": "jwt expired" }) };
    assert!(err.is_unauthorized());
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message("ignored"), SESSION_EXPIRED_MESSAGE);

    let forbidden = ApiError::Status { status: 403, body: json!({}) };
    assert!(!forbidden.is_unauthorized());
    assert_eq!(forbidden.status(), Some(403));
}
