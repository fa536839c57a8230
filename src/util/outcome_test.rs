use super::*;
use crate::net::error::{ApiError, SESSION_EXPIRED_MESSAGE};
use crate::state::notices::NoticeLevel;
use serde_json::json;

#[test]
fn validation_failure_stays_on_page() {
    let (notice, redirect) = failure_notice(&ActionError::validation("Community name is required."), "fallback");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, "Community name is required.");
    assert_eq!(redirect, None);
}

#[test]
fn unauthorized_failure_goes_to_login() {
    let err = ActionError::from(ApiError::Unauthorized { body: json!({}) });
    let (notice, redirect) = failure_notice(&err, "Could not post");
    assert_eq!(notice.message, SESSION_EXPIRED_MESSAGE);
    assert_eq!(redirect, Some("/login"));
}

#[test]
fn server_failure_uses_fallback_without_message() {
    let err = ActionError::from(ApiError::Status { status: 500, body: json!({}) });
    let (notice, redirect) = failure_notice(&err, "Could not post");
    assert_eq!(notice.message, "Could not post");
    assert_eq!(redirect, None);
}

#[test]
fn action_messages_builder() {
    let messages = ActionMessages::failing_with("Failed to create group")
        .succeeding_with("Group created!")
        .redirect_after(Duration::from_secs(2));
    assert_eq!(messages.success, Some("Group created!"));
    assert_eq!(messages.failure, "Failed to create group");
    assert_eq!(messages.redirect_delay, Some(Duration::from_secs(2)));
}
