use super::*;
use serde_json::json;

fn feed(page: u32) -> ResourceKey {
    ResourceKey::new(format!("/posts?page={page}"))
}

// =============================================================
// Subscription swaps
// =============================================================

#[test]
fn first_run_subscribes_even_without_a_key() {
    assert!(needs_resubscribe(false, None, None));
    assert!(needs_resubscribe(false, None, Some(&feed(1))));
}

#[test]
fn unchanged_key_keeps_existing_subscription() {
    assert!(!needs_resubscribe(true, Some(&feed(1)), Some(&feed(1))));
    assert!(!needs_resubscribe(true, None, None));
}

#[test]
fn changed_key_swaps_subscription() {
    assert!(needs_resubscribe(true, Some(&feed(1)), Some(&feed(2))));
    assert!(needs_resubscribe(true, None, Some(&feed(1))));
    assert!(needs_resubscribe(true, Some(&feed(1)), None));
}

// =============================================================
// Auth redirect
// =============================================================

#[test]
fn unauthorized_read_redirects_to_login() {
    let state = ResourceState {
        error: Some(ApiError::Unauthorized { body: json!({ "message": "jwt expired" }) }),
        ..ResourceState::default()
    };
    assert_eq!(redirect_for(&state), Some(routes::LOGIN));
}

#[test]
fn unauthorized_read_redirects_even_with_stale_data() {
    let state = ResourceState {
        data: Some(json!({ "posts": [] })),
        error: Some(ApiError::Unauthorized { body: json!({}) }),
        ..ResourceState::default()
    };
    assert_eq!(redirect_for(&state), Some("/login"));
}

#[test]
fn other_failures_stay_on_page() {
    let forbidden = ResourceState {
        error: Some(ApiError::Status { status: 403, body: json!({}) }),
        ..ResourceState::default()
    };
    assert_eq!(redirect_for(&forbidden), None);

    let offline = ResourceState {
        error: Some(ApiError::Network("offline".to_owned())),
        ..ResourceState::default()
    };
    assert_eq!(redirect_for(&offline), None);
    assert_eq!(redirect_for(&ResourceState::default()), None);
}
