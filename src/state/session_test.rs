use super::*;

// =============================================================
// Session lifecycle
// =============================================================

#[test]
fn fresh_session_is_anonymous() {
    let session = Session::in_memory();
    assert_eq!(session.token(), None);
    assert_eq!(session.user_id(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn set_session_is_visible_through_every_clone() {
    let session = Session::in_memory();
    let other = session.clone();
    session.set_session("abc", "42");
    assert_eq!(other.token().as_deref(), Some("abc"));
    assert_eq!(other.user_id().as_deref(), Some("42"));
    assert!(other.is_authenticated());
}

#[test]
fn clear_removes_token_id_and_display_fields() {
    let storage = MemoryStorage::new();
    let session = Session::new(storage.clone());
    session.set_session("abc", "42");
    session.set_display(Some("Ada"), Some("https://cdn.test/a.png"));
    assert_eq!(storage.len(), 4);

    session.clear();
    assert!(storage.is_empty());
    assert_eq!(session.token(), None);
    assert_eq!(session.display_name(), None);
}

#[test]
fn storage_keys_match_persisted_names() {
    let storage = MemoryStorage::new();
    let session = Session::new(storage.clone());
    session.set_session("tok", "u1");
    session.set_display(Some("Ada"), None);
    assert_eq!(storage.get("auth_token").as_deref(), Some("tok"));
    assert_eq!(storage.get("userId").as_deref(), Some("u1"));
    assert_eq!(storage.get("userName").as_deref(), Some("Ada"));
    assert_eq!(storage.get("userAvatar"), None);
}

#[test]
fn empty_stored_token_counts_as_anonymous() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "");
    let session = Session::new(storage);
    assert!(!session.is_authenticated());
}

#[test]
fn set_display_none_removes_previous_value() {
    let session = Session::in_memory();
    session.set_display(Some("Ada"), Some("a.png"));
    session.set_display(Some("Ada L."), None);
    assert_eq!(session.display_name().as_deref(), Some("Ada L."));
    assert_eq!(session.avatar_url(), None);
}

#[test]
fn reads_observe_external_storage_writes() {
    let storage = MemoryStorage::new();
    let session = Session::new(storage.clone());
    session.set_session("abc", "42");
    storage.remove(TOKEN_KEY);
    assert_eq!(session.token(), None);
}

#[test]
fn storage_failures_are_reported() {
    assert!(storage_succeeded::<String>("write", TOKEN_KEY, Ok(())));
    assert!(!storage_succeeded("write", TOKEN_KEY, Err("QuotaExceededError")));
    assert!(!storage_succeeded("removal", USER_ID_KEY, Err("SecurityError")));
}
