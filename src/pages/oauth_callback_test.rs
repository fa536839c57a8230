use super::*;
use std::collections::HashMap;

fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn reads_token_and_user_id() {
    let q = query(&[("token", "abc"), ("userId", "42"), ("name", "Ada")]);
    let cb = callback_from_query(|name| q.get(name).cloned());
    assert_eq!(cb.token.as_deref(), Some("abc"));
    assert_eq!(cb.user_id.as_deref(), Some("42"));
    assert_eq!(cb.name.as_deref(), Some("Ada"));
    assert_eq!(cb.avatar, None);
}

#[test]
fn accepts_alternate_spellings_and_skips_blanks() {
    let q = query(&[("token", "t"), ("userId", " "), ("id", "7"), ("userAvatar", "https://cdn/a.png")]);
    let cb = callback_from_query(|name| q.get(name).cloned());
    assert_eq!(cb.user_id.as_deref(), Some("7"));
    assert_eq!(cb.avatar.as_deref(), Some("https://cdn/a.png"));
}

#[test]
fn missing_token_stays_none() {
    let cb = callback_from_query(|_| None);
    assert_eq!(cb, OAuthCallback::default());
}
