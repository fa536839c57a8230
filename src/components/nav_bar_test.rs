use super::*;

#[test]
fn badge_hidden_when_nothing_unread() {
    assert_eq!(badge_label(0), None);
}

#[test]
fn badge_caps_at_nine_plus() {
    assert_eq!(badge_label(3).as_deref(), Some("3"));
    assert_eq!(badge_label(9).as_deref(), Some("9"));
    assert_eq!(badge_label(42).as_deref(), Some("9+"));
}
