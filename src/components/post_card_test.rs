use super::*;

#[test]
fn like_label_shows_state_and_count() {
    assert_eq!(like_label(0, false), "♡ 0");
    assert_eq!(like_label(3, true), "♥ 3");
}

#[test]
fn comments_label_pluralizes() {
    assert_eq!(comments_label(0), "0 comments");
    assert_eq!(comments_label(1), "1 comment");
    assert_eq!(comments_label(12), "12 comments");
}
