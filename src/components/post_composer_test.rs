use super::*;

#[test]
fn reels_default_to_video_picker() {
    assert_eq!(default_media_kind(PostKind::Reel), MediaKind::Video);
    assert_eq!(accept_attr(default_media_kind(PostKind::Post)), "image/*");
}

#[test]
fn media_kind_select_values() {
    assert_eq!(parse_media_kind("audio"), MediaKind::Audio);
    assert_eq!(parse_media_kind("video"), MediaKind::Video);
    assert_eq!(parse_media_kind("anything"), MediaKind::Image);
}
