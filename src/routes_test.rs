use super::*;

#[test]
fn detail_routes_embed_ids() {
    assert_eq!(community("c1"), "/communities/c1");
    assert_eq!(group("g1"), "/groups/g1");
    assert_eq!(chat("ch1"), "/chats/ch1");
    assert_eq!(profile("u1"), "/profile/u1");
}

#[test]
fn section_routes_are_absolute() {
    for route in [HOME, LOGIN, REGISTER, OAUTH_CALLBACK, REELS, COMMUNITIES, GROUPS, CHATS, NOTIFICATIONS] {
        assert!(route.starts_with('/'), "{route}");
    }
}
