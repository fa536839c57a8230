//! Client-side route paths shared by the router, actions, and links.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const OAUTH_CALLBACK: &str = "/auth/callback";
pub const REELS: &str = "/reels";
pub const COMMUNITIES: &str = "/communities";
pub const GROUPS: &str = "/groups";
pub const CHATS: &str = "/chats";
pub const NOTIFICATIONS: &str = "/notifications";

pub fn community(community_id: &str) -> String {
    format!("/communities/{community_id}")
}

pub fn group(group_id: &str) -> String {
    format!("/groups/{group_id}")
}

pub fn chat(chat_id: &str) -> String {
    format!("/chats/{chat_id}")
}

pub fn profile(user_id: &str) -> String {
    format!("/profile/{user_id}")
}
