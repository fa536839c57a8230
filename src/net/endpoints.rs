//! Backend endpoint catalogue.
//!
//! Read endpoints return a `ResourceKey` (the cache is keyed by request path);
//! write-only endpoints return plain paths.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use std::fmt;

/// Cache key for a GET resource: the request path relative to the API base.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKey(String);

impl ResourceKey {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceKey {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";
pub const OAUTH_GOOGLE: &str = "/auth/google";
pub const PROFILE_UPDATE: &str = "/users/me";
pub const AVATAR_UPLOAD: &str = "/users/me/avatar";
pub const POSTS: &str = "/posts";
pub const COMMUNITIES_CREATE: &str = "/communities";
pub const GROUPS_CREATE: &str = "/groups";
pub const NOTIFICATIONS_READ_ALL: &str = "/notifications/read-all";

pub fn current_user() -> ResourceKey {
    ResourceKey::new("/users/me")
}

pub fn user(user_id: &str) -> ResourceKey {
    ResourceKey::new(format!("/users/{user_id}"))
}

pub fn user_posts(user_id: &str) -> ResourceKey {
    ResourceKey::new(format!("/users/{user_id}/posts"))
}

pub fn feed(page: u32) -> ResourceKey {
    ResourceKey::new(format!("/posts?page={}", page.max(1)))
}

pub fn reels() -> ResourceKey {
    ResourceKey::new("/reels")
}

pub fn post(post_id: &str) -> String {
    format!("/posts/{post_id}")
}

pub fn post_like(post_id: &str) -> String {
    format!("/posts/{post_id}/like")
}

pub fn post_comments(post_id: &str) -> ResourceKey {
    ResourceKey::new(format!("/posts/{post_id}/comments"))
}

pub fn communities() -> ResourceKey {
    ResourceKey::new("/communities")
}

pub fn community(community_id: &str) -> ResourceKey {
    ResourceKey::new(format!("/communities/{community_id}"))
}

pub fn community_join(community_id: &str) -> String {
    format!("/communities/{community_id}/join")
}

pub fn community_leave(community_id: &str) -> String {
    format!("/communities/{community_id}/leave")
}

pub fn groups() -> ResourceKey {
    ResourceKey::new("/groups")
}

pub fn group(group_id: &str) -> ResourceKey {
    ResourceKey::new(format!("/groups/{group_id}"))
}

pub fn group_join(group_id: &str) -> String {
    format!("/groups/{group_id}/join")
}

pub fn chats() -> ResourceKey {
    ResourceKey::new("/chats")
}

pub fn chat_messages(chat_id: &str) -> ResourceKey {
    ResourceKey::new(format!("/chats/{chat_id}/messages"))
}

pub fn notifications() -> ResourceKey {
    ResourceKey::new("/notifications")
}

pub fn notification_read(notification_id: &str) -> String {
    format!("/notifications/{notification_id}/read")
}
