//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (params, subscriptions, submit
//! handlers) and delegates rendering details to `components`.

pub mod chat;
pub mod communities;
pub mod feed;
pub mod groups;
pub mod login;
pub mod notifications;
pub mod oauth_callback;
pub mod profile;
pub mod reels;
pub mod register;
