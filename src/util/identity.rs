//! "Is this mine?" checks made from the locally stored user id.
//!
//! The server does not say whether a profile belongs to the viewer or whether
//! the viewer liked a post; both are inferred by comparing ids. Anything
//! missing on either side counts as "not mine" / "not liked".

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use crate::net::types::Post;
use crate::state::session::Session;

pub fn is_own_profile(session: &Session, profile_id: &str) -> bool {
    !profile_id.is_empty() && session.user_id().as_deref() == Some(profile_id)
}

pub fn has_liked(session: &Session, post: &Post) -> bool {
    session
        .user_id()
        .is_some_and(|me| post.likes.iter().any(|id| *id == me))
}

/// Whether the viewer wrote `post`.
pub fn is_own_post(session: &Session, post: &Post) -> bool {
    post.author
        .as_ref()
        .is_some_and(|author| is_own_profile(session, &author.id))
}

/// Whether the viewer appears in a member id list.
pub fn is_member(session: &Session, members: &[String]) -> bool {
    session.user_id().is_some_and(|me| members.contains(&me))
}
