//! Creating, joining, and leaving communities.

#[cfg(test)]
#[path = "communities_test.rs"]
mod communities_test;

use serde::Serialize;

use super::{ActionOutcome, ActionResult, decode_entity, required};
use crate::net::api::ApiClient;
use crate::net::endpoints;
use crate::net::types::Community;
use crate::routes;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommunityDraft {
    pub name: String,
    pub description: String,
}

#[derive(Serialize)]
struct CommunityPayload<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'a str,
}

/// Create a community and open it.
///
/// # Errors
///
/// `Validation` for a blank name (no request is sent); `Api` otherwise.
pub async fn create_community(client: &ApiClient, draft: &CommunityDraft) -> ActionResult<Community> {
    let name = required(&draft.name, "Community name is required.")?;
    let payload = CommunityPayload { name: &name, description: draft.description.trim() };
    let body = client.post_json(endpoints::COMMUNITIES_CREATE, &payload).await?;
    let community: Community = decode_entity(body, "community")?;
    let route = routes::community(&community.id);
    Ok(ActionOutcome::new(community)
        .affecting([endpoints::communities()])
        .redirect_to(route))
}

/// # Errors
///
/// `Api` when the request fails.
pub async fn join_community(client: &ApiClient, community_id: &str) -> ActionResult<()> {
    client.post_empty(&endpoints::community_join(community_id)).await?;
    Ok(membership_changed(community_id))
}

/// # Errors
///
/// `Api` when the request fails.
pub async fn leave_community(client: &ApiClient, community_id: &str) -> ActionResult<()> {
    client.post_empty(&endpoints::community_leave(community_id)).await?;
    Ok(membership_changed(community_id))
}

fn membership_changed(community_id: &str) -> ActionOutcome<()> {
    ActionOutcome::new(()).affecting([endpoints::communities(), endpoints::community(community_id)])
}
