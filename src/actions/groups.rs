//! Creating and joining groups inside a community.

#[cfg(test)]
#[path = "groups_test.rs"]
mod groups_test;

use std::time::Duration;

use serde::Serialize;

use super::{ActionError, ActionOutcome, ActionResult, decode_entity, required};
use crate::net::api::ApiClient;
use crate::net::endpoints;
use crate::net::types::Group;
use crate::routes;

/// How long the "group created" notice stays up before the page moves on.
pub const GROUP_REDIRECT_DELAY: Duration = Duration::from_secs(2);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupDraft {
    pub name: String,
    pub description: String,
    pub community_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupPayload<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'a str,
    community_id: &'a str,
}

/// Create a group. The outcome redirects to the new group; the page waits
/// [`GROUP_REDIRECT_DELAY`] before following it.
///
/// # Errors
///
/// `Validation` for a blank name or missing community; `Api` otherwise.
pub async fn create_group(client: &ApiClient, draft: &GroupDraft) -> ActionResult<Group> {
    let name = required(&draft.name, "Group name is required.")?;
    let community_id = draft.community_id.trim();
    if community_id.is_empty() {
        return Err(ActionError::validation("Please choose a community for this group."));
    }
    let payload = GroupPayload { name: &name, description: draft.description.trim(), community_id };
    let body = client.post_json(endpoints::GROUPS_CREATE, &payload).await?;
    let group: Group = decode_entity(body, "group")?;
    let route = routes::group(&group.id);
    Ok(ActionOutcome::new(group)
        .affecting([endpoints::groups(), endpoints::community(community_id)])
        .redirect_to(route))
}

/// # Errors
///
/// `Api` when the request fails.
pub async fn join_group(client: &ApiClient, group_id: &str) -> ActionResult<()> {
    client.post_empty(&endpoints::group_join(group_id)).await?;
    Ok(ActionOutcome::new(()).affecting([endpoints::groups(), endpoints::group(group_id)]))
}
