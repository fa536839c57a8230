//! Marking notifications as read.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use super::{ActionOutcome, ActionResult};
use crate::net::api::ApiClient;
use crate::net::endpoints;
use crate::net::http::{Method, RequestBody};

/// # Errors
///
/// `Api` when the request fails.
pub async fn mark_notification_read(client: &ApiClient, notification_id: &str) -> ActionResult<()> {
    client
        .send(Method::Patch, &endpoints::notification_read(notification_id), RequestBody::Empty)
        .await?;
    Ok(ActionOutcome::new(()).affecting([endpoints::notifications()]))
}

/// # Errors
///
/// `Api` when the request fails.
pub async fn mark_all_notifications_read(client: &ApiClient) -> ActionResult<()> {
    client
        .send(Method::Patch, endpoints::NOTIFICATIONS_READ_ALL, RequestBody::Empty)
        .await?;
    Ok(ActionOutcome::new(()).affecting([endpoints::notifications()]))
}
