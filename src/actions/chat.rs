//! Sending chat messages.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::Serialize;

use super::{ActionOutcome, ActionResult, decode_entity, required};
use crate::net::api::ApiClient;
use crate::net::endpoints;
use crate::net::types::ChatMessage;

#[derive(Serialize)]
struct MessagePayload<'a> {
    content: &'a str,
}

/// # Errors
///
/// `Validation` for a blank message; `Api` when sending fails.
pub async fn send_message(client: &ApiClient, chat_id: &str, content: &str) -> ActionResult<ChatMessage> {
    let content = required(content, "Message cannot be empty.")?;
    let key = endpoints::chat_messages(chat_id);
    let body = client.post_json(key.as_str(), &MessagePayload { content: &content }).await?;
    let message = decode_entity(body, "message")?;
    Ok(ActionOutcome::new(message).affecting([key, endpoints::chats()]))
}
