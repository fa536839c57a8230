//! Create/update/delete actions against the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each action validates its input locally (nothing invalid reaches the
//! network), sends one request through `ApiClient`, and reports which cached
//! resources it made stale. Pages feed `ActionOutcome::affected` into
//! `ResourceCache::invalidate` and follow `ActionOutcome::redirect`.
//!
//! ERROR HANDLING
//! ==============
//! `ActionError::Validation` carries the exact notice text; `ActionError::Api`
//! is turned into a notice at the call site with a per-action fallback.

pub mod auth;
pub mod chat;
pub mod communities;
pub mod groups;
pub mod notifications;
pub mod posts;
pub mod profile;


use serde::de::DeserializeOwned;

use crate::net::api::decode;
use crate::net::endpoints::ResourceKey;
use crate::net::error::ApiError;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ActionError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ActionError {
    pub(crate) fn validation(message: &str) -> Self {
        Self::Validation(message.to_owned())
    }

    /// User-facing text for this failure.
    pub fn notice(&self, fallback: &str) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Api(e) => e.user_message(fallback),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api(e) if e.is_unauthorized())
    }
}

/// Result of a successful action.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionOutcome<T> {
    pub value: T,
    /// Cached resources made stale by this action.
    pub affected: Vec<ResourceKey>,
    /// Route to navigate to, if the action ends the current screen.
    pub redirect: Option<String>,
}

impl<T> ActionOutcome<T> {
    pub fn new(value: T) -> Self {
        Self { value, affected: Vec::new(), redirect: None }
    }

    #[must_use]
    pub fn affecting(mut self, keys: impl IntoIterator<Item = ResourceKey>) -> Self {
        for key in keys {
            if !self.affected.contains(&key) {
                self.affected.push(key);
            }
        }
        self
    }

    #[must_use]
    pub fn redirect_to(mut self, route: impl Into<String>) -> Self {
        self.redirect = Some(route.into());
        self
    }
}

pub type ActionResult<T> = Result<ActionOutcome<T>, ActionError>;

/// Trim `value`, rejecting it with `message` when blank.
pub(crate) fn required(value: &str, message: &str) -> Result<String, ActionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ActionError::validation(message));
    }
    Ok(trimmed.to_owned())
}

/// Decode an entity that the backend returns either bare or wrapped as
/// `{ "<wrapper>": { .. } }`.
pub(crate) fn decode_entity<T: DeserializeOwned>(value: serde_json::Value, wrapper: &str) -> Result<T, ActionError> {
    let inner = match value {
        serde_json::Value::Object(mut map) if map.get(wrapper).is_some_and(serde_json::Value::is_object) => {
            map.remove(wrapper).unwrap_or_default()
        }
        other => other,
    };
    decode(inner).map_err(ActionError::from)
}
