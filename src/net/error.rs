//! API error taxonomy shared by the request builder, cache, and actions.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses keep their status and best-effort parsed body so call
//! sites can branch on status (401 forces logout) and surface the server's
//! `message` field.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Notice shown when the request never reached the server.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// Notice shown after the server rejected the bearer credential.
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unauthorized")]
    Unauthorized { body: serde_json::Value },
    #[error("request failed: {status}")]
    Status { status: u16, body: serde_json::Value },
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status carried by this error, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Server-provided `message` field, if the body had one.
    pub fn server_message(&self) -> Option<&str> {
        let body = match self {
            Self::Unauthorized { body } | Self::Status { body, .. } => body,
            Self::Network(_) | Self::Decode(_) => return None,
        };
        body.get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }

    /// User-facing text: the server message when present, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Network(_) => NETWORK_ERROR_MESSAGE.to_owned(),
            Self::Unauthorized { .. } => SESSION_EXPIRED_MESSAGE.to_owned(),
            Self::Status { .. } | Self::Decode(_) => self.server_message().unwrap_or(fallback).to_owned(),
        }
    }
}

/// Parse a response body, yielding `{}` when it is not valid JSON.
pub(crate) fn parse_error_body(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).unwrap_or_else(|_| serde_json::json!({}))
}
