//! Typed request builder for the Christful REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every HTTP call in the client goes through `ApiClient`: it resolves the
//! path against the configured base URL, attaches the bearer token read from
//! the session at call time, picks the JSON or multipart body, and turns the
//! response into `Result<serde_json::Value, ApiError>`.
//!
//! ERROR HANDLING
//! ==============
//! A 401 clears the session before the error is returned, so every caller
//! (cache or action) observes the logout without repeating that logic.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{ApiError, parse_error_body};
use super::http::{FormPart, HttpRequest, HttpResponse, Method, RequestBody, Transport};
use crate::state::session::Session;

#[derive(Clone)]
pub struct ApiClient {
    base_url: Rc<str>,
    transport: Rc<dyn Transport>,
    session: Session,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(base_url: &str, transport: impl Transport + 'static, session: Session) -> Self {
        Self {
            base_url: Rc::from(base_url.trim_end_matches('/')),
            transport: Rc::new(transport),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`. Already-absolute URLs pass through.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Build a request, reading the token fresh from the session.
    pub fn build(&self, method: Method, path: &str, body: RequestBody) -> HttpRequest {
        HttpRequest {
            method,
            url: self.url(path),
            bearer: self.session.token(),
            body,
        }
    }

    /// Send a request and decode the JSON body.
    ///
    /// # Errors
    ///
    /// `Network` when no response arrived, `Unauthorized` on 401 (the session
    /// is cleared first), `Status` for any other non-2xx.
    pub async fn send(&self, method: Method, path: &str, body: RequestBody) -> Result<serde_json::Value, ApiError> {
        let request = self.build(method, path, body);
        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                leptos::logging::warn!("api {} {path} failed: {e}", method.as_str());
                return Err(e);
            }
        };
        self.interpret(method, path, response)
    }

    fn interpret(&self, method: Method, path: &str, response: HttpResponse) -> Result<serde_json::Value, ApiError> {
        if response.ok() {
            return decode_success_body(&response.body);
        }
        leptos::logging::warn!("api {} {path} -> {}", method.as_str(), response.status);
        let body = parse_error_body(&response.body);
        if response.status == 401 {
            self.session.clear();
            return Err(ApiError::Unauthorized { body });
        }
        Err(ApiError::Status { status: response.status, body })
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn get(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        self.send(Method::Get, path, RequestBody::Empty).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`]; `Decode` if `T` fails to deserialize.
    pub async fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode(self.get(path).await?)
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<serde_json::Value, ApiError> {
        self.send(Method::Post, path, json_body(body)?).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<serde_json::Value, ApiError> {
        self.send(Method::Put, path, json_body(body)?).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn patch_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<serde_json::Value, ApiError> {
        self.send(Method::Patch, path, json_body(body)?).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn post_empty(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        self.send(Method::Post, path, RequestBody::Empty).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        self.send(Method::Delete, path, RequestBody::Empty).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn post_multipart(&self, path: &str, parts: Vec<FormPart>) -> Result<serde_json::Value, ApiError> {
        self.send(Method::Post, path, RequestBody::Multipart(parts)).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn put_multipart(&self, path: &str, parts: Vec<FormPart>) -> Result<serde_json::Value, ApiError> {
        self.send(Method::Put, path, RequestBody::Multipart(parts)).await
    }
}

/// Deserialize a JSON value into a typed DTO.
///
/// # Errors
///
/// Returns `ApiError::Decode` when the shape does not match `T`.
pub fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<RequestBody, ApiError> {
    serde_json::to_value(body)
        .map(RequestBody::Json)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode_success_body(bytes: &[u8]) -> Result<serde_json::Value, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_slice(bytes).map_err(|e| ApiError::Decode(e.to_string()))
}
