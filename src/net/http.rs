//! Transport-level request/response types and the HTTP seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` builds `HttpRequest` values and hands them to a `Transport`.
//! In the browser that is `BrowserTransport` (fetch via `gloo-net`); tests
//! inject a scripted transport so request shapes can be asserted without a
//! network.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use async_trait::async_trait;

use super::error::ApiError;

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// One field of a multipart form body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, file_name: String, content_type: String, bytes: Vec<u8> },
}

impl FormPart {
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        Self::Text { name: name.to_owned(), value: value.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// Request payload. Metadata-only mutations send JSON; uploads send multipart.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FormPart>),
}

/// A fully-built request ready for a transport.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Bearer token attached as `Authorization: Bearer <token>`, if any.
    pub bearer: Option<String>,
    pub body: RequestBody,
}

impl HttpRequest {
    /// Value of the `Authorization` header this request carries.
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }

    /// Look up a multipart field by name.
    pub fn form_part(&self, name: &str) -> Option<&FormPart> {
        match &self.body {
            RequestBody::Multipart(parts) => parts.iter().find(|p| p.name() == name),
            _ => None,
        }
    }
}

/// Raw response: status plus undecoded body bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Assemble a response from its status and the outcome of reading the
    /// body. A failed read on an error status leaves the body empty, since
    /// error bodies are best-effort.
    ///
    /// # Errors
    ///
    /// `ApiError::Network` when the body of a 2xx response could not be read.
    pub fn from_body_read(status: u16, read: Result<Vec<u8>, String>) -> Result<Self, ApiError> {
        let response = Self { status, body: Vec::new() };
        match read {
            Ok(body) => Ok(Self { body, ..response }),
            Err(e) if response.ok() => Err(ApiError::Network(format!("reading response body: {e}"))),
            Err(_) => Ok(response),
        }
    }
}

/// Sends requests. Implementations are single-threaded (`?Send`) because the
/// browser fetch futures are not `Send`.
#[async_trait(?Send)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns `ApiError::Network` when no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `fetch`-backed transport. Off the browser every request fails with a
/// network error, mirroring how server-side stubs behave.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            browser::send(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Network("not available outside the browser".to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
mod browser {
    use gloo_net::http::{Request, RequestBuilder};

    use super::{FormPart, HttpRequest, HttpResponse, Method, RequestBody};
    use crate::net::error::ApiError;

    pub(super) async fn send(request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        if let Some(auth) = request.authorization() {
            builder = builder.header("Authorization", &auth);
        }

        let prepared = match request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(parts) => form_data(&parts).and_then(|form| attach_form(builder, &form)),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        HttpResponse::from_body_read(status, resp.binary().await.map_err(|e| e.to_string()))
    }

    fn attach_form(builder: RequestBuilder, form: &web_sys::FormData) -> Result<Request, gloo_net::Error> {
        builder.body(form.clone())
    }

    fn form_data(parts: &[FormPart]) -> Result<web_sys::FormData, gloo_net::Error> {
        let js_err = |e: wasm_bindgen::JsValue| gloo_net::Error::GlooError(format!("{e:?}"));
        let form = web_sys::FormData::new().map_err(js_err)?;
        for part in parts {
            match part {
                FormPart::Text { name, value } => form.append_with_str(name, value).map_err(js_err)?,
                FormPart::File { name, file_name, content_type, bytes } => {
                    let array = js_sys::Uint8Array::from(bytes.as_slice());
                    let blob_parts = js_sys::Array::of1(&array);
                    let options = web_sys::BlobPropertyBag::new();
                    options.set_type(content_type);
                    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&blob_parts, &options)
                        .map_err(js_err)?;
                    form.append_with_blob_and_filename(name, &blob, file_name)
                        .map_err(js_err)?;
                }
            }
        }
        Ok(form)
    }
}
