//! Scripted transport and fixtures shared by unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::http::{HttpRequest, HttpResponse, Method, Transport};
use crate::state::session::Session;

pub(crate) const TEST_BASE_URL: &str = "https://api.test";

enum Reply {
    Ready(Result<HttpResponse, ApiError>),
    Gated(oneshot::Receiver<HttpResponse>),
}

#[derive(Default)]
struct MockInner {
    replies: RefCell<HashMap<(Method, String), VecDeque<Reply>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

/// Transport that answers from per-route reply queues and records every
/// request it receives. Unscripted routes answer 404.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    inner: Rc<MockInner>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(&self, method: Method, path: &str, reply: Reply) {
        self.inner
            .replies
            .borrow_mut()
            .entry((method, path.to_owned()))
            .or_default()
            .push_back(reply);
    }

    pub(crate) fn respond(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
        self.push(method, path, Reply::Ready(Ok(json_response(status, &body))));
    }

    pub(crate) fn respond_raw(&self, method: Method, path: &str, status: u16, body: &[u8]) {
        self.push(method, path, Reply::Ready(Ok(HttpResponse { status, body: body.to_vec() })));
    }

    pub(crate) fn fail(&self, method: Method, path: &str) {
        self.push(method, path, Reply::Ready(Err(ApiError::Network("connection refused".to_owned()))));
    }

    /// Queue a reply that resolves only when the returned sender fires.
    pub(crate) fn gate(&self, method: Method, path: &str) -> oneshot::Sender<HttpResponse> {
        let (tx, rx) = oneshot::channel();
        self.push(method, path, Reply::Gated(rx));
        tx
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.inner.requests.borrow().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.inner.requests.borrow().len()
    }

    pub(crate) fn last_request(&self) -> Option<HttpRequest> {
        self.inner.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let path = request
            .url
            .strip_prefix(TEST_BASE_URL)
            .unwrap_or(&request.url)
            .to_owned();
        let method = request.method;
        self.inner.requests.borrow_mut().push(request);
        let reply = self
            .inner
            .replies
            .borrow_mut()
            .get_mut(&(method, path))
            .and_then(VecDeque::pop_front);
        match reply {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Gated(rx)) => rx
                .await
                .map_err(|_| ApiError::Network("gate dropped".to_owned())),
            None => Ok(json_response(404, &serde_json::json!({ "message": "not scripted" }))),
        }
    }
}

pub(crate) fn json_response(status: u16, body: &serde_json::Value) -> HttpResponse {
    HttpResponse { status, body: body.to_string().into_bytes() }
}

/// Client wired to a fresh mock transport and the given session.
pub(crate) fn mock_client(session: &Session) -> (ApiClient, MockTransport) {
    let transport = MockTransport::new();
    let client = ApiClient::new(TEST_BASE_URL, transport.clone(), session.clone());
    (client, transport)
}

/// Session already holding a token for user `u1`.
pub(crate) fn signed_in_session() -> Session {
    let session = Session::in_memory();
    session.set_session("tok-1", "u1");
    session
}
