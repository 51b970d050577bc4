//! In-memory `Transport` for tests.
//!
//! Enabled with the `test-utils` feature so downstream crates can use it:
//!
//! ```toml
//! [dev-dependencies]
//! news-core = { path = "../core", features = ["test-utils"] }
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

type Reply = Result<HttpResponse, TransportError>;

/// Records every request it receives and replays queued replies in order.
///
/// Clones share the same recording and queue, so a test can keep one handle
/// while the client owns another. A request with nothing queued fails with
/// `TransportError::Request`.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    replies: Arc<Mutex<VecDeque<Reply>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, status: u16, body: impl Into<String>) {
        self.push(Ok(HttpResponse {
            status,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.into(),
        }));
    }

    pub fn push_json(&self, status: u16, body: &Value) {
        self.push_response(status, body.to_string());
    }

    pub fn push_failure(&self, err: TransportError) {
        self.push(Err(err));
    }

    fn push(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no mock reply queued".to_string())))
    }
}
