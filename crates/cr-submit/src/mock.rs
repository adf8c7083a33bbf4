//! Recording transport for tests and dry runs
//!
//! `MockTransport` never touches the network. It records every request and
//! answers from a scripted queue; once the queue is empty it answers `200`
//! with an empty body. Opaque requests always get an opaque response, the
//! same as a real fire-and-forget post.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::transport::{OutboundRequest, RequestMode, Transport, TransportError, TransportResponse};

/// One scripted reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    Status(u16, String),
    NetworkError(String),
}

impl MockReply {
    pub fn ok(body: impl Into<String>) -> Self {
        MockReply::Status(200, body.into())
    }

    pub fn status(status: u16) -> Self {
        MockReply::Status(status, String::new())
    }
}

#[derive(Debug, Default)]
pub struct MockTransport {
    requests: Mutex<Vec<OutboundRequest>>,
    replies: Mutex<VecDeque<MockReply>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for the next unanswered request.
    pub fn with_reply(self, reply: MockReply) -> Self {
        self.push_reply(reply);
        self
    }

    pub fn push_reply(&self, reply: MockReply) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }

    /// Every request seen so far, in order.
    pub fn requests(&self) -> Vec<OutboundRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Number of requests sent to `url`.
    pub fn count_for(&self, url: &str) -> usize {
        self.requests
            .lock()
            .map(|r| r.iter().filter(|req| req.url == url).count())
            .unwrap_or(0)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(
        &self,
        request: OutboundRequest,
    ) -> std::result::Result<TransportResponse, TransportError> {
        let mode = request.mode;
        tracing::debug!(url = %request.url, "mock transport recorded request");
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        let reply = self
            .replies
            .lock()
            .ok()
            .and_then(|mut r| r.pop_front())
            .unwrap_or_else(|| MockReply::ok(""));

        match (reply, mode) {
            (MockReply::NetworkError(msg), _) => Err(TransportError::Network(msg)),
            (MockReply::Status(..), RequestMode::Opaque) => Ok(TransportResponse::opaque()),
            (MockReply::Status(status, body), RequestMode::Observed) => {
                Ok(TransportResponse::observed(status, body))
            }
        }
    }
}
