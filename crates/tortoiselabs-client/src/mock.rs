//! Mock transport for unit testing
//!
//! Records every request it is given and replays queued responses in order,
//! so client and facade behavior can be tested without a live API.

use crate::common::{ApiRequest, RawResponse};
use crate::error::TortoiseLabsError;
use crate::transport_trait::Transport;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
enum Canned {
    Response(RawResponse),
    Failure(String),
}

/// Mock transport for testing
///
/// Clones share state, so a test can keep one handle for inspection while
/// the client owns another. When the queue is empty the mock answers
/// `200 {}`.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    queue: Arc<Mutex<VecDeque<Canned>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    /// Create a mock with an empty response queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response carrying `value` serialized as JSON
    pub fn push_json(&self, value: serde_json::Value) -> &Self {
        self.push_response(200, value.to_string())
    }

    /// Queue a response with an arbitrary status and body
    pub fn push_response(&self, status: u16, body: impl Into<String>) -> &Self {
        lock(&self.queue).push_back(Canned::Response(RawResponse {
            status,
            body: body.into(),
        }));
        self
    }

    /// Queue a connection-level failure
    pub fn push_failure(&self, message: impl Into<String>) -> &Self {
        lock(&self.queue).push_back(Canned::Failure(message.into()));
        self
    }

    /// All requests received so far, oldest first
    pub fn requests(&self) -> Vec<ApiRequest> {
        lock(&self.requests).clone()
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<ApiRequest> {
        lock(&self.requests).last().cloned()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TortoiseLabsError> {
        lock(&self.requests).push(request);
        match lock(&self.queue).pop_front() {
            Some(Canned::Response(response)) => Ok(response),
            Some(Canned::Failure(message)) => Err(TortoiseLabsError::Transport(message)),
            None => Ok(RawResponse::ok("{}")),
        }
    }
}
