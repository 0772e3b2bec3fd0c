//! In-memory transport for tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use super::{FetchError, Transport};

#[derive(Debug, Clone)]
enum Reply {
    Body(Vec<u8>),
    Status(u16),
    Timeout,
}

/// Serves canned replies keyed by full URL and records every request.
/// Unknown URLs answer 404.
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_body(mut self, url: &str, body: &str) -> Self {
        self.replies
            .insert(url.to_string(), Reply::Body(body.as_bytes().to_vec()));
        self
    }

    pub(crate) fn with_json(self, url: &str, value: serde_json::Value) -> Self {
        let body = value.to_string();
        self.with_body(url, &body)
    }

    pub(crate) fn with_status(mut self, url: &str, status: u16) -> Self {
        self.replies.insert(url.to_string(), Reply::Status(status));
        self
    }

    pub(crate) fn with_timeout(mut self, url: &str) -> Self {
        self.replies.insert(url.to_string(), Reply::Timeout);
        self
    }

    /// URLs requested so far, in order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self, needle: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.contains(needle))
            .count()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &Url, deadline: Duration) -> Result<Vec<u8>, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());

        match self.replies.get(url.as_str()) {
            Some(Reply::Body(body)) => Ok(body.clone()),
            Some(Reply::Status(status)) => Err(FetchError::HttpStatus { status: *status }),
            Some(Reply::Timeout) => Err(FetchError::Timeout(deadline)),
            None => Err(FetchError::HttpStatus { status: 404 }),
        }
    }
}
