//! In-memory transport for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::Result;

use super::transport::Transport;

/// Transport that serves canned payloads and records every requested path.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    /// Create a transport with no payloads; every lookup is a miss.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `path`.
    pub fn with_response(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(path.into(), body.into());
        self
    }

    /// Paths requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Transport for MockTransport {
    fn get(&self, path: &str) -> Result<Option<String>> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(path.to_string());
        Ok(self.responses.get(path).cloned())
    }
}
