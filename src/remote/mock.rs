//! remote::mock
//!
//! Mock transport for deterministic testing.
//!
//! # Design
//!
//! Serves canned bodies keyed by URL, answers unknown URLs with a 404, and
//! records every request with its headers. A failure can be injected for
//! all reads.
//!
//! # Example
//!
//! ```
//! use stacgraph::remote::mock::MockTransport;
//! use stacgraph::remote::{Headers, Transport};
//! use reqwest::Url;
//!
//! let transport = MockTransport::new();
//! transport.serve("https://example.com/catalog.json", r#"{"id": "root"}"#);
//!
//! let url = Url::parse("https://example.com/catalog.json").unwrap();
//! let body = transport.get(&url, &Headers::new()).unwrap();
//! assert!(body.contains("root"));
//! assert_eq!(transport.requests().len(), 1);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use reqwest::Url;

use super::traits::{Headers, Transport, TransportError};

/// Mock transport for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<MockTransportInner>>,
}

#[derive(Debug, Default)]
struct MockTransportInner {
    /// Bodies by URL.
    bodies: HashMap<String, String>,
    /// Error returned by every read, when set.
    fail_with: Option<TransportError>,
    /// Recorded requests for verification.
    requests: Vec<RecordedRequest>,
}

/// One recorded read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
}

impl MockTransport {
    /// Create a mock with nothing to serve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    pub fn serve(&self, url: &str, body: impl Into<String>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.bodies.insert(url.to_string(), body.into());
        }
    }

    /// Make every subsequent read fail with `error`.
    pub fn fail_with(&self, error: TransportError) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.fail_with = Some(error);
        }
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner
            .lock()
            .map(|inner| inner.requests.clone())
            .unwrap_or_default()
    }
}

impl Transport for MockTransport {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn get(&self, url: &Url, headers: &Headers) -> Result<String, TransportError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| TransportError::Network("mock transport poisoned".into()))?;

        inner.requests.push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });

        if let Some(err) = &inner.fail_with {
            return Err(err.clone());
        }

        inner
            .bodies
            .get(url.as_str())
            .cloned()
            .ok_or(TransportError::Status { status: 404 })
    }
}
