//! remote::http
//!
//! HTTP transport using the `reqwest` blocking client.
//!
//! # Design
//!
//! One `GET` per read. Non-2xx responses are reported as
//! [`TransportError::Status`]; the body of an error response is not read.
//! The timeout and user agent come from [`Config`]. Configured default
//! headers are merged under the per-call headers.
//!
//! The blocking client must not be built or used from inside an async
//! runtime; callers in async code move the read onto a blocking thread.
//!
//! # Example
//!
//! ```no_run
//! use stacgraph::core::config::Config;
//! use stacgraph::remote::{Headers, HttpTransport, Transport};
//! use reqwest::Url;
//!
//! let transport = HttpTransport::from_config(&Config::default()).unwrap();
//! let url = Url::parse("https://example.com/catalog.json").unwrap();
//! let body = transport.get(&url, &Headers::new()).unwrap();
//! ```

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;

use super::traits::{merge_headers, Headers, Transport, TransportError};
use crate::core::config::Config;

/// HTTP transport backed by `reqwest`.
pub struct HttpTransport {
    /// HTTP client with timeout and user agent applied
    client: Client,
    /// Headers sent with every request
    default_headers: Headers,
}

// Custom Debug to avoid exposing header values (tokens, API keys)
impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field(
                "default_headers",
                &self.default_headers.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl HttpTransport {
    /// Create a transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self {
            client,
            default_headers: config.default_headers(),
        })
    }

    /// Create a transport with default settings.
    pub fn new() -> Result<Self, TransportError> {
        Self::from_config(&Config::default())
    }
}

impl Transport for HttpTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    fn get(&self, url: &Url, headers: &Headers) -> Result<String, TransportError> {
        let merged = merge_headers(&self.default_headers, headers);
        let response = self
            .client
            .get(url.clone())
            .headers(to_header_map(&merged)?)
            .send()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        response
            .text()
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}

/// Convert headers to a `reqwest` header map.
fn to_header_map(headers: &Headers) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| TransportError::InvalidHeader(format!("bad name '{}'", name)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| TransportError::InvalidHeader(format!("bad value for '{}'", name)))?;
        map.insert(name, value);
    }
    Ok(map)
}
