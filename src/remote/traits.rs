//! remote::traits
//!
//! Transport trait definition for remote document reads.
//!
//! # Design
//!
//! The trait is synchronous: every read blocks until the body arrives or
//! the transport gives up. Failures are reported as [`TransportError`] and
//! wrapped by the loader, so transport-specific errors never reach callers
//! of the catalog API.

use std::collections::BTreeMap;

use reqwest::Url;
use thiserror::Error;

/// Request headers, name to value, passed through verbatim.
pub type Headers = BTreeMap<String, String>;

/// Errors from transport operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The endpoint answered with a non-success status.
    #[error("HTTP status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// The location is not a usable URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Network or connection error (including timeouts).
    #[error("network error: {0}")]
    Network(String),

    /// A header name or value cannot be sent.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The response body could not be read as text.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// A blocking reader of remote documents.
pub trait Transport: Send + Sync {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Read `url` and return the response body.
    fn get(&self, url: &Url, headers: &Headers) -> Result<String, TransportError>;
}

/// Merge per-call headers over defaults.
///
/// Header names compare case-insensitively; on a clash the per-call entry
/// replaces the default one.
pub fn merge_headers(defaults: &Headers, overrides: &Headers) -> Headers {
    let mut merged: Headers = defaults
        .iter()
        .filter(|(name, _)| {
            !overrides
                .keys()
                .any(|o| o.eq_ignore_ascii_case(name.as_str()))
        })
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Parse `NAME=VALUE` pairs into headers.
///
/// # Errors
///
/// Returns [`TransportError::InvalidHeader`] for a pair without `=` or with
/// an empty name.
pub fn parse_header_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<Headers, TransportError> {
    let mut headers = Headers::new();
    for pair in pairs {
        let pair = pair.as_ref();
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| TransportError::InvalidHeader(format!("expected NAME=VALUE: {pair}")))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(TransportError::InvalidHeader(format!(
                "empty header name: {pair}"
            )));
        }
        headers.insert(name.to_string(), value.trim().to_string());
    }
    Ok(headers)
}
