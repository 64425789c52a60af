//! core::loader
//!
//! Resolves documents from local storage or remote endpoints into
//! [`Thing`]s.
//!
//! # Architecture
//!
//! The loader owns a [`Transport`] for remote reads and a [`Diagnostics`]
//! sink. It is read-only: it never writes files or mutates anything outside
//! the value it returns. Every failure, local or remote, comes back as a
//! [`CatalogError`].
//!
//! # Headers
//!
//! A loader may carry session headers sent with every remote read,
//! including reads made while following links. Headers passed to
//! [`Loader::open_remote`] are merged over them.
//!
//! # Example
//!
//! ```
//! use stacgraph::core::loader::Loader;
//! use stacgraph::remote::mock::MockTransport;
//! use stacgraph::remote::Headers;
//!
//! let transport = MockTransport::new();
//! transport.serve("https://example.com/cat/catalog.json", r#"{"id": "root"}"#);
//!
//! let loader = Loader::new(transport);
//! let thing = loader
//!     .open_remote("https://example.com/cat/catalog.json", &Headers::new())
//!     .unwrap();
//! assert_eq!(thing.id().unwrap(), "root");
//! assert!(thing.path().is_none());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use serde_json::Value;

use super::diag::{Diagnostics, Silent};
use super::error::CatalogError;
use super::target::Target;
use super::thing::Thing;
use crate::remote::{merge_headers, Headers, Transport, TransportError};

/// Opens catalog documents.
pub struct Loader {
    transport: Box<dyn Transport>,
    diagnostics: Box<dyn Diagnostics>,
    headers: Headers,
}

impl std::fmt::Debug for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader")
            .field("transport", &self.transport.name())
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Loader {
    /// Create a loader over the given transport, with no diagnostics.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
            diagnostics: Box::new(Silent),
            headers: Headers::new(),
        }
    }

    /// Route diagnostics to `sink`.
    pub fn with_diagnostics(mut self, sink: impl Diagnostics + 'static) -> Self {
        self.diagnostics = Box::new(sink);
        self
    }

    /// Send `headers` with every remote read.
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    pub fn diagnostics(&self) -> &dyn Diagnostics {
        self.diagnostics.as_ref()
    }

    /// Open a document from a path or URL.
    ///
    /// `http`/`https` URLs are fetched, `file://` URLs and everything else
    /// are read from the local filesystem.
    pub fn open(&self, source: &str) -> Result<Thing, CatalogError> {
        let target = Target::from_source(source)?;
        self.open_target(&target)
    }

    /// Open an already-resolved target.
    pub fn open_target(&self, target: &Target) -> Result<Thing, CatalogError> {
        match target {
            Target::Path(path) => self.open_path(path),
            Target::Url(url) => self.fetch(url, &Headers::new()),
        }
    }

    /// Read and parse a local document.
    ///
    /// The returned thing's path is `path`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Read`] if the file is missing or unreadable
    /// - [`CatalogError::Parse`] if it is not valid JSON
    /// - [`CatalogError::NotAnObject`] / [`CatalogError::InvalidLink`] for
    ///   structurally invalid documents
    pub fn open_path(&self, path: impl AsRef<Path>) -> Result<Thing, CatalogError> {
        let path = path.as_ref();
        self.diagnostics
            .debug(&format!("opening {}", path.display()));

        let text = fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        parse_document(&text, &path.display().to_string(), Some(path.to_path_buf()))
    }

    /// Fetch and parse a remote document.
    ///
    /// The returned thing has no path and records `url` as its origin.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Remote`] if `url` is invalid or the read fails
    /// - [`CatalogError::Parse`] if the body is not valid JSON
    pub fn open_remote(&self, url: &str, headers: &Headers) -> Result<Thing, CatalogError> {
        let parsed = Url::parse(url).map_err(|e| CatalogError::Remote {
            url: url.to_string(),
            source: TransportError::InvalidUrl(e.to_string()),
        })?;
        self.fetch(&parsed, headers)
    }

    fn fetch(&self, url: &Url, headers: &Headers) -> Result<Thing, CatalogError> {
        self.diagnostics
            .debug(&format!("fetching {} via {}", url, self.transport.name()));

        let headers = merge_headers(&self.headers, headers);
        let text = self
            .transport
            .get(url, &headers)
            .map_err(|e| CatalogError::Remote {
                url: url.to_string(),
                source: e,
            })?;

        Ok(parse_document(&text, url.as_str(), None)?.with_origin(url.clone()))
    }
}

/// Parse a document body into a thing.
fn parse_document(
    text: &str,
    origin: &str,
    path: Option<PathBuf>,
) -> Result<Thing, CatalogError> {
    let value: Value = serde_json::from_str(text).map_err(|e| CatalogError::Parse {
        origin: origin.to_string(),
        message: e.to_string(),
    })?;

    match value {
        Value::Object(map) => Thing::from_map(map, path),
        _ => Err(CatalogError::NotAnObject(origin.to_string())),
    }
}
