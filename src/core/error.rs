//! core::error
//!
//! The single error surface for catalog operations.
//!
//! # Design
//!
//! Every catalog operation returns [`CatalogError`]. Filesystem and transport
//! failures are caught at the boundary and re-signaled as a variant of this
//! type, so callers handle one error regardless of where a document came
//! from. There is no retry anywhere in the core.

use std::path::PathBuf;

use thiserror::Error;

use super::link::LinkError;
use crate::remote::TransportError;

/// Errors from catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A local document could not be read.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A document could not be written.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document body is not valid JSON.
    #[error("failed to parse document from {origin}: {message}")]
    Parse { origin: String, message: String },

    /// The document body parsed, but its top level is not an object.
    #[error("document from {0} is not a JSON object")]
    NotAnObject(String),

    /// The document has no string `id`.
    #[error("document has no 'id'")]
    MissingId,

    /// A link record is malformed.
    #[error("invalid link: {0}")]
    InvalidLink(#[from] LinkError),

    /// Nothing to save to: no filename given and the entity has no path.
    #[error("cannot save '{0}': no file path (pass an explicit filename)")]
    NoPath(String),

    /// A link target cannot be resolved to a location.
    #[error("cannot resolve link target '{href}': {reason}")]
    UnresolvedLink { href: String, reason: String },

    /// A remote read failed.
    #[error("failed to fetch '{url}': {source}")]
    Remote {
        url: String,
        source: TransportError,
    },

    /// A property lookup missed.
    #[error(transparent)]
    Key(#[from] KeyError),
}

/// A property lookup found the key neither in `properties` nor at the top level.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("key not found: '{0}'")]
pub struct KeyError(pub String);
