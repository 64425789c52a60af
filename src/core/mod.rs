//! core
//!
//! The catalog object model.
//!
//! # Modules
//!
//! - [`error`] - `CatalogError`, the single error surface
//! - [`link`] - Link records, the ordered link store, hierarchy cleaning
//! - [`thing`] - `Thing`, one catalog document in memory
//! - [`target`] - Resolution of link targets to paths and URLs
//! - [`hierarchy`] - `root()` / `parent()` resolution
//! - [`persist`] - Saving a thing to a file
//! - [`loader`] - Opening documents locally or remotely
//! - [`diag`] - Injected diagnostic sink
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Data flows Loader → Thing → links → Persistence, synchronously
//! - Cross-document references are URLs resolved on demand, never owned
//! - One error type for every catalog failure

pub mod config;
pub mod diag;
pub mod error;
pub mod hierarchy;
pub mod link;
pub mod loader;
pub mod persist;
pub mod target;
pub mod thing;

pub use error::{CatalogError, KeyError};
pub use link::{rel, Link, LinkStore};
pub use loader::Loader;
pub use persist::SaveOptions;
pub use target::Target;
pub use thing::Thing;
