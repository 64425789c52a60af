//! remote
//!
//! Transport for reading catalog documents from remote endpoints.
//!
//! # Architecture
//!
//! The [`Transport`] trait is the narrow interface the loader consumes: one
//! blocking read of a URL with pass-through headers, returning the body as
//! text. Timeouts and any retry policy belong to the implementation, never
//! to the core.
//!
//! # Modules
//!
//! - `traits`: `Transport` trait, header helpers and `TransportError`
//! - [`http`]: `reqwest` blocking implementation
//! - [`mock`]: In-memory implementation for deterministic testing

pub mod http;
pub mod mock;
mod traits;

pub use http::HttpTransport;
pub use traits::*;
