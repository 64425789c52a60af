//! core::diag
//!
//! Diagnostic sink injected into the loader.
//!
//! # Design
//!
//! The core reports what it is doing (opens, fetches, link dereferences,
//! ambiguous singular links) through a [`Diagnostics`] value owned by the
//! [`Loader`](crate::core::loader::Loader). Nothing in the core reaches for
//! a global logger, and correctness never depends on where messages go.
//!
//! - [`Silent`] drops everything (the default).
//! - [`TracingDiagnostics`] forwards to `tracing` events.
//! - [`Recorder`] keeps messages in memory for tests.

use std::sync::{Arc, Mutex};

/// Severity of a recorded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Warn,
}

/// Receiver for diagnostic messages from the core.
pub trait Diagnostics: Send + Sync {
    /// Routine progress: documents opened, links followed.
    fn debug(&self, message: &str);

    /// Something questionable that did not stop the operation.
    fn warn(&self, message: &str);
}

/// Discards all messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Diagnostics for Silent {
    fn debug(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}

/// Forwards messages to `tracing` under the `stacgraph` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "stacgraph", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "stacgraph", "{}", message);
    }
}

/// Collects messages in memory.
///
/// Clones share the same buffer, so a test can hand one clone to a loader
/// and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    messages: Arc<Mutex<Vec<(Level, String)>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in order.
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }

    /// Recorded messages at the given level.
    pub fn at(&self, level: Level) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        if let Ok(mut m) = self.messages.lock() {
            m.push((level, message.to_string()));
        }
    }
}

impl Diagnostics for Recorder {
    fn debug(&self, message: &str) {
        self.push(Level::Debug, message);
    }

    fn warn(&self, message: &str) {
        self.push(Level::Warn, message);
    }
}
