//! cli
//!
//! Command-line interface layer for stg.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and install the log subscriber
//! - Build the loader and delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Handlers open documents through the
//! [`Loader`], call the catalog model, and format results through
//! [`crate::ui::output`]. The library never sees `anyhow`.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::core::diag::TracingDiagnostics;
use crate::core::loader::Loader;
use crate::core::persist::SaveOptions;
use crate::remote::{parse_header_pairs, Headers, HttpTransport};
use crate::ui::output::Verbosity;

/// Execution context for commands.
///
/// Contains settings derived from CLI flags and configuration.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output verbosity.
    pub verbosity: Verbosity,
    /// Loaded configuration.
    pub config: Config,
    /// Headers from `--header`, sent with every remote read.
    pub headers: Headers,
}

impl Context {
    /// Build a loader over HTTP with this context's headers and tracing
    /// diagnostics.
    pub fn loader(&self) -> Result<Loader> {
        let transport =
            HttpTransport::from_config(&self.config).context("Failed to set up HTTP transport")?;
        Ok(Loader::new(transport)
            .with_diagnostics(TracingDiagnostics)
            .with_headers(self.headers.clone()))
    }

    /// Save options from configuration.
    pub fn save_options(&self) -> SaveOptions {
        SaveOptions {
            pretty: self.config.pretty(),
        }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    init_tracing(verbosity);

    let config = Config::load().context("Failed to load configuration")?;
    let headers = parse_header_pairs(&cli.headers).context("Invalid --header value")?;

    let ctx = Context {
        verbosity,
        config,
        headers,
    };

    commands::dispatch(cli.command, &ctx)
}

fn init_tracing(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
