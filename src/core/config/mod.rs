//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$STACGRAPH_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/stacgraph/config.toml`
//! 3. `~/.stacgraph/config.toml`
//!
//! No file means defaults. CLI flags override config values but are not
//! handled here.
//!
//! # Example
//!
//! ```no_run
//! use stacgraph::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Timeout: {:?}", config.timeout());
//! println!("Pretty: {}", config.pretty());
//! ```

pub mod schema;

pub use schema::{ConfigFile, RemoteConfig, SaveConfig};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Default transport timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration with defaults applied through accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents
    pub file: ConfigFile,
    /// Path the file was loaded from
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated. Missing files are not an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate() {
            Some(path) => Self::from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        Ok(Self {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    /// Find the first existing config file.
    fn locate() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("STACGRAPH_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("stacgraph/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        if let Some(home) = dirs::home_dir() {
            let path = home.join(".stacgraph/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Transport timeout. Defaults to 30 seconds.
    pub fn timeout(&self) -> Duration {
        let secs = self
            .file
            .remote
            .as_ref()
            .and_then(|r| r.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// User-Agent for remote reads. Defaults to `stacgraph/<version>`.
    pub fn user_agent(&self) -> String {
        self.file
            .remote
            .as_ref()
            .and_then(|r| r.user_agent.clone())
            .unwrap_or_else(|| concat!("stacgraph/", env!("CARGO_PKG_VERSION")).to_string())
    }

    /// Headers sent with every remote read. Empty if not configured.
    pub fn default_headers(&self) -> BTreeMap<String, String> {
        self.file
            .remote
            .as_ref()
            .and_then(|r| r.headers.clone())
            .unwrap_or_default()
    }

    /// Whether saved JSON is pretty-printed. Defaults to `true`.
    pub fn pretty(&self) -> bool {
        self.file
            .save
            .as_ref()
            .and_then(|s| s.pretty)
            .unwrap_or(true)
    }

    /// Path the configuration was loaded from, if any.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent().starts_with("stacgraph/"));
        assert!(config.default_headers().is_empty());
        assert!(config.pretty());
        assert!(config.loaded_from().is_none());
    }

    #[test]
    fn from_path_reads_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [remote]
            timeout_secs = 5
            user_agent = "catalog-bot"

            [remote.headers]
            "X-Api-Key" = "secret"

            [save]
            pretty = false
            "#,
        )
        .unwrap();

        let config = Config::from_path(&path).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.user_agent(), "catalog-bot");
        assert_eq!(
            config.default_headers().get("X-Api-Key").map(String::as_str),
            Some("secret")
        );
        assert!(!config.pretty());
        assert_eq!(config.loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn load_from_env() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[save]\npretty = false\n").unwrap();

        std::env::set_var("STACGRAPH_CONFIG", path.to_str().unwrap());
        let config = Config::load().unwrap();
        std::env::remove_var("STACGRAPH_CONFIG");

        assert!(!config.pretty());
    }

    #[test]
    fn parse_error_names_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[remote\n").unwrap();

        let err = Config::from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn invalid_value_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[remote]\ntimeout_secs = 0\n").unwrap();

        assert!(matches!(
            Config::from_path(&path),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let err = Config::from_path(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
