//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Values are validated after parsing: the timeout must be positive, the
//! user agent non-empty, and default header names valid HTTP header names.

use std::collections::BTreeMap;

use reqwest::header::{HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Contents of a config file.
///
/// # Example
///
/// ```toml
/// [remote]
/// timeout_secs = 30
/// user_agent = "stacgraph"
///
/// [remote.headers]
/// "X-Api-Key" = "secret"
///
/// [save]
/// pretty = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Remote transport settings
    pub remote: Option<RemoteConfig>,

    /// Save defaults
    pub save: Option<SaveConfig>,
}

impl ConfigFile {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(remote) = &self.remote {
            remote.validate()?;
        }
        Ok(())
    }
}

/// Remote transport settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteConfig {
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,

    /// User-Agent header value
    pub user_agent: Option<String>,

    /// Headers sent with every remote read
    pub headers: Option<BTreeMap<String, String>>,
}

impl RemoteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue(
                "remote.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if let Some(ua) = &self.user_agent {
            if ua.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "remote.user_agent cannot be empty".to_string(),
                ));
            }
        }

        if let Some(headers) = &self.headers {
            for (name, value) in headers {
                HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                    ConfigError::InvalidValue(format!("invalid header name '{}'", name))
                })?;
                HeaderValue::from_str(value).map_err(|_| {
                    ConfigError::InvalidValue(format!("invalid value for header '{}'", name))
                })?;
            }
        }

        Ok(())
    }
}

/// Save defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SaveConfig {
    /// Pretty-print JSON
    pub pretty: Option<bool>,
}
