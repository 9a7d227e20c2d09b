//! # Application configuration — `user-manager.toml`
//!
//! Defines the TOML file that tells the app where to load users from and how
//! verbose its logging should be (filename: [`UsersConfig::filename`] =
//! `"user-manager.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [source]
//! endpoint = "https://jsonplaceholder.typicode.com/users"
//!
//! [logging]
//! level = "info"          # trace | debug | info | warn | error
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`UsersConfig`] | Top-level config. Provides builder helpers (`with_endpoint`), TOML (de)serialisation, and the canonical filename. |
//! | [`SourceConfig`] | Where the initial user list is fetched from. |
//! | [`LoggingConfig`] | Log level passed to the logger at startup. |
//!
//! All structs implement `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// The public demo endpoint the app reads users from by default.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Top-level configuration stored in `user-manager.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UsersConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote source configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL answering `GET` with a JSON array of users.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl UsersConfig {
    /// Builder method to set the source endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.source.endpoint = endpoint.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "user-manager.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parsed log level, falling back to `INFO` for unrecognised values.
    pub fn log_level(&self) -> tracing::Level {
        self.logging
            .level
            .parse()
            .unwrap_or(tracing::Level::INFO)
    }
}
