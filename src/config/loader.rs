use std::collections::BTreeSet;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/tallyboard/config.toml` on Unix,
    /// or the platform equivalent via `dirs::config_dir()`.
    /// Falls back to the current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tallyboard").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file absent, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The bind address is a socket address
    /// - The client base URL is http(s) and timeouts are non-zero
    /// - Seed names are non-empty, group names are unique, and seeded counters
    ///   reference seeded groups
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(invalid(format!(
                "Invalid bind address '{}'",
                self.server.bind_addr
            )));
        }

        let base_url = &self.client.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(invalid(format!(
                "Client base_url '{}' must start with http:// or https://",
                base_url
            )));
        }
        if self.client.timeout_seconds == 0 || self.client.connect_timeout_seconds == 0 {
            return Err(invalid("Client timeouts must be greater than zero".to_string()));
        }

        let mut group_names = BTreeSet::new();
        for group in &self.seed.groups {
            if group.name.trim().is_empty() {
                return Err(invalid("Seed group names must not be empty".to_string()));
            }
            if !group_names.insert(group.name.as_str()) {
                return Err(invalid(format!("Duplicate seed group '{}'", group.name)));
            }
        }
        for counter in &self.seed.counters {
            if counter.name.trim().is_empty() {
                return Err(invalid("Seed counter names must not be empty".to_string()));
            }
            if let Some(group) = &counter.group {
                if !self.seed.groups.iter().any(|g| &g.name == group) {
                    return Err(invalid(format!(
                        "Seed counter '{}' references unknown group '{}'",
                        counter.name, group
                    )));
                }
            }
        }

        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::ValidationError { message }
}
