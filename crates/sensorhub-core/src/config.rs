//! Configuration loading and typed config structures for `SensorHub`.
//!
//! The configuration lives in `sensorhub.yaml`. Every field has a default,
//! so an empty or missing file yields a server on `0.0.0.0:8080` with
//! `info` logging and lenient nearest-query parsing.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level `SensorHub` configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SensorHubConfig {
    /// Listen address.
    #[serde(default)]
    pub server: ServerSection,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Nearest-query behavior.
    #[serde(default)]
    pub nearest: NearestConfig,
}

impl SensorHubConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for the listen address:
    /// - `SENSORHUB_HOST` overrides `server.host`
    /// - `SENSORHUB_PORT` overrides `server.port` (ignored unless a valid port)
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply env overrides.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse_with_overrides(yaml, |key| std::env::var(key).ok())
    }

    /// Parse configuration from a YAML string, then apply overrides read
    /// through `lookup` (keyed by environment variable name).
    pub fn parse_with_overrides<F>(yaml: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::parse_yaml(yaml)?;
        config.server.apply_overrides(lookup);
        Ok(config)
    }

    /// Parse configuration from a YAML string without env overrides.
    pub fn parse_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Address the HTTP server binds to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Host address to bind (e.g. `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerSection {
    /// Apply `SENSORHUB_HOST` / `SENSORHUB_PORT` if set.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply `SENSORHUB_HOST` / `SENSORHUB_PORT` as returned by `lookup`.
    ///
    /// A port that is not a valid `u16` is ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("SENSORHUB_HOST") {
            self.host = val;
        }
        if let Some(port) = lookup("SENSORHUB_PORT").and_then(|v| v.parse::<u16>().ok()) {
            self.port = port;
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Nearest-query configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NearestConfig {
    /// Reject missing or unparseable `lat`/`lng` with 400.
    ///
    /// Off by default: such values silently become `0.0`.
    #[serde(default)]
    pub strict_query: bool,
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    String::from("info")
}
