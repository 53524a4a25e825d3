//! Configuration management for the omikuji service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, ServiceError};
use crate::core::variant::Variant;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Behaviour of the endpoints
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub variant: Variant,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

pub const ENV_HOST: &str = "OMIKUJI_HOST";
pub const ENV_PORT: &str = "OMIKUJI_PORT";
pub const ENV_VARIANT: &str = "OMIKUJI_VARIANT";
pub const ENV_LOG_FORMAT: &str = "OMIKUJI_LOG_FORMAT";

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ServiceError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Per-user config file location (`~/.config/omikuji/config.toml`)
    pub fn user_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("omikuji").join("config.toml"))
    }

    /// Locate and read the TOML config, falling back to defaults
    ///
    /// Lookup order:
    /// 1. `path`, when given
    /// 2. User config file
    /// 3. ./omikuji.toml
    ///
    /// Environment overrides and validation are left to the caller so
    /// that command-line flags can be layered in between.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::user_config_file().filter(|p| p.exists()) {
                Some(user_config) => Self::from_file(user_config),
                None if Path::new("omikuji.toml").exists() => Self::from_file("omikuji.toml"),
                None => Ok(Self::default()),
            },
        }
    }

    /// Merge configuration with environment variables
    ///
    /// Variables named in `skip` are never read, so a malformed value in
    /// one of them cannot fail the merge.
    pub fn merge_env(&mut self, skip: &[&str]) -> Result<()> {
        let read = |key: &str| {
            if skip.iter().any(|s| *s == key) {
                None
            } else {
                env::var(key).ok()
            }
        };

        if let Some(host) = read(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = read(ENV_PORT) {
            self.server.port = port.parse().map_err(|_| {
                ServiceError::ConfigError(format!("{ENV_PORT} is not a valid port: {port}"))
            })?;
        }
        if let Some(variant) = read(ENV_VARIANT) {
            self.service.variant = variant.parse()?;
        }
        if let Some(format) = read(ENV_LOG_FORMAT) {
            self.logging.format = match format.to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                other => {
                    return Err(ServiceError::ConfigError(format!(
                        "Unknown log format '{other}'"
                    )))
                }
            };
        }
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(ServiceError::ConfigError(
                "Host must not be empty".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ServiceError::ConfigError(
                "Port must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log the effective configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Bind address: {}", self.bind_addr());
        tracing::info!("  Variant: {}", self.service.variant);
        tracing::info!("  Log format: {:?}", self.logging.format);
    }
}
