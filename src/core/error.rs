//! Error types and error handling for the omikuji service.
//!
//! This module defines the error type used throughout the
//! application. HTTP status mapping lives in the `http` adapter.

use thiserror::Error;

/// Result type alias for omikuji operations
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Where in the request a validation failure was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Body,
    Path,
    Query,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Location::Body => "body",
            Location::Path => "path",
            Location::Query => "query",
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for the omikuji service
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid request {location}: {message}")]
    Validation { location: Location, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ServiceError {
    /// Shorthand for a validation failure
    pub fn validation(location: Location, message: impl Into<String>) -> Self {
        ServiceError::Validation {
            location,
            message: message.into(),
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this error was caused by the caller's request
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation { .. })
    }
}
