//! Service variants
//!
//! The service ships in two flavours that share every endpoint but
//! differ in their greeting and in the `/present` contract.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::error::ServiceError;

/// Which flavour of the service is running
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// "Hello FastAPI!" greeting, `/present` needs a sender
    #[default]
    Assignment,
    /// "Hello World" greeting, sender is optional
    Tutorial,
}

impl Variant {
    /// Message returned by `GET /`
    pub fn greeting(&self) -> &'static str {
        match self {
            Variant::Assignment => "Hello FastAPI!",
            Variant::Tutorial => "Hello World",
        }
    }

    /// Whether `POST /present` rejects bodies without `sender`
    pub fn requires_sender(&self) -> bool {
        matches!(self, Variant::Assignment)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Assignment => "assignment",
            Variant::Tutorial => "tutorial",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "assignment" => Ok(Variant::Assignment),
            "tutorial" => Ok(Variant::Tutorial),
            other => Err(ServiceError::ConfigError(format!(
                "Unknown variant '{other}' (expected 'assignment' or 'tutorial')"
            ))),
        }
    }
}
