//! Core data types for the omikuji service.
//!
//! Request bodies and response payloads. None of them outlive a
//! single request.

use serde::{Deserialize, Serialize};

use crate::core::variant::Variant;

/// Body of `POST /present`
///
/// `sender` is optional at the type level; whether its absence is an
/// error depends on the running [`Variant`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentRequest {
    pub present: String,

    #[serde(default)]
    pub sender: Option<String>,
}

/// Body of `POST /diagnose`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnoseRequest {
    pub name: String,
    pub thing: String,
}

/// Query string of `GET /items/{item_id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuery {
    #[serde(default)]
    pub q: Option<String>,
}

impl ItemQuery {
    /// Build from raw query pairs; a repeated `q` keeps its last value
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let q = pairs
            .into_iter()
            .filter(|(key, _)| key == "q")
            .map(|(_, value)| value)
            .last();
        Self { q }
    }
}

/// Greeting returned by `GET /`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Echo returned by `GET /items/{item_id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub item_id: i64,
    pub q: Option<String>,
}

/// Result of `GET /omikuji`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FortuneResponse {
    pub result: String,
}

/// Result of `POST /diagnose`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnoseResponse {
    pub result: String,
}

/// Acknowledgment returned by `POST /present`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentResponse {
    pub response: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub variant: Variant,
}
