//! HTTP status mapping for [`ServiceError`]
//!
//! Handlers only return `Validation`. Config and TOML errors happen at
//! startup, before the router exists; they map to 500 should one ever
//! reach a response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::ServiceError;

impl ServiceError {
    /// Convert error to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::ConfigError(_) | ServiceError::TomlError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            ServiceError::Validation { location, message } => json!({
                "error": message,
                "location": location.as_str(),
                "status": status.as_u16(),
            }),
            other => json!({
                "error": other.message(),
                "status": status.as_u16(),
            }),
        };

        (status, Json(body)).into_response()
    }
}
