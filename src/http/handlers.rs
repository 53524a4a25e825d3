//! HTTP request handlers for the omikuji API
//!
//! Implements the greeting, static page, item echo, omikuji draw,
//! present acknowledgment and diagnosis endpoints, plus a health check.

use axum::{
    extract::State,
    response::{Html, IntoResponse},
    Json,
};

use crate::core::error::{Location, ServiceError};
use crate::core::fortune;
use crate::core::types::*;
use crate::http::extract::{ValidJson, ValidPath, ValidQuery};
use crate::http::page::INDEX_HTML;
use crate::http::state::AppState;

/// Health check handler
///
/// Returns server status, version and the active variant.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// JSON response with status "ok", version number and variant name
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        variant: state.variant(),
    })
}

/// Root handler
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// The greeting for the active variant
pub async fn root_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    Json(MessageResponse {
        message: state.variant().greeting().to_string(),
    })
}

/// Static test page with forms for the POST endpoints
pub async fn index_page_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Item echo handler
///
/// # Arguments
///
/// * `item_id` - Path segment, parsed as a signed integer
/// * `pairs` - Raw query pairs; only `q` is read, last occurrence wins
///
/// # Returns
///
/// The item id and `q` (null when absent)
///
/// # Errors
///
/// - `Validation`: `item_id` is not an integer
pub async fn item_handler(
    ValidPath(item_id): ValidPath<i64>,
    ValidQuery(pairs): ValidQuery<Vec<(String, String)>>,
) -> Json<ItemResponse> {
    let query = ItemQuery::from_pairs(pairs);

    Json(ItemResponse {
        item_id,
        q: query.q,
    })
}

/// Omikuji handler
///
/// Draws one of the ten fortune labels uniformly at random.
///
/// # Returns
///
/// The drawn label as `result`
pub async fn omikuji_handler() -> Json<FortuneResponse> {
    let result = fortune::draw_omikuji(&mut rand::thread_rng());
    tracing::debug!(result, "Omikuji drawn");

    Json(FortuneResponse {
        result: result.to_string(),
    })
}

/// Present handler
///
/// Acknowledges a present. Under the `assignment` variant the sender
/// is mandatory.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `req` - Present request with the gift and optional sender
///
/// # Returns
///
/// The acknowledgment sentence as `response`
///
/// # Errors
///
/// - `Validation`: body is not JSON, `present` is missing, or `sender`
///   is missing while the variant requires it
pub async fn present_handler(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<PresentRequest>,
) -> Result<Json<PresentResponse>, ServiceError> {
    if req.sender.is_none() && state.variant().requires_sender() {
        return Err(ServiceError::validation(
            Location::Body,
            "missing field `sender`",
        ));
    }

    Ok(Json(PresentResponse {
        response: fortune::present_message(&req.present, req.sender.as_deref()),
    }))
}

/// Diagnosis handler
///
/// Picks one of four personality sentences built from `name` and `thing`.
///
/// # Arguments
///
/// * `req` - Diagnose request with a name and a favourite thing
///
/// # Returns
///
/// The chosen sentence as `result`
///
/// # Errors
///
/// - `Validation`: body is not JSON or a field is missing
pub async fn diagnose_handler(
    ValidJson(req): ValidJson<DiagnoseRequest>,
) -> Json<DiagnoseResponse> {
    let result = fortune::diagnose(&mut rand::thread_rng(), &req.name, &req.thing);
    tracing::debug!(name = %req.name, thing = %req.thing, "Diagnosis drawn");

    Json(DiagnoseResponse { result })
}
