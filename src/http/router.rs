//! Route table

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::http::handlers;
use crate::http::middleware as http_middleware;
use crate::http::state::AppState;

/// Build the full application router with logging and CORS layers
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/index", get(handlers::index_page_handler))
        .route("/items/:item_id", get(handlers::item_handler))
        .route("/omikuji", get(handlers::omikuji_handler))
        .route("/present", post(handlers::present_handler))
        .route("/diagnose", post(handlers::diagnose_handler))
        .route("/health", get(handlers::health_handler))
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
