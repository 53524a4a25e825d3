// Test helper functions

use axum::{
    body::Body,
    http::{Request, Response, StatusCode},
    Router,
};
use omikuji::{build_router, AppState, Variant};
use tower::ServiceExt as TowerServiceExt;

/// Build the full router for the given variant
#[allow(dead_code)]
pub fn create_test_app(variant: Variant) -> Router {
    build_router(AppState::with_variant(variant))
}

/// Send a GET request and return the response
#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a JSON POST request and return the response
#[allow(dead_code)]
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, "application/json", body.to_string()).await
}

/// Send a POST request with an arbitrary content type and body
#[allow(dead_code)]
pub async fn post_raw(
    app: &Router,
    uri: &str,
    content_type: &str,
    body: String,
) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Collect a response body as JSON, asserting the status first
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>, expected: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), expected);
    let body = axum::body::to_bytes(response.into_body(), 100_000)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
