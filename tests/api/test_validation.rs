//! Requests that fail validation
//!
//! Every rejection is a 422 carrying `error`, `location` and `status`.

use axum::http::StatusCode;
use omikuji::Variant;
use serde_json::json;

use crate::common::{body_json, create_test_app, get, post_json, post_raw};

#[tokio::test]
async fn test_item_id_not_an_integer() {
    let app = create_test_app(Variant::Tutorial);

    let error = body_json(get(&app, "/items/abc").await, StatusCode::UNPROCESSABLE_ENTITY).await;

    assert_eq!(error["location"], "path");
    assert_eq!(error["status"], 422);
}

#[tokio::test]
async fn test_item_id_overflow() {
    let app = create_test_app(Variant::Tutorial);

    let response = get(&app, "/items/99999999999999999999").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_diagnose_missing_field() {
    let app = create_test_app(Variant::Assignment);

    let response = post_json(&app, "/diagnose", json!({"name": "太郎"})).await;
    let error = body_json(response, StatusCode::UNPROCESSABLE_ENTITY).await;

    assert_eq!(error["location"], "body");
    assert!(error["error"].as_str().unwrap().contains("thing"));
}

#[tokio::test]
async fn test_diagnose_wrong_type() {
    let app = create_test_app(Variant::Assignment);

    let response = post_json(&app, "/diagnose", json!({"name": 1, "thing": "猫"})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_present_missing_present() {
    let app = create_test_app(Variant::Tutorial);

    let response = post_json(&app, "/present", json!({"sender": "サンタ"})).await;
    let error = body_json(response, StatusCode::UNPROCESSABLE_ENTITY).await;

    assert!(error["error"].as_str().unwrap().contains("present"));
}

#[tokio::test]
async fn test_present_sender_wrong_type() {
    let app = create_test_app(Variant::Tutorial);

    let response = post_json(&app, "/present", json!({"present": "ケーキ", "sender": 5})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_json() {
    let app = create_test_app(Variant::Assignment);

    let response = post_raw(
        &app,
        "/diagnose",
        "application/json",
        "{\"name\": \"太郎\",".to_string(),
    )
    .await;
    let error = body_json(response, StatusCode::UNPROCESSABLE_ENTITY).await;

    assert_eq!(error["location"], "body");
}

#[tokio::test]
async fn test_missing_content_type() {
    let app = create_test_app(Variant::Assignment);

    let response = post_raw(
        &app,
        "/diagnose",
        "text/plain",
        json!({"name": "太郎", "thing": "ラーメン"}).to_string(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_wrong_method() {
    let app = create_test_app(Variant::Assignment);

    let response = get(&app, "/diagnose").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
