//! Behaviour that differs between the two service flavours

use axum::http::StatusCode;
use omikuji::Variant;
use serde_json::json;

use crate::common::{body_json, create_test_app, get, post_json};

#[tokio::test]
async fn test_assignment_greeting() {
    let app = create_test_app(Variant::Assignment);

    let greeting = body_json(get(&app, "/").await, StatusCode::OK).await;

    assert_eq!(greeting, json!({"message": "Hello FastAPI!"}));
}

#[tokio::test]
async fn test_tutorial_greeting() {
    let app = create_test_app(Variant::Tutorial);

    let greeting = body_json(get(&app, "/").await, StatusCode::OK).await;

    assert_eq!(greeting, json!({"message": "Hello World"}));
}

#[tokio::test]
async fn test_tutorial_present_without_sender() {
    let app = create_test_app(Variant::Tutorial);

    let response = post_json(&app, "/present", json!({"present": "ケーキ"})).await;
    let ack = body_json(response, StatusCode::OK).await;

    let text = ack["response"].as_str().unwrap();
    assert!(text.contains("ケーキ"));
    assert!(!text.contains("さんから"));
}

#[tokio::test]
async fn test_tutorial_present_with_sender() {
    let app = create_test_app(Variant::Tutorial);

    let response = post_json(
        &app,
        "/present",
        json!({"present": "ケーキ", "sender": "花子"}),
    )
    .await;
    let ack = body_json(response, StatusCode::OK).await;

    assert!(ack["response"].as_str().unwrap().contains("花子さんから"));
}

#[tokio::test]
async fn test_assignment_present_requires_sender() {
    let app = create_test_app(Variant::Assignment);

    let response = post_json(&app, "/present", json!({"present": "ケーキ"})).await;
    let error = body_json(response, StatusCode::UNPROCESSABLE_ENTITY).await;

    assert_eq!(error["location"], "body");
    assert!(error["error"].as_str().unwrap().contains("sender"));
}

#[tokio::test]
async fn test_assignment_present_null_sender() {
    let app = create_test_app(Variant::Assignment);

    let response = post_json(
        &app,
        "/present",
        json!({"present": "ケーキ", "sender": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
