use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use quote_backend::app::build_app;

// 这些用例只覆盖不触网的路径：健康检查与参数校验

#[tokio::test]
async fn health_returns_ok_json() {
    let app = build_app();
    let resp = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn blank_ticker_is_rejected() {
    let app = build_app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/price?ticker=%20%20")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "ticker required");
}

#[tokio::test]
async fn missing_ticker_is_rejected() {
    let app = build_app();
    let resp = app
        .oneshot(Request::builder().uri("/history").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_date_is_rejected() {
    let app = build_app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/price?ticker=AAPL&date_str=07-05-2024")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
