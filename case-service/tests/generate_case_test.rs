//! Handler tests for case-service.
//!
//! These run the router directly with a mock provider; no network or API
//! key required.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use case_service::config::{CaseConfig, GoogleConfig, ModelConfig};
use case_service::startup::{build_router, AppState};
use service_core::config::Config;
use service_core::genai::mock::MockTextProvider;
use std::sync::Arc;
use tower::util::ServiceExt;

fn test_state(provider: MockTextProvider) -> AppState {
    AppState {
        config: CaseConfig {
            common: Config { port: 0 },
            models: ModelConfig {
                text_model: "gemini-1.5-pro-002".to_string(),
            },
            google: GoogleConfig {
                api_key: "test-api-key".to_string(),
            },
        },
        text_provider: Arc::new(provider),
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body was not valid JSON")
}

#[tokio::test]
async fn options_preflight_returns_204_with_cors_headers() {
    let app = build_router(test_state(MockTextProvider::with_response("unused")));

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET, POST, OPTIONS"
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "Content-Type"
    );
    assert_eq!(response.headers()[header::ACCESS_CONTROL_MAX_AGE], "3600");

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn post_returns_generated_case_verbatim() {
    // Leading/trailing whitespace and markdown must survive untouched.
    let narrative = "  Sarah has been working with the Jensen family for six months.\n\n**Summary**  ";
    let app = build_router(test_state(MockTextProvider::with_response(narrative)));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );

    let body = body_json(response).await;
    assert_eq!(body["case"], narrative);
}

#[tokio::test]
async fn get_returns_generated_case() {
    let app = build_router(test_state(MockTextProvider::with_response("a narrative")));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["case"], "a narrative");
}

#[tokio::test]
async fn provider_failure_returns_generic_500() {
    let app = build_router(test_state(MockTextProvider::disabled()));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );

    let body = body_json(response).await;
    assert_eq!(body["error"], "An unexpected error occurred");
}

#[tokio::test]
async fn health_check_works() {
    let app = build_router(test_state(MockTextProvider::with_response("unused")));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "case-service");
}
