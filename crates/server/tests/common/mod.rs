use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use server::contact::{ContactService, Relay};
use server::rate_limit::RateLimitState;
use server::rest::AppState;
use shared_types::ContactSettings;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

#[allow(dead_code)]
/// Build a test router with default contact settings, log-only relay, and a
/// limiter private to this router.
pub fn test_app() -> Router {
    test_app_with(ContactSettings::default(), Relay::LogOnly, 100)
}

#[allow(dead_code)]
/// Build a test router with explicit settings and rate limit.
pub fn test_app_with(settings: ContactSettings, relay: Relay, max_requests: u32) -> Router {
    let state = AppState {
        contact: Arc::new(ContactService::new(settings, relay)),
        limiter: RateLimitState::new(max_requests, Duration::from_secs(600)),
    };
    server::openapi::api_router_with(state)
}

#[allow(dead_code)]
/// Helper to make a GET request and return (status, body).
pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[allow(dead_code)]
/// Helper to make a POST request with JSON body from a given client address.
pub async fn post_json_from(
    app: &Router,
    uri: &str,
    json: &str,
    client: &str,
) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .header("x-forwarded-for", client)
                .body(Body::from(json.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[allow(dead_code)]
/// Helper to make a POST request with JSON body.
pub async fn post_json(app: &Router, uri: &str, json: &str) -> (StatusCode, String) {
    post_json_from(app, uri, json, "198.51.100.1").await
}
