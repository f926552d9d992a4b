//! Integration tests for REST API endpoints.
//!
//! Run with: `cargo test -p server --features server --test api_tests`

#![cfg(feature = "server")]

mod common;

use axum::http::StatusCode;
use common::{get, post_json, post_json_from, test_app, test_app_with};
use pretty_assertions::assert_eq;
use server::contact::Relay;
use shared_types::{AppError, AppErrorKind, ContactResponse, ContactSettings, ResponseType};

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "firstName": "Jane",
        "email": "jane@example.com",
        "type": "hireMe",
        "comment": "A".repeat(30),
    })
}

#[tokio::test]
async fn health_check_returns_ok() {
    let app = test_app();
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["mail_relay"], "log_only");
}

#[tokio::test]
async fn health_reports_undeliverable_relay() {
    let app = test_app_with(ContactSettings::default(), Relay::Mailgun, 100);
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "degraded");
    assert_eq!(health["mail_relay"], "mailgun");
}

#[tokio::test]
async fn valid_enquiry_is_accepted() {
    let app = test_app();
    let (status, body) = post_json(&app, "/api/contact", &valid_body().to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let response: ContactResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(response.kind, ResponseType::Success);
    assert_eq!(
        response.message,
        "Thanks for your submission Jane, we will get back to you shortly!"
    );
}

#[tokio::test]
async fn invalid_enquiry_returns_field_errors() {
    let app = test_app();
    let json = serde_json::json!({
        "firstName": "",
        "email": "bad",
        "type": "other",
        "comment": "short",
    });
    let (status, body) = post_json(&app, "/api/contact", &json.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let err: AppError = serde_json::from_str(&body).unwrap();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_errors["firstName"], "Name Required");
    assert_eq!(err.field_errors["email"], "Invalid email address");
    assert_eq!(err.field_errors["comment"], "Must be at least 25 characters");
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let app = test_app();
    let (status, body) = post_json(&app, "/api/contact", "{\"firstName\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let err: AppError = serde_json::from_str(&body).unwrap();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "Malformed contact request");
}

#[tokio::test]
async fn unknown_endpoint_is_not_found() {
    let app = test_app();
    let (status, body) =
        post_json(&app, "/api/contact?endpoint=sales", &valid_body().to_string()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let err: AppError = serde_json::from_str(&body).unwrap();
    assert_eq!(err.message, "Unknown contact endpoint");
}

#[tokio::test]
async fn configured_endpoint_is_accepted() {
    let settings = ContactSettings {
        endpoints: vec!["portfolio".into()],
        ..ContactSettings::default()
    };
    let app = test_app_with(settings, Relay::LogOnly, 100);
    let (status, _) =
        post_json(&app, "/api/contact?endpoint=portfolio", &valid_body().to_string()).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn relay_failure_is_bad_gateway() {
    let app = test_app_with(ContactSettings::default(), Relay::Mailgun, 100);
    let (status, body) = post_json(&app, "/api/contact", &valid_body().to_string()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let err: AppError = serde_json::from_str(&body).unwrap();
    assert_eq!(err.kind, AppErrorKind::DeliveryFailed);
    assert_eq!(err.message, "Something went wrong, please try again later!");
}

#[tokio::test]
async fn rate_limit_applies_per_client() {
    let app = test_app_with(ContactSettings::default(), Relay::LogOnly, 2);
    let body = valid_body().to_string();

    for _ in 0..2 {
        let (status, _) = post_json_from(&app, "/api/contact", &body, "203.0.113.5").await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body_text) = post_json_from(&app, "/api/contact", &body, "203.0.113.5").await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    let err: AppError = serde_json::from_str(&body_text).unwrap();
    assert_eq!(err.kind, AppErrorKind::RateLimited);

    let (status, _) = post_json_from(&app, "/api/contact", &body, "203.0.113.6").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_is_not_rate_limited() {
    let app = test_app_with(ContactSettings::default(), Relay::LogOnly, 0);
    let (status, _) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
}
