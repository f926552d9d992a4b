use axum::Router;
use shared_types::{
    AppError, AppErrorKind, ContactResponse, ContactValues, EnquiryType, ResponseType,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::contact::ContactService;
use crate::health;
use crate::rest::{self, AppState};

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::contact::submit_contact,
        health::health_check,
    ),
    components(schemas(
        ContactValues,
        ContactResponse,
        EnquiryType,
        ResponseType,
        AppError,
        AppErrorKind,
        health::HealthResponse,
    )),
    tags(
        (name = "contact", description = "Contact enquiry submission"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Contact API",
        description = "Backend for the contact me form",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`, the health
/// check, and the REST API at `/api/*`, using the process-wide contact
/// service and rate limiter.
pub fn api_router() -> Router {
    api_router_with(AppState {
        contact: Arc::new(ContactService::from_config()),
        limiter: crate::rate_limit::contact_limiter().clone(),
    })
}

/// Same as [`api_router`] with explicit state.
pub fn api_router_with(state: AppState) -> Router {
    let health = Router::new()
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state.contact.clone());

    Router::new()
        .merge(rest::rest_router(state))
        .merge(health)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
