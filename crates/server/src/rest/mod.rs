pub mod contact;

use axum::{extract::FromRef, middleware, routing::post, Router};
use std::sync::Arc;

use crate::contact::ContactService;
use crate::rate_limit::{rate_limit_middleware, RateLimitState};

/// Shared state for the REST routes.
#[derive(Clone)]
pub struct AppState {
    pub contact: Arc<ContactService>,
    pub limiter: RateLimitState,
}

impl FromRef<AppState> for Arc<ContactService> {
    fn from_ref(state: &AppState) -> Self {
        state.contact.clone()
    }
}

/// Build the REST API router. Every route here is rate limited per client.
pub fn rest_router(state: AppState) -> Router {
    Router::new()
        .route("/api/contact", post(contact::submit_contact))
        .route_layer(middleware::from_fn_with_state(
            state.limiter.clone(),
            rate_limit_middleware,
        ))
        .with_state(state)
}
