use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use crate::contact::ContactService;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when enquiries cannot be delivered.
    pub status: String,
    /// Where accepted enquiries go: `log_only` or `mailgun`.
    pub mail_relay: String,
    pub uptime_seconds: u64,
    pub version: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service status and mail relay readiness", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(service): State<Arc<ContactService>>) -> Json<HealthResponse> {
    let ready = service.relay_ready();
    if !ready {
        tracing::warn!("mail relay enabled without a [contact] recipient");
    }

    Json(HealthResponse {
        status: if ready { "ok" } else { "degraded" }.to_string(),
        mail_relay: service.relay().as_str().to_string(),
        uptime_seconds: START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
