use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use shared_types::{AppError, ContactResponse, ContactValues};

use crate::contact::ContactService;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactParams {
    /// Named endpoint from `[contact] endpoints`; omitted means the default.
    #[serde(default)]
    pub endpoint: String,
}

// ---------------------------------------------------------------------------
// POST /api/contact
// ---------------------------------------------------------------------------

/// Submit a contact enquiry.
#[utoipa::path(
    post,
    path = "/api/contact",
    params(
        ("endpoint" = Option<String>, Query, description = "Named contact endpoint")
    ),
    request_body = ContactValues,
    responses(
        (status = 200, description = "Enquiry accepted", body = ContactResponse),
        (status = 400, description = "Malformed request body", body = AppError),
        (status = 404, description = "Unknown endpoint", body = AppError),
        (status = 422, description = "Validation failed", body = AppError),
        (status = 429, description = "Rate limit exceeded", body = AppError),
        (status = 502, description = "Enquiry could not be relayed", body = AppError)
    ),
    tag = "contact"
)]
#[tracing::instrument(skip(service, body))]
pub async fn submit_contact(
    State(service): State<Arc<ContactService>>,
    Query(params): Query<ContactParams>,
    body: Result<Json<ContactValues>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let Json(values) = body.map_err(|rejection| {
        tracing::info!(error = %rejection.body_text(), "malformed contact body");
        AppError::bad_request("Malformed contact request")
    })?;
    let response = service.submit(&params.endpoint, &values).await?;
    Ok(Json(response))
}
