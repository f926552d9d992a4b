use shared_types::{AppError, ContactResponse, ContactValues};

use super::SubmissionClient;

/// Submits through the `submit_contact` server function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerFnClient;

impl SubmissionClient for ServerFnClient {
    async fn submit(&self, endpoint: &str, values: ContactValues) -> ContactResponse {
        match server::api::submit_contact(endpoint.to_string(), values).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "contact submission failed");
                ContactResponse::error(AppError::friendly_message(&e.to_string()))
            }
        }
    }
}
