use dioxus::prelude::*;
use shared_types::{ContactResponse, ContactValues};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Client key for the current server function request.
#[cfg(feature = "server")]
fn request_client_key() -> String {
    dioxus::fullstack::FullstackContext::current()
        .map(|ctx| crate::rate_limit::client_key(&ctx.parts_mut().headers))
        .unwrap_or_else(|| "anonymous".to_string())
}

/// Submit a contact enquiry.
///
/// `endpoint` names a configured destination; empty means the default.
/// Failures come back as an `AppError` serialized into the `ServerFnError`.
#[cfg_attr(feature = "server", tracing::instrument(skip(values)))]
#[server]
pub async fn submit_contact(
    endpoint: String,
    values: ContactValues,
) -> Result<ContactResponse, ServerFnError> {
    let key = request_client_key();
    if !crate::rate_limit::contact_limiter().check(&key) {
        tracing::warn!(client = %key, "contact rate limit exceeded");
        return Err(crate::rate_limit::rate_limited_error().into_server_fn_error());
    }

    crate::contact::contact_service()
        .submit(&endpoint, &values)
        .await
        .map_err(|e| e.into_server_fn_error())
}
