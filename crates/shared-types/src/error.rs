use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::validation::{error_messages, FieldErrors};

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    RateLimited,
    DeliveryFailed,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::RateLimited => write!(f, "RateLimited"),
            AppErrorKind::DeliveryFailed => write!(f, "DeliveryFailed"),
        }
    }
}

/// Structured application error used across server and client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::RateLimited, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn delivery_failed(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::DeliveryFailed, message)
    }

    /// Build a validation error from the contact form's rule failures.
    ///
    /// The top-level message is the first failing field's message so that a
    /// client which only shows `message` still says something specific.
    pub fn from_field_errors(errors: &FieldErrors) -> Self {
        let message = errors
            .values()
            .next()
            .map(|err| err.message.to_string())
            .unwrap_or_else(|| "Validation failed".to_string());
        Self::validation(message, error_messages(errors))
    }

    /// Parse an AppError from a ServerFnError message string (client-side).
    ///
    /// `ServerFnError::to_string()` wraps the payload like:
    ///   `error running server function: {"kind":"RateLimited",...} (details: None)`
    /// This method extracts the embedded JSON and parses it.
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        if end > start {
            serde_json::from_str(&error_message[start..=end]).ok()
        } else {
            None
        }
    }

    /// Extract a user-friendly error message from a `ServerFnError.to_string()`.
    ///
    /// Falls back to a generic message if parsing fails.
    pub fn friendly_message(error_string: &str) -> String {
        if let Some(app_error) = Self::from_server_error(error_string) {
            app_error.message
        } else {
            "Something went wrong, please try again later!".to_string()
        }
    }

    #[cfg_attr(not(feature = "server"), allow(dead_code))]
    fn status_code_u16(&self) -> u16 {
        match self.kind {
            AppErrorKind::NotFound => 404,
            AppErrorKind::BadRequest => 400,
            AppErrorKind::ValidationError => 422,
            AppErrorKind::RateLimited => 429,
            AppErrorKind::DeliveryFailed => 502,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status_code_u16())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactValues;
    use crate::validation::validate_all;

    #[test]
    fn from_server_error_parses_raw_json() {
        let json = r#"{"kind":"RateLimited","message":"Slow down"}"#;
        let err = AppError::from_server_error(json).unwrap();
        assert_eq!(err.kind, AppErrorKind::RateLimited);
        assert_eq!(err.message, "Slow down");
    }

    #[test]
    fn from_server_error_parses_wrapped_json() {
        let wrapped = r#"error running server function: {"kind":"NotFound","message":"Unknown contact endpoint"} (details: None)"#;
        let err = AppError::from_server_error(wrapped).unwrap();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "Unknown contact endpoint");
    }

    #[test]
    fn from_server_error_returns_none_for_garbage() {
        assert!(AppError::from_server_error("not json at all").is_none());
        assert!(AppError::from_server_error("").is_none());
    }

    #[test]
    fn friendly_message_fallback_for_unparseable() {
        assert_eq!(
            AppError::friendly_message("connection refused"),
            "Something went wrong, please try again later!"
        );
    }

    #[test]
    fn from_field_errors_leads_with_first_failure() {
        let err = AppError::from_field_errors(&validate_all(&ContactValues::default()));
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.message, "Name Required");
        assert_eq!(err.field_errors.len(), 3);
        assert_eq!(err.field_errors["comment"], "Comments Required");
    }

    #[test]
    fn status_code_mapping() {
        assert_eq!(AppError::not_found("").status_code_u16(), 404);
        assert_eq!(AppError::bad_request("").status_code_u16(), 400);
        assert_eq!(
            AppError::validation("", HashMap::new()).status_code_u16(),
            422
        );
        assert_eq!(AppError::rate_limited("").status_code_u16(), 429);
        assert_eq!(AppError::delivery_failed("").status_code_u16(), 502);
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::delivery_failed("mail relay down");
        assert_eq!(format!("{}", err), "DeliveryFailed: mail relay down");
    }

    #[test]
    fn field_errors_omitted_when_empty() {
        let json = serde_json::to_string(&AppError::bad_request("boom")).unwrap();
        assert!(!json.contains("field_errors"));
    }
}
