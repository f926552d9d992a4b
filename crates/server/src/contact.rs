//! Accepting contact enquiries: endpoint check, validation, and relay.
//!
//! Both the server function and the REST handler go through
//! [`ContactService::submit`] so the two surfaces behave identically.

use shared_types::{AppError, ContactResponse, ContactSettings, ContactValues};
use std::sync::OnceLock;

use crate::error_convert::ValidateRequest;
use crate::mailgun::{enquiry_email, send_email};

/// Where accepted enquiries go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relay {
    /// Record the enquiry in the log only.
    LogOnly,
    /// Email the enquiry to the configured recipient.
    Mailgun,
}

impl Relay {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relay::LogOnly => "log_only",
            Relay::Mailgun => "mailgun",
        }
    }
}

pub struct ContactService {
    settings: ContactSettings,
    relay: Relay,
}

static SERVICE: OnceLock<ContactService> = OnceLock::new();

/// Process-wide service built from the loaded config.
pub fn contact_service() -> &'static ContactService {
    SERVICE.get_or_init(ContactService::from_config)
}

impl ContactService {
    pub fn new(settings: ContactSettings, relay: Relay) -> Self {
        Self { settings, relay }
    }

    pub fn from_config() -> Self {
        let relay = if crate::config::feature_flags().mailgun {
            Relay::Mailgun
        } else {
            Relay::LogOnly
        };
        Self::new(crate::config::contact_settings().clone(), relay)
    }

    pub fn relay(&self) -> Relay {
        self.relay
    }

    /// False when enquiries would be accepted but could never be delivered.
    pub fn relay_ready(&self) -> bool {
        match self.relay {
            Relay::LogOnly => true,
            Relay::Mailgun => self.settings.recipient.is_some(),
        }
    }

    /// Validate and relay one enquiry.
    ///
    /// The message body is never logged.
    #[tracing::instrument(skip(self, values), fields(enquiry = values.enquiry.as_str(), relay = ?self.relay))]
    pub async fn submit(
        &self,
        endpoint: &str,
        values: &ContactValues,
    ) -> Result<ContactResponse, AppError> {
        if !self.settings.accepts_endpoint(endpoint) {
            tracing::warn!(endpoint, "rejected enquiry for unknown endpoint");
            return Err(AppError::not_found("Unknown contact endpoint"));
        }

        if let Err(err) = values.validate_request() {
            tracing::info!(fields = ?err.field_errors.keys().collect::<Vec<_>>(), "enquiry failed validation");
            return Err(err);
        }

        match self.relay {
            Relay::LogOnly => {
                tracing::info!("enquiry accepted (mail relay disabled)");
            }
            Relay::Mailgun => {
                let recipient = self.settings.recipient.as_deref().ok_or_else(|| {
                    tracing::error!("mail relay enabled but no [contact] recipient configured");
                    delivery_failed()
                })?;
                send_email(&enquiry_email(recipient, values))
                    .await
                    .map_err(|e| {
                        tracing::error!(error = %e, "failed to relay enquiry");
                        delivery_failed()
                    })?;
                tracing::info!("enquiry relayed");
            }
        }

        Ok(ContactResponse::thanks(&values.first_name))
    }
}

fn delivery_failed() -> AppError {
    AppError::delivery_failed(ContactResponse::delivery_failed().message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{AppErrorKind, EnquiryType};

    fn valid() -> ContactValues {
        ContactValues {
            first_name: "Jane".into(),
            email: "jane@example.com".into(),
            enquiry: EnquiryType::HireMe,
            comment: "A".repeat(30),
        }
    }

    #[tokio::test]
    async fn accepts_valid_enquiry_on_default_endpoint() {
        let service = ContactService::new(ContactSettings::default(), Relay::LogOnly);
        let response = service.submit("", &valid()).await.unwrap();
        assert!(response.is_success());
        assert_eq!(
            response.message,
            "Thanks for your submission Jane, we will get back to you shortly!"
        );
    }

    #[tokio::test]
    async fn rejects_unknown_endpoint() {
        let service = ContactService::new(ContactSettings::default(), Relay::LogOnly);
        let err = service.submit("sales", &valid()).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);
    }

    #[tokio::test]
    async fn accepts_configured_endpoint() {
        let settings = ContactSettings {
            endpoints: vec!["portfolio".into()],
            ..ContactSettings::default()
        };
        let service = ContactService::new(settings, Relay::LogOnly);
        assert!(service.submit("portfolio", &valid()).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_invalid_values() {
        let service = ContactService::new(ContactSettings::default(), Relay::LogOnly);
        let values = ContactValues {
            comment: "short".into(),
            ..valid()
        };
        let err = service.submit("", &values).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_errors["comment"], "Must be at least 25 characters");
    }

    #[test]
    fn relay_readiness() {
        assert!(ContactService::new(ContactSettings::default(), Relay::LogOnly).relay_ready());
        assert!(!ContactService::new(ContactSettings::default(), Relay::Mailgun).relay_ready());
        let settings = ContactSettings {
            recipient: Some("me@example.com".into()),
            ..ContactSettings::default()
        };
        assert!(ContactService::new(settings, Relay::Mailgun).relay_ready());
    }

    #[tokio::test]
    async fn mailgun_without_recipient_fails_delivery() {
        let service = ContactService::new(ContactSettings::default(), Relay::Mailgun);
        let err = service.submit("", &valid()).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::DeliveryFailed);
        assert_eq!(err.message, "Something went wrong, please try again later!");
    }
}
