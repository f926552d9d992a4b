use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional integrations are active.
///
/// Loaded from `config.toml` at server startup. Every field defaults to
/// `false` so that a missing or incomplete config file disables all
/// optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Relay accepted enquiries by email through Mailgun.
    #[serde(default)]
    pub mailgun: bool,
    /// Export traces and logs over OTLP.
    #[serde(default)]
    pub telemetry: bool,
}

/// Settings for the contact endpoint, the `[contact]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactSettings {
    /// Where relayed enquiries are delivered.
    #[serde(default)]
    pub recipient: Option<String>,
    /// Named endpoints a form may target besides the default (empty) one.
    #[serde(default)]
    pub endpoints: Vec<String>,
    /// Submissions allowed per client within the window.
    #[serde(default = "default_rate_limit_max")]
    pub rate_limit_max: u32,
    #[serde(default = "default_rate_limit_window_secs")]
    pub rate_limit_window_secs: u64,
}

fn default_rate_limit_max() -> u32 {
    5
}

fn default_rate_limit_window_secs() -> u64 {
    600
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            recipient: None,
            endpoints: Vec::new(),
            rate_limit_max: default_rate_limit_max(),
            rate_limit_window_secs: default_rate_limit_window_secs(),
        }
    }
}

impl ContactSettings {
    /// The empty endpoint always means "default"; anything else must be listed.
    pub fn accepts_endpoint(&self, endpoint: &str) -> bool {
        endpoint.is_empty() || self.endpoints.iter().any(|e| e == endpoint)
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub contact: ContactSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.mailgun);
        assert!(!flags.telemetry);
    }

    #[test]
    fn deserialize_empty_toml_defaults_everything() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.contact.rate_limit_max, 5);
        assert_eq!(config.contact.rate_limit_window_secs, 600);
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            mailgun = true

            [contact]
            recipient = "me@example.com"
            "#,
        )
        .unwrap();
        assert!(config.features.mailgun);
        assert!(!config.features.telemetry);
        assert_eq!(config.contact.recipient.as_deref(), Some("me@example.com"));
        assert!(config.contact.endpoints.is_empty());
        assert_eq!(config.contact.rate_limit_max, 5);
    }

    #[test]
    fn deserialize_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            mailgun = true
            telemetry = true

            [contact]
            recipient = "me@example.com"
            endpoints = ["portfolio", "consulting"]
            rate_limit_max = 2
            rate_limit_window_secs = 60
            "#,
        )
        .unwrap();
        assert!(config.features.telemetry);
        assert_eq!(config.contact.endpoints, vec!["portfolio", "consulting"]);
        assert_eq!(config.contact.rate_limit_max, 2);
        assert_eq!(config.contact.rate_limit_window_secs, 60);
    }

    #[test]
    fn empty_endpoint_is_always_accepted() {
        let settings = ContactSettings::default();
        assert!(settings.accepts_endpoint(""));
        assert!(!settings.accepts_endpoint("portfolio"));
    }

    #[test]
    fn listed_endpoints_are_accepted() {
        let settings = ContactSettings {
            endpoints: vec!["portfolio".into()],
            ..ContactSettings::default()
        };
        assert!(settings.accepts_endpoint("portfolio"));
        assert!(!settings.accepts_endpoint("other"));
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
