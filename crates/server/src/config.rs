use shared_types::{AppConfig, ContactSettings, FeatureFlags};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and store it in the global `OnceLock`. Safe to call
/// multiple times; only the first call has effect.
///
/// If the file is missing or unparseable, everything falls back to defaults.
pub fn load_config() {
    let _ = dotenvy::dotenv();
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            tracing::info!(features = ?config.features, "loaded {CONFIG_PATH}");
            config
        }
        Err(e) => {
            tracing::warn!("{CONFIG_PATH} not found ({e}), using defaults");
            AppConfig::default()
        }
    });
}

/// Parse config text, falling back to defaults on error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("failed to parse {CONFIG_PATH}: {e}, using defaults");
        AppConfig::default()
    })
}

fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

/// The loaded feature flags. All-off if `load_config()` was never called.
pub fn feature_flags() -> &'static FeatureFlags {
    &config().features
}

pub fn contact_settings() -> &'static ContactSettings {
    &config().contact
}
