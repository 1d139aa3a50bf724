//! Application configuration management with security considerations.
//!
//! All values come from environment variables. Sensitive fields are marked
//! and must never be logged.

use envconfig::Envconfig;
use std::{path::PathBuf, sync::OnceLock, time::Duration};

/// Application configuration with security-aware field management.
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name to deploy the app (NON-SENSITIVE)
    /// Values: "local", "dev", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Host address for web server binding (NON-SENSITIVE)
    #[envconfig(default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding (NON-SENSITIVE)
    #[envconfig(default = "8080")]
    pub web_server_port: u16,

    /// Path to SSL private key file (SENSITIVE PATH), used in prod only
    #[envconfig(default = "server.key")]
    pub private_key_path: String,

    /// Path to SSL certificate file (NON-SENSITIVE), used in prod only
    #[envconfig(default = "server.crt")]
    pub certificate_path: String,

    /// 🔒 SENSITIVE: LINE channel secret, key of the webhook signatures
    pub line_channel_secret: String,

    /// 🔒 SENSITIVE: LINE channel access token for the reply API
    pub line_channel_access_token: String,

    /// Path to the parking lot dataset (NON-SENSITIVE)
    #[envconfig(default = "parking_data_with_coords_google_maps.json")]
    pub parking_data_path: String,

    /// Max time to read the dataset before failing the request
    #[envconfig(default = "5000")]
    pub catalog_load_timeout_ms: u64,

    /// Keep the dataset in memory after the first load instead of reading it
    /// on every event
    #[envconfig(default = "false")]
    pub catalog_cache: bool,

    /// 🔒 SENSITIVE: Logfire write token, telemetry is only exported if set
    #[envconfig(default = "")]
    pub logfire_token: String,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }

    pub fn parking_data_path(&self) -> PathBuf {
        PathBuf::from(&self.parking_data_path)
    }

    pub fn catalog_load_timeout(&self) -> Duration {
        Duration::from_millis(self.catalog_load_timeout_ms)
    }
}

/// Global application configuration, set once by [`init_config`].
pub static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Loads the configuration from the environment into [`APP_CONFIG`].
pub fn init_config() -> anyhow::Result<()> {
    let app_config = AppConfig::init_from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load application configuration: {e}"))?;

    APP_CONFIG
        .set(app_config)
        .map_err(|_| anyhow::anyhow!("application configuration already initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_from_hashmap() {
        let env = HashMap::from([
            ("LINE_CHANNEL_SECRET".to_string(), "secret".to_string()),
            ("LINE_CHANNEL_ACCESS_TOKEN".to_string(), "token".to_string()),
        ]);

        let config = AppConfig::init_from_hashmap(&env).unwrap();

        assert!(!config.is_prod());
        assert_eq!(config.web_server_port, 8080);
        assert_eq!(
            config.parking_data_path(),
            PathBuf::from("parking_data_with_coords_google_maps.json")
        );
        assert_eq!(config.catalog_load_timeout(), Duration::from_millis(5000));
        assert!(!config.catalog_cache);
        assert!(config.logfire_token.is_empty());
    }

    #[test]
    fn test_missing_line_credentials_fail() {
        let env = HashMap::from([("ENV".to_string(), "prod".to_string())]);

        assert!(AppConfig::init_from_hashmap(&env).is_err());
    }

    #[test]
    fn test_overrides_from_hashmap() {
        let env = HashMap::from([
            ("ENV".to_string(), "PROD".to_string()),
            ("LINE_CHANNEL_SECRET".to_string(), "secret".to_string()),
            ("LINE_CHANNEL_ACCESS_TOKEN".to_string(), "token".to_string()),
            ("CATALOG_CACHE".to_string(), "true".to_string()),
            ("CATALOG_LOAD_TIMEOUT_MS".to_string(), "250".to_string()),
        ]);

        let config = AppConfig::init_from_hashmap(&env).unwrap();

        assert!(config.is_prod());
        assert!(config.catalog_cache);
        assert_eq!(config.catalog_load_timeout(), Duration::from_millis(250));
    }
}
