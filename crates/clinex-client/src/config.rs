//! Configuration for the vendor client

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default OAuth token endpoint.
pub const DEFAULT_AUTH_URL: &str = "https://auth.imohealth.com/oauth/token";

/// Default entity-extraction pipeline endpoint.
pub const DEFAULT_EXTRACTION_URL: &str =
    "https://api.imohealth.com/entityextraction/pipelines/imo-clinical-comprehensive";

/// Audience claim sent with token requests.
pub const DEFAULT_AUDIENCE: &str = "https://api.imohealth.com";

/// Configuration for the vendor client.
///
/// Fields omitted from a config file fall back to their defaults, so a
/// file may carry only the credential pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// OAuth token endpoint
    pub auth_url: String,

    /// Entity-extraction endpoint
    pub extraction_url: String,

    /// Audience claim for token requests
    pub audience: String,

    /// OAuth client id; demo mode when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// OAuth client secret; demo mode when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// Per-request timeout (seconds)
    pub timeout_secs: u64,

    /// Maximum attempts per extraction call
    pub max_retries: u32,
}

impl ClientConfig {
    /// Get the request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// True when both halves of the credential pair are configured.
    pub fn has_credentials(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.auth_url.is_empty() {
            return Err("auth_url must not be empty".to_string());
        }
        if self.extraction_url.is_empty() {
            return Err("extraction_url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.max_retries == 0 {
            return Err("max_retries must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            extraction_url: DEFAULT_EXTRACTION_URL.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
            client_id: None,
            client_secret: None,
            timeout_secs: 30,
            max_retries: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_partial_credentials_do_not_count() {
        let mut config = ClientConfig::default();
        config.client_id = Some("id".to_string());
        assert!(!config.has_credentials());

        config.client_secret = Some("secret".to_string());
        assert!(config.has_credentials());
    }

    #[test]
    fn test_invalid_timeout() {
        let mut config = ClientConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ClientConfig::default();
        config.client_id = Some("id".to_string());

        let toml_str = config.to_toml().unwrap();
        let parsed = ClientConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.auth_url, parsed.auth_url);
        assert_eq!(config.client_id, parsed.client_id);
        assert_eq!(config.max_retries, parsed.max_retries);
    }
}
