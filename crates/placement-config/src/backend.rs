//! Hosted backend configuration (table API + auth API).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default per-request timeout in seconds.
const fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Project base URL (e.g., `https://abcd.supabase.co`).
    #[serde(default)]
    pub url: String,

    /// Public access key sent as `apikey` on every request.
    #[serde(default)]
    pub anon_key: String,

    /// Timeout applied uniformly to every backend request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl BackendConfig {
    /// Check if both required values are present.
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }

    /// Validate the section for startup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` naming each missing value, or
    /// `ConfigError::InvalidValue` if the URL is not http(s) or the timeout is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut missing = Vec::new();
        if self.url.trim().is_empty() {
            missing.push("url");
        }
        if self.anon_key.trim().is_empty() {
            missing.push("anon_key");
        }
        if !missing.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "backend".into(),
                missing: missing.join(", "),
            });
        }

        let url = self.url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "backend.url".into(),
                reason: format!("expected an http(s) URL, got '{url}'"),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "backend.request_timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }

    /// Table API root: `{url}/rest/v1`.
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.base_url())
    }

    /// Auth API root: `{url}/auth/v1`.
    pub fn auth_url(&self) -> String {
        format!("{}/auth/v1", self.base_url())
    }

    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> BackendConfig {
        BackendConfig {
            url: "https://demo.supabase.co/".into(),
            anon_key: "anon-key".into(),
            ..Default::default()
        }
    }

    #[test]
    fn default_is_not_configured() {
        let config = BackendConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn validate_names_every_missing_value() {
        let err = BackendConfig::default().validate().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("url"), "{message}");
        assert!(message.contains("anon_key"), "{message}");

        let only_url = BackendConfig {
            url: "https://demo.supabase.co".into(),
            ..Default::default()
        };
        match only_url.validate().unwrap_err() {
            ConfigError::NotConfigured { missing, .. } => assert_eq!(missing, "anon_key"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn validate_rejects_non_http_url() {
        let config = BackendConfig {
            url: "demo.supabase.co".into(),
            ..configured()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let config = BackendConfig {
            request_timeout_secs: 0,
            ..configured()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn endpoint_urls_strip_trailing_slash() {
        let config = configured();
        assert!(config.validate().is_ok());
        assert_eq!(config.rest_url(), "https://demo.supabase.co/rest/v1");
        assert_eq!(config.auth_url(), "https://demo.supabase.co/auth/v1");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }
}
