//! Backend API configuration
//!
//! One variable selects the backend base URL (`UNION__BACKEND__BASE_URL`);
//! when unset it defaults to the local development address, matching the
//! backend's own default port.

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the backend REST API the client talks to.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend API (no trailing slash required)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Interval between notification polls, in seconds
    #[serde(default = "default_poll_interval")]
    pub notification_poll_secs: u64,
}

impl BackendConfig {
    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Notification poll interval as a `Duration`
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.notification_poll_secs)
    }

    /// Validate backend configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBackendUrl);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.notification_poll_secs < 5 {
            return Err(ValidationError::PollIntervalTooShort);
        }
        Ok(())
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            notification_poll_secs: default_poll_interval(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_poll_interval() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_defaults() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.poll_interval(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_url() {
        let config = BackendConfig {
            base_url: "localhost:8000".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBackendUrl)
        ));
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = BackendConfig {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_short_poll_interval() {
        let config = BackendConfig {
            notification_poll_secs: 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::PollIntervalTooShort)
        ));
    }
}
