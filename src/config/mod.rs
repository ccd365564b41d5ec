//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `UNION` prefix and nested values use double underscores
//! as separators.
//!
//! # Example
//!
//! ```no_run
//! use ecosistema_union::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Backend API at {}", config.backend.base_url);
//! ```

mod backend;
mod error;
mod server;
mod session;

pub use backend::BackendConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use session::SessionConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has working defaults, so a bare environment yields a
/// development configuration pointing at `http://localhost:8000`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Gateway server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Backend API configuration (base URL, timeouts, poll interval)
    #[serde(default)]
    pub backend: BackendConfig,

    /// Session store configuration
    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `UNION` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `UNION__BACKEND__BASE_URL=https://api.union.example` -> `backend.base_url`
    /// - `UNION__SERVER__PORT=3000` -> `server.port`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("UNION").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.backend.validate()?;
        self.session.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
