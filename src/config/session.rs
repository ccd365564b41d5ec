//! Session storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Configuration for the persistent session store.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Directory holding the persisted session entries
    #[serde(default = "default_dir")]
    pub dir: String,
}

impl SessionConfig {
    /// Session directory as a path
    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.dir)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.dir.trim().is_empty() {
            return Err(ValidationError::EmptySessionDir);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

fn default_dir() -> String {
    ".union-session".to_string()
}
