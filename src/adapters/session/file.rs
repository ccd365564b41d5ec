//! File-based Session Store Adapter
//!
//! Persists the session as three independent files under one directory:
//! `access_token`, `refresh_token`, and `user.json`. The entries are
//! written one after another with no atomicity across them.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::{Session, UserSnapshot};
use crate::ports::{SessionStore, SessionStoreError};

const TOKEN_FILE: &str = "access_token";
const REFRESH_TOKEN_FILE: &str = "refresh_token";
const USER_FILE: &str = "user.json";

/// File-backed session store.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    base_path: PathBuf,
}

impl FileSessionStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is created lazily on first save; a missing directory
    /// reads as "no session".
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn entry_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    async fn read_entry(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.entry_path(name)).await.ok()
    }

    async fn remove_entry(&self, name: &str) -> Result<(), SessionStoreError> {
        match fs::remove_file(self.entry_path(name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::IoError(e.to_string())),
        }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        // Three independent writes; a crash in between leaves partial
        // state.
        fs::write(self.entry_path(TOKEN_FILE), &session.access_token)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        fs::write(self.entry_path(REFRESH_TOKEN_FILE), &session.refresh_token)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        let user_json = serde_json::to_string(&session.user)
            .map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))?;
        fs::write(self.entry_path(USER_FILE), user_json)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn access_token(&self) -> Option<String> {
        self.read_entry(TOKEN_FILE).await.filter(|t| !t.is_empty())
    }

    async fn refresh_token(&self) -> Option<String> {
        self.read_entry(REFRESH_TOKEN_FILE)
            .await
            .filter(|t| !t.is_empty())
    }

    async fn current_user(&self) -> Result<Option<UserSnapshot>, SessionStoreError> {
        let Some(raw) = self.read_entry(USER_FILE).await else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| SessionStoreError::Corrupt(e.to_string()))
    }

    async fn replace_user(&self, user: &UserSnapshot) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        let user_json = serde_json::to_string(user)
            .map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))?;
        fs::write(self.entry_path(USER_FILE), user_json)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        self.remove_entry(TOKEN_FILE).await?;
        self.remove_entry(REFRESH_TOKEN_FILE).await?;
        self.remove_entry(USER_FILE).await?;
        Ok(())
    }
}
