//! In-memory session store, used by tests and ephemeral runs.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{Session, UserSnapshot};
use crate::ports::{SessionStore, SessionStoreError};

#[derive(Debug, Default)]
struct Slots {
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: Option<String>,
}

/// Session store that keeps the three entries in memory.
///
/// The user snapshot is held serialized so that reads exercise the same
/// decode path as the file adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    slots: Arc<RwLock<Slots>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant a raw user entry, bypassing serialization. Test hook for
    /// corrupt-snapshot scenarios.
    #[cfg(test)]
    pub async fn set_raw_user(&self, raw: &str) {
        self.slots.write().await.user = Some(raw.to_string());
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let user_json = serde_json::to_string(&session.user)
            .map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))?;

        let mut slots = self.slots.write().await;
        slots.access_token = Some(session.access_token.clone());
        slots.refresh_token = Some(session.refresh_token.clone());
        slots.user = Some(user_json);
        Ok(())
    }

    async fn access_token(&self) -> Option<String> {
        self.slots
            .read()
            .await
            .access_token
            .clone()
            .filter(|t| !t.is_empty())
    }

    async fn refresh_token(&self) -> Option<String> {
        self.slots
            .read()
            .await
            .refresh_token
            .clone()
            .filter(|t| !t.is_empty())
    }

    async fn current_user(&self) -> Result<Option<UserSnapshot>, SessionStoreError> {
        let Some(raw) = self.slots.read().await.user.clone() else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| SessionStoreError::Corrupt(e.to_string()))
    }

    async fn replace_user(&self, user: &UserSnapshot) -> Result<(), SessionStoreError> {
        let user_json = serde_json::to_string(user)
            .map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))?;
        self.slots.write().await.user = Some(user_json);
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        let mut slots = self.slots.write().await;
        slots.access_token = None;
        slots.refresh_token = None;
        slots.user = None;
        Ok(())
    }
}
