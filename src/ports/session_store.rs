//! Session Store Port - the narrow interface for the persisted session.
//!
//! Every page reads the session through this trait instead of a global;
//! tests swap in the in-memory adapter. Presence of an access token is
//! the client's entire notion of "authenticated" - no expiry or signature
//! check happens on this side of the wire.

use async_trait::async_trait;

use crate::domain::{Session, UserSnapshot};

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Stored user snapshot is corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to serialize user snapshot: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting and retrieving the authenticated session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist the session as three independent entries (access token,
    /// refresh token, serialized user snapshot).
    ///
    /// There is no atomicity guarantee between the three writes; a crash
    /// mid-save can leave partial state.
    async fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// The persisted access token, or `None` if absent or the backing
    /// store is unavailable.
    async fn access_token(&self) -> Option<String>;

    /// The persisted refresh token, if any.
    async fn refresh_token(&self) -> Option<String>;

    /// The persisted user snapshot.
    ///
    /// # Errors
    /// Returns `SessionStoreError::Corrupt` if an entry exists but does
    /// not parse; callers decide whether that means re-login.
    async fn current_user(&self) -> Result<Option<UserSnapshot>, SessionStoreError>;

    /// Overwrite only the user snapshot, keeping the tokens.
    ///
    /// Used after re-fetching the current user from the backend.
    async fn replace_user(&self, user: &UserSnapshot) -> Result<(), SessionStoreError>;

    /// Remove all three entries. Used on explicit logout and when the
    /// guard's 401 interceptor fires.
    async fn clear(&self) -> Result<(), SessionStoreError>;

    /// Presence check only: true iff an access token is stored.
    async fn is_authenticated(&self) -> bool {
        self.access_token().await.is_some()
    }
}
