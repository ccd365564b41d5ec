//! Page Guard - the single reusable access check for protected pages.
//!
//! Each page declares the role set allowed to see it and asks the guard
//! for an outcome instead of re-implementing the token/role boilerplate.
//! The guard is also where the 401 interceptor lives: an expired or
//! revoked token observed during revalidation clears the session and
//! redirects to login instead of being silently swallowed.

use std::sync::Arc;

use crate::adapters::backend::UnionApi;
use crate::domain::{Role, UserSnapshot};
use crate::ports::SessionStore;

/// What the page should do after the check.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    /// Render the page for this user.
    Proceed(UserSnapshot),
    /// No usable session; go to the login page.
    RedirectToLogin,
    /// Authenticated but the role is not allowed here; go to the
    /// caller's own dashboard.
    RedirectToDashboard,
}

/// Whether the guard re-fetches the user before gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevalidationPolicy {
    /// Re-fetch `/auth/me`, overwrite the stored snapshot, and treat a
    /// 401 as session expiry. Transport failures fall back to the
    /// cached snapshot so a flaky network does not log anyone out.
    #[default]
    Revalidate,
    /// Gate on the stored snapshot only. Cheaper; role changes are only
    /// picked up on the next revalidating page.
    TrustCached,
}

/// Access check declared once per protected page.
pub struct PageGuard {
    session: Arc<dyn SessionStore>,
    api: Arc<UnionApi>,
    allowed_roles: Vec<Role>,
    policy: RevalidationPolicy,
}

impl PageGuard {
    /// Creates a guard allowing the given roles, with the default
    /// revalidating policy.
    pub fn new(
        session: Arc<dyn SessionStore>,
        api: Arc<UnionApi>,
        allowed_roles: impl Into<Vec<Role>>,
    ) -> Self {
        Self {
            session,
            api,
            allowed_roles: allowed_roles.into(),
            policy: RevalidationPolicy::default(),
        }
    }

    /// Overrides the revalidation policy.
    pub fn with_policy(mut self, policy: RevalidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Runs the check. Never fails: every failure mode maps to one of
    /// the redirect outcomes.
    pub async fn check(&self) -> GuardOutcome {
        if !self.session.is_authenticated().await {
            return GuardOutcome::RedirectToLogin;
        }

        let user = match self.policy {
            RevalidationPolicy::Revalidate => match self.api.current_user().await {
                Ok(user) => {
                    if let Err(e) = self.session.replace_user(&user).await {
                        tracing::warn!(error = %e, "failed to refresh stored user snapshot");
                    }
                    user
                }
                Err(e) if e.is_unauthorized() => {
                    // Token expired or revoked. Clear and start over.
                    tracing::info!("session rejected by backend, clearing");
                    self.clear_session().await;
                    return GuardOutcome::RedirectToLogin;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "revalidation failed, using cached snapshot");
                    match self.cached_user().await {
                        Some(user) => user,
                        None => return GuardOutcome::RedirectToLogin,
                    }
                }
            },
            RevalidationPolicy::TrustCached => match self.cached_user().await {
                Some(user) => user,
                None => return GuardOutcome::RedirectToLogin,
            },
        };

        if self.allowed_roles.contains(&user.role) {
            GuardOutcome::Proceed(user)
        } else {
            GuardOutcome::RedirectToDashboard
        }
    }

    /// Reads the stored snapshot. A corrupt entry counts as no session
    /// at all and wipes the store.
    async fn cached_user(&self) -> Option<UserSnapshot> {
        match self.session.current_user().await {
            Ok(Some(user)) => Some(user),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "stored user snapshot unreadable, clearing session");
                self.clear_session().await;
                None
            }
        }
    }

    async fn clear_session(&self) {
        if let Err(e) = self.session.clear().await {
            tracing::warn!(error = %e, "failed to clear session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::config::BackendConfig;
    use crate::domain::{Session, UserStatus};
    use chrono::Utc;

    fn user(role: Role) -> UserSnapshot {
        UserSnapshot {
            id: "u-1".to_string(),
            email: "a@b.com".to_string(),
            full_name: Some("Ana".to_string()),
            phone: None,
            role,
            status: UserStatus::Active,
            email_verified: true,
            referral_code: "UNION123".to_string(),
            referred_by_id: None,
            referred_by: None,
            created_at: Utc::now(),
        }
    }

    fn session_with(role: Role) -> Session {
        Session {
            access_token: "tok".to_string(),
            refresh_token: "ref".to_string(),
            user: user(role),
        }
    }

    /// Points at a port nothing listens on, so revalidation attempts
    /// fail with a transport error.
    fn unreachable_api(store: Arc<InMemorySessionStore>) -> Arc<UnionApi> {
        let config = BackendConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            request_timeout_secs: 2,
            ..Default::default()
        };
        Arc::new(UnionApi::new(&config, store))
    }

    #[tokio::test]
    async fn no_token_redirects_to_login() {
        let store = Arc::new(InMemorySessionStore::new());
        let api = unreachable_api(store.clone());
        let guard = PageGuard::new(store, api, vec![Role::Member]);

        assert_eq!(guard.check().await, GuardOutcome::RedirectToLogin);
    }

    #[tokio::test]
    async fn cached_role_outside_the_set_redirects_to_dashboard() {
        let store = Arc::new(InMemorySessionStore::new());
        store.save(&session_with(Role::Visitor)).await.unwrap();
        let api = unreachable_api(store.clone());

        let guard = PageGuard::new(store, api, Role::STAFF.to_vec())
            .with_policy(RevalidationPolicy::TrustCached);

        assert_eq!(guard.check().await, GuardOutcome::RedirectToDashboard);
    }

    #[tokio::test]
    async fn cached_allowed_role_proceeds() {
        let store = Arc::new(InMemorySessionStore::new());
        store.save(&session_with(Role::Hub)).await.unwrap();
        let api = unreachable_api(store.clone());

        let guard = PageGuard::new(store, api, Role::STAFF.to_vec())
            .with_policy(RevalidationPolicy::TrustCached);

        match guard.check().await {
            GuardOutcome::Proceed(user) => assert_eq!(user.role, Role::Hub),
            other => panic!("expected Proceed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn revalidation_transport_failure_falls_back_to_cache() {
        let store = Arc::new(InMemorySessionStore::new());
        store.save(&session_with(Role::Member)).await.unwrap();
        let api = unreachable_api(store.clone());

        let guard = PageGuard::new(store, api, vec![Role::Member]);

        match guard.check().await {
            GuardOutcome::Proceed(user) => assert_eq!(user.role, Role::Member),
            other => panic!("expected Proceed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn corrupt_snapshot_clears_the_session_and_redirects() {
        let store = Arc::new(InMemorySessionStore::new());
        store.save(&session_with(Role::Member)).await.unwrap();
        store.set_raw_user("{broken").await;
        let api = unreachable_api(store.clone());

        let guard = PageGuard::new(store.clone(), api, vec![Role::Member])
            .with_policy(RevalidationPolicy::TrustCached);

        assert_eq!(guard.check().await, GuardOutcome::RedirectToLogin);
        assert!(!store.is_authenticated().await);
    }
}
