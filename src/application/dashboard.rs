//! Dashboard Loader - fetches the payloads the dashboard renders from.
//!
//! The role decides which sections exist; the loader fetches only what
//! those sections need, in parallel where the fetches are independent.
//! Fetch failures degrade to the section's empty state rather than
//! blocking the page.

use futures::join;

use crate::adapters::backend::UnionApi;
use crate::domain::journey::{DashboardSections, MembershipJourney};
use crate::domain::video::VideoStats;
use crate::domain::UserSnapshot;

/// Everything the dashboard page needs to render.
#[derive(Debug)]
pub struct DashboardData {
    pub user: UserSnapshot,
    pub sections: DashboardSections,
    /// Present only for visitors; `None` payload inside it means the
    /// "become a member" prompt.
    pub journey: Option<MembershipJourney>,
    pub video_stats: Option<VideoStats>,
}

/// Loads the dashboard for an already-guarded user.
pub async fn load_dashboard(api: &UnionApi, user: UserSnapshot) -> DashboardData {
    let sections = DashboardSections::for_role(user.role);

    let (journey, video_stats) = if sections.onboarding_track {
        // Independent fetches; a missing payment record (404) renders as
        // the "become a member" prompt.
        let (payment, stats) = join!(api.my_payment(), api.my_video_stats());
        (
            Some(MembershipJourney::for_visitor(payment.ok().as_ref())),
            stats.ok(),
        )
    } else if sections.member_tools {
        (None, api.my_video_stats().await.ok())
    } else {
        (None, None)
    };

    DashboardData {
        user,
        sections,
        journey,
        video_stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::config::BackendConfig;
    use crate::domain::{Role, UserStatus};
    use chrono::Utc;
    use std::sync::Arc;

    fn user(role: Role) -> UserSnapshot {
        UserSnapshot {
            id: "u-1".to_string(),
            email: "a@b.com".to_string(),
            full_name: None,
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

    fn unreachable_api() -> UnionApi {
        let config = BackendConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            request_timeout_secs: 2,
            ..Default::default()
        };
        UnionApi::new(&config, Arc::new(InMemorySessionStore::new()))
    }

    #[tokio::test]
    async fn visitor_without_a_payment_gets_the_prompt() {
        let api = unreachable_api();
        let data = load_dashboard(&api, user(Role::Visitor)).await;

        assert!(data.sections.onboarding_track);
        let journey = data.journey.expect("visitor journey");
        assert!(journey.show_become_member_prompt);
        assert!(data.video_stats.is_none());
    }

    #[tokio::test]
    async fn staff_gets_no_visitor_or_member_payloads() {
        let api = unreachable_api();
        let data = load_dashboard(&api, user(Role::Admin)).await;

        assert!(data.sections.hub_panel);
        assert!(data.journey.is_none());
        assert!(data.video_stats.is_none());
    }
}
