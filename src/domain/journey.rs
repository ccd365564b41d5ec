//! Dashboard view composition: which sections a user sees and how far a
//! visitor has progressed through onboarding.
//!
//! Pure functions of the cached user and the payloads the dashboard
//! fetches. Nothing here talks to the network.

use super::payment::{Payment, PaymentStatus};
use super::user::Role;

/// Render state of one onboarding step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    /// Done; rendered with a check mark.
    Complete,
    /// The step the user is currently on.
    Current,
    /// Not reachable yet.
    Upcoming,
}

/// The visitor dashboard's three-step onboarding track:
/// application, payment, completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipJourney {
    /// True when the visitor has no payment record at all; the dashboard
    /// shows the "become a member" prompt instead of the payment track.
    pub show_become_member_prompt: bool,
    pub application: StepState,
    pub payment: StepState,
    pub completion: StepState,
    /// Set when the payment was rejected, carrying the backend's reason.
    pub rejection_reason: Option<String>,
}

impl MembershipJourney {
    /// Builds the track from the visitor's payment record, if any.
    pub fn for_visitor(payment: Option<&Payment>) -> Self {
        match payment {
            None => MembershipJourney {
                show_become_member_prompt: true,
                application: StepState::Current,
                payment: StepState::Upcoming,
                completion: StepState::Upcoming,
                rejection_reason: None,
            },
            Some(payment) => {
                let verified = payment.status == PaymentStatus::Verified;
                MembershipJourney {
                    show_become_member_prompt: false,
                    application: StepState::Complete,
                    payment: if verified {
                        StepState::Complete
                    } else {
                        StepState::Current
                    },
                    completion: if verified {
                        StepState::Complete
                    } else {
                        StepState::Upcoming
                    },
                    rejection_reason: payment.rejection_reason.clone(),
                }
            }
        }
    }
}

/// Which dashboard sections a user's role unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSections {
    /// Onboarding track and payment prompts (visitors).
    pub onboarding_track: bool,
    /// Meetings, visits, videos, profile (members).
    pub member_tools: bool,
    /// Application review, payment verification, content management
    /// (Hub/Admin).
    pub hub_panel: bool,
}

impl DashboardSections {
    pub fn for_role(role: Role) -> Self {
        DashboardSections {
            onboarding_track: role == Role::Visitor,
            member_tools: role == Role::Member,
            hub_panel: role.is_staff(),
        }
    }
}
