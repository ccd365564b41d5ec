//! Application layer: page-level orchestration over the ports and the
//! API client.

mod dashboard;
mod guard;
mod notifications;

pub use dashboard::{load_dashboard, DashboardData};
pub use guard::{GuardOutcome, PageGuard, RevalidationPolicy};
pub use notifications::NotificationPoller;
