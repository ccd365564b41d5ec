//! One-on-one meetings between a member and the Hub.
//!
//! All transitions (confirm, complete, cancel) are performed server-side;
//! the predicates here only decide which actions a page may offer for the
//! current status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a meeting is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeetingType {
    Online,
    Presencial,
}

impl MeetingType {
    /// Wire value, for query-string filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingType::Online => "ONLINE",
            MeetingType::Presencial => "PRESENCIAL",
        }
    }
}

/// Lifecycle status of a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeetingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl MeetingStatus {
    /// Wire value, for query-string filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingStatus::Pending => "PENDING",
            MeetingStatus::Confirmed => "CONFIRMED",
            MeetingStatus::Cancelled => "CANCELLED",
            MeetingStatus::Completed => "COMPLETED",
        }
    }

    /// "Cancel" is offered while the meeting has not happened yet.
    pub fn can_cancel(&self) -> bool {
        matches!(self, MeetingStatus::Pending | MeetingStatus::Confirmed)
    }

    /// "Confirm" is a Hub action on pending requests only.
    pub fn can_confirm(&self) -> bool {
        matches!(self, MeetingStatus::Pending)
    }

    /// "Complete" is a Hub action on confirmed meetings only.
    pub fn can_complete(&self) -> bool {
        matches!(self, MeetingStatus::Confirmed)
    }
}

/// A meeting as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    pub member_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_by_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_by_id: Option<String>,
    pub meeting_type: MeetingType,
    pub scheduled_date: DateTime<Utc>,
    pub duration_minutes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    pub status: MeetingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Member identity attached to a meeting in staff listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingMember {
    pub id: String,
    pub company_name: String,
    pub business_category: String,
    pub user_name: String,
    pub user_email: String,
}

/// A meeting joined with its member, for the Hub meetings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingWithMember {
    #[serde(flatten)]
    pub meeting: Meeting,
    pub member: MeetingMember,
}

/// Request body for scheduling a meeting.
#[derive(Debug, Clone, Serialize)]
pub struct MeetingCreate {
    pub meeting_type: MeetingType,
    pub scheduled_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_notes: Option<String>,
}

/// Request body for the Hub confirming a meeting.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MeetingConfirmation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hub_notes: Option<String>,
}

/// Optional filters for the staff meeting listing.
#[derive(Debug, Clone, Default)]
pub struct MeetingFilters {
    pub status: Option<MeetingStatus>,
    pub meeting_type: Option<MeetingType>,
    pub date_from: Option<DateTime<Utc>>,
    pub date_to: Option<DateTime<Utc>>,
}

/// Aggregate meeting counters for the Hub dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct MeetingStats {
    pub total_meetings: i64,
    pub pending_meetings: i64,
    pub confirmed_meetings: i64,
    pub completed_meetings: i64,
    pub cancelled_meetings: i64,
    pub upcoming_meetings: i64,
}
