//! Collective meetings: group events created by the Hub.
//!
//! Wire statuses are the backend's Portuguese enum values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::meeting::MeetingType;

/// Lifecycle status of a collective meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectiveMeetingStatus {
    #[serde(rename = "AGENDADA")]
    Scheduled,
    #[serde(rename = "CONFIRMADA")]
    Confirmed,
    #[serde(rename = "CANCELADA")]
    Cancelled,
    #[serde(rename = "REALIZADA")]
    Completed,
}

impl CollectiveMeetingStatus {
    /// Cancel and attendance actions only apply before the event closes.
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            CollectiveMeetingStatus::Scheduled | CollectiveMeetingStatus::Confirmed
        )
    }
}

/// A collective meeting as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectiveMeeting {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub meeting_type: MeetingType,
    pub scheduled_date: DateTime<Utc>,
    pub duration_minutes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    pub status: CollectiveMeetingStatus,
    pub created_by_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub total_invited: i64,
    pub total_confirmed: i64,
    pub total_attended: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// An invited member's confirmation/attendance record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingAttendee {
    pub member_id: String,
    pub member_name: String,
    pub company_name: String,
    pub confirmed: bool,
    pub attended: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_at: Option<DateTime<Utc>>,
}

/// A collective meeting joined with its attendee list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectiveMeetingWithAttendees {
    #[serde(flatten)]
    pub meeting: CollectiveMeeting,
    pub attendees: Vec<MeetingAttendee>,
}

/// Request body for creating a collective meeting.
#[derive(Debug, Clone, Serialize)]
pub struct CollectiveMeetingCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub meeting_type: MeetingType,
    pub scheduled_date: DateTime<Utc>,
    pub duration_minutes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agenda: Option<String>,
}

/// Aggregate counters for the collective meetings page.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectiveMeetingStats {
    pub total_meetings: i64,
    pub upcoming_meetings: i64,
    pub past_meetings: i64,
    pub cancelled_meetings: i64,
    #[serde(default)]
    pub average_attendance_rate: Option<f64>,
}
