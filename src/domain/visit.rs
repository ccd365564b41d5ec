//! Inter-member visits: one member visiting another's business.
//!
//! Wire statuses and purposes are the backend's Portuguese enum values.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Why the visit was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitPurpose {
    #[serde(rename = "CONHECER_SERVICOS")]
    LearnServices,
    #[serde(rename = "NETWORKING")]
    Networking,
    #[serde(rename = "PARCERIA")]
    Partnership,
    #[serde(rename = "INDICACAO")]
    Referral,
    #[serde(rename = "FOLLOW_UP")]
    FollowUp,
    #[serde(rename = "OUTRO")]
    Other,
}

/// Lifecycle status of a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitStatus {
    #[serde(rename = "AGENDADA")]
    Scheduled,
    #[serde(rename = "REALIZADA")]
    Completed,
    #[serde(rename = "CANCELADA")]
    Cancelled,
    #[serde(rename = "NAO_REALIZADA")]
    NoShow,
}

impl VisitStatus {
    /// Wire value, for query-string filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitStatus::Scheduled => "AGENDADA",
            VisitStatus::Completed => "REALIZADA",
            VisitStatus::Cancelled => "CANCELADA",
            VisitStatus::NoShow => "NAO_REALIZADA",
        }
    }

    /// Complete and cancel are only offered while the visit is scheduled.
    pub fn can_complete(&self) -> bool {
        matches!(self, VisitStatus::Scheduled)
    }

    pub fn can_cancel(&self) -> bool {
        matches!(self, VisitStatus::Scheduled)
    }
}

/// A visit as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub id: String,
    pub visitor_id: String,
    pub visited_id: String,
    pub purpose: VisitPurpose,
    pub visit_date: DateTime<Utc>,
    pub duration_minutes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: VisitStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visitor_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services_learned: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potential_referrals: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networking_quality: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_needed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Request body for logging a visit.
#[derive(Debug, Clone, Serialize)]
pub struct VisitCreate {
    pub visited_id: String,
    pub purpose: VisitPurpose,
    pub visit_date: DateTime<Utc>,
    pub duration_minutes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visitor_notes: Option<String>,
}

/// Request body for completing a visit with its outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct VisitComplete {
    pub visit_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services_learned: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_referrals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking_quality: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_needed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_date: Option<NaiveDate>,
}

/// Aggregate visit counters for the member's visits page.
#[derive(Debug, Clone, Deserialize)]
pub struct VisitStats {
    pub total_visits: i64,
    pub visits_made: i64,
    pub visits_received: i64,
    pub completed_visits: i64,
    pub pending_visits: i64,
    #[serde(default)]
    pub average_networking_quality: Option<f64>,
    pub total_potential_referrals: i64,
}
