//! Member business profiles and the membership application payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A member's business profile as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub user_id: String,
    pub company_name: String,
    pub business_category: String,
    pub company_description: Option<String>,
    pub website: Option<String>,
    pub business_phone: Option<String>,
    pub business_email: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub linkedin_url: Option<String>,
    pub instagram_url: Option<String>,
    pub profile_photo_url: Option<String>,
    pub status: String,
    pub reputation_score: f64,
    pub total_referrals_given: i64,
    pub total_referrals_received: i64,
    pub total_deals_closed: i64,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a member profile.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemberCreateData {
    pub company_name: String,
    pub business_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Request body for a partial member profile update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemberUpdateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_photo_url: Option<String>,
}

/// A visitor's membership application.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationData {
    pub company_name: String,
    pub business_category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    pub application_reason: String,
}

/// Request body for a staff-side user update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
