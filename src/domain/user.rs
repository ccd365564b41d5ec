//! User identity types: role, account status, and the session's cached
//! user snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a platform user.
///
/// `Hub` and `Admin` are the staff roles; every management page requires
/// one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Registered but not yet approved as a member
    Visitor,
    /// Approved member of the network
    Member,
    /// Group manager
    Hub,
    /// Platform administrator
    Admin,
}

impl Role {
    /// The staff roles allowed on Hub management pages.
    pub const STAFF: [Role; 2] = [Role::Hub, Role::Admin];

    /// Whether this role may access Hub/Admin management pages.
    pub fn is_staff(&self) -> bool {
        matches!(self, Role::Hub | Role::Admin)
    }
}

/// Account status of a platform user.
///
/// The backend does not guarantee any consistency between role and status
/// (a PENDING ADMIN is representable); the client renders whatever it is
/// given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Pending,
    Active,
    Suspended,
    Inactive,
}

/// Minimal information about the user who referred this account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferrerInfo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub email: String,
}

/// The user record as returned by the backend and cached in the session.
///
/// Refreshed opportunistically by re-fetching the current user; the
/// refreshed copy is not guaranteed consistent with any in-flight page
/// state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
    pub status: UserStatus,
    pub email_verified: bool,
    pub referral_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referred_by_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referred_by: Option<ReferrerInfo>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_json() -> &'static str {
        r#"{
            "id": "u-1",
            "email": "a@b.com",
            "full_name": "Ana",
            "role": "VISITOR",
            "status": "PENDING",
            "email_verified": false,
            "referral_code": "UNION123",
            "created_at": "2025-01-15T12:00:00Z"
        }"#
    }

    #[test]
    fn role_uses_wire_casing() {
        assert_eq!(serde_json::to_string(&Role::Visitor).unwrap(), "\"VISITOR\"");
        assert_eq!(serde_json::to_string(&Role::Hub).unwrap(), "\"HUB\"");
        let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn staff_check() {
        assert!(Role::Hub.is_staff());
        assert!(Role::Admin.is_staff());
        assert!(!Role::Member.is_staff());
        assert!(!Role::Visitor.is_staff());
    }

    #[test]
    fn snapshot_deserializes_with_optional_fields_absent() {
        let user: UserSnapshot = serde_json::from_str(snapshot_json()).unwrap();
        assert_eq!(user.role, Role::Visitor);
        assert_eq!(user.status, UserStatus::Pending);
        assert!(user.phone.is_none());
        assert!(user.referred_by.is_none());
    }

    #[test]
    fn snapshot_round_trips() {
        let user: UserSnapshot = serde_json::from_str(snapshot_json()).unwrap();
        let json = serde_json::to_string(&user).unwrap();
        let back: UserSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
