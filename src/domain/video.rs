//! Onboarding videos and per-user watch progress.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hosting provider of an onboarding video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoProvider {
    Youtube,
    Panda,
    Vimeo,
}

/// An onboarding video, optionally joined with the caller's progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingVideo {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub video_url: String,
    pub provider: VideoProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    pub order: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_progress: Option<VideoProgress>,
}

/// A user's progress on one video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoProgress {
    pub id: String,
    pub user_id: String,
    pub video_id: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating an onboarding video (Hub/Admin).
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingVideoCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub video_url: String,
    pub provider: VideoProvider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Request body for a partial video update (Hub/Admin).
#[derive(Debug, Clone, Default, Serialize)]
pub struct OnboardingVideoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<VideoProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// The caller's aggregate watch progress.
///
/// The completion percentage is computed server-side; the client only
/// displays it.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoStats {
    pub total_videos: i64,
    pub completed_videos: i64,
    pub pending_videos: i64,
    pub completion_percentage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_without_progress_deserializes() {
        let json = r#"{
            "id": "v-1",
            "title": "Bem-vindo ao Union",
            "video_url": "https://youtu.be/abc",
            "provider": "YOUTUBE",
            "order": 1,
            "is_active": true,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }"#;
        let video: OnboardingVideo = serde_json::from_str(json).unwrap();
        assert_eq!(video.provider, VideoProvider::Youtube);
        assert!(video.user_progress.is_none());
    }

    #[test]
    fn update_serializes_only_set_fields() {
        let update = OnboardingVideoUpdate {
            is_active: Some(false),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(json["is_active"], false);
    }
}
