//! Extended profile: completion scoring and photo management responses.

use serde::{Deserialize, Serialize};

/// A suggestion for improving profile completion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileSuggestion {
    pub field: String,
    pub label: String,
    pub priority: String,
    pub description: String,
}

/// Profile completion percentage with improvement suggestions.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileCompletion {
    pub completion_percentage: i64,
    pub suggestions: Vec<ProfileSuggestion>,
}

/// Request body for a partial extended-profile update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
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
    pub facebook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
}

/// Response of a profile update.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdated {
    pub message: String,
    pub profile_completed: i64,
}

/// Response of a profile photo upload.
///
/// `photo_url` is relative to the backend base URL.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfilePhotoUploaded {
    pub message: String,
    pub photo_url: String,
    pub profile_completed: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_serializes_to_empty_object() {
        let json = serde_json::to_value(ProfileUpdate::default()).unwrap();
        assert!(json.as_object().unwrap().is_empty());
    }

    #[test]
    fn completion_deserializes() {
        let json = r#"{
            "completion_percentage": 60,
            "suggestions": [
                {"field": "bio", "label": "Bio", "priority": "HIGH", "description": "Add a short bio"}
            ]
        }"#;
        let completion: ProfileCompletion = serde_json::from_str(json).unwrap();
        assert_eq!(completion.completion_percentage, 60);
        assert_eq!(completion.suggestions[0].field, "bio");
    }
}
