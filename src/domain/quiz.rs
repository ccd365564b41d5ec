//! Onboarding video quizzes.
//!
//! Scoring and the pass threshold live server-side; the client submits
//! answers and displays the returned results. Question payloads come in
//! two shapes: the public one (correct answers hidden) and the admin one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An answer option as seen by a quiz taker (correctness hidden).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuizOptionPublic {
    pub id: String,
    pub option_text: String,
    pub order: i64,
}

/// An answer option with its correctness flag (Hub/Admin view).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub question_id: String,
    pub option_text: String,
    pub is_correct: bool,
    pub order: i64,
    pub created_at: DateTime<Utc>,
}

/// A question as seen by a quiz taker.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuizQuestionPublic {
    pub id: String,
    pub question_text: String,
    pub order: i64,
    pub options: Vec<QuizOptionPublic>,
}

/// A question with correct answers (Hub/Admin view).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub video_id: String,
    pub question_text: String,
    pub order: i64,
    pub is_active: bool,
    pub options: Vec<QuizOption>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating an option within a new question.
#[derive(Debug, Clone, Serialize)]
pub struct QuizOptionCreate {
    pub option_text: String,
    pub is_correct: bool,
    pub order: i64,
}

/// Request body for creating a question with its options.
#[derive(Debug, Clone, Serialize)]
pub struct QuizQuestionCreate {
    pub video_id: String,
    pub question_text: String,
    pub order: i64,
    pub is_active: bool,
    pub options: Vec<QuizOptionCreate>,
}

/// Request body for a partial question update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuizQuestionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Request body for a partial option update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct QuizOptionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

/// Request body for submitting one answer.
#[derive(Debug, Clone, Serialize)]
pub struct QuizAnswerSubmit {
    pub question_id: String,
    pub selected_option_id: String,
}

/// Immediate feedback on a submitted answer.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizAnswerFeedback {
    pub is_correct: bool,
    pub correct_option_id: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Summary of a user's quiz results for one video.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizResultSummary {
    pub video_id: String,
    pub total_questions: i64,
    pub answered_questions: i64,
    pub correct_answers: i64,
    pub score_percentage: f64,
    pub passed: bool,
}
