//! Backend API Client - one async method per backend operation.
//!
//! Every method builds `{base_url}{path}`, attaches a bearer token read
//! fresh from the session store (never cached on the client instance),
//! and normalizes responses: 2xx bodies are decoded into the declared
//! type, non-2xx responses become an [`ApiError`] whose display text is
//! the backend's `detail` string or the operation's fallback message.
//!
//! # Usage
//!
//! ```ignore
//! let api = UnionApi::new(&config.backend, session.clone());
//! let auth = api.login(&LoginData { email, password }).await?;
//! session.save(&Session::from(auth)).await?;
//! ```

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

use crate::config::BackendConfig;
use crate::domain::collective::{
    CollectiveMeeting, CollectiveMeetingCreate, CollectiveMeetingStats,
    CollectiveMeetingWithAttendees,
};
use crate::domain::meeting::{
    Meeting, MeetingConfirmation, MeetingCreate, MeetingFilters, MeetingStats, MeetingWithMember,
};
use crate::domain::member::{
    ApplicationData, Member, MemberCreateData, MemberUpdateData, UserUpdateData,
};
use crate::domain::notification::{Notification, NotificationStats};
use crate::domain::payment::{
    Payment, PaymentProofSubmission, PaymentVerification, PixInfo, UploadedFile,
};
use crate::domain::profile::{ProfileCompletion, ProfilePhotoUploaded, ProfileUpdate, ProfileUpdated};
use crate::domain::quiz::{
    QuizAnswerFeedback, QuizAnswerSubmit, QuizOption, QuizOptionCreate, QuizOptionUpdate,
    QuizQuestion, QuizQuestionCreate, QuizQuestionPublic, QuizQuestionUpdate, QuizResultSummary,
};
use crate::domain::session::{AuthResponse, LoginData, RegisterData};
use crate::domain::video::{
    OnboardingVideo, OnboardingVideoCreate, OnboardingVideoUpdate, VideoProgress, VideoStats,
};
use crate::domain::visit::{Visit, VisitComplete, VisitCreate, VisitStats, VisitStatus};
use crate::domain::UserSnapshot;
use crate::ports::SessionStore;

use super::error::ApiError;

/// Client for the Ecosistema Union backend REST API.
pub struct UnionApi {
    base_url: String,
    http: Client,
    session: Arc<dyn SessionStore>,
}

impl UnionApi {
    /// Creates a client from the backend configuration.
    pub fn new(config: &BackendConfig, session: Arc<dyn SessionStore>) -> Self {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            session,
        }
    }

    /// Resolves a backend-relative resource URL (uploaded files, photos)
    /// against the base URL. Absolute URLs pass through unchanged.
    pub fn resource_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reads the access token from the session store. Read on every call
    /// so a re-login mid-session takes effect immediately.
    async fn bearer(&self) -> Result<String, ApiError> {
        self.session
            .access_token()
            .await
            .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))
    }

    /// Maps a non-2xx response to an [`ApiError`].
    async fn check(response: Response, fallback: &str) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("detail")
                    .and_then(|detail| detail.as_str())
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| fallback.to_string());

        tracing::debug!(status = %status, %message, "backend request rejected");

        if status == StatusCode::UNAUTHORIZED {
            Err(ApiError::Unauthorized(message))
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn decode<T: DeserializeOwned>(
        response: Response,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = Self::check(response, fallback).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T, ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(response, fallback).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        Self::decode(response, fallback).await
    }

    async fn post_empty_body<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(response, fallback).await
    }

    async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .patch(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        Self::decode(response, fallback).await
    }

    async fn delete(&self, path: &str, fallback: &str) -> Result<(), ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .delete(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check(response, fallback).await?;
        Ok(())
    }

    // ========================================================================
    // Auth
    // ========================================================================

    /// `POST /api/v1/auth/register` - no auth required.
    pub async fn register(&self, data: &RegisterData) -> Result<AuthResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/api/v1/auth/register"))
            .json(data)
            .send()
            .await?;
        Self::decode(response, "Registration failed").await
    }

    /// `POST /api/v1/auth/login` - no auth required.
    pub async fn login(&self, data: &LoginData) -> Result<AuthResponse, ApiError> {
        let response = self
            .http
            .post(self.url("/api/v1/auth/login"))
            .json(data)
            .send()
            .await?;
        Self::decode(response, "Login failed").await
    }

    /// `GET /api/v1/auth/me` - the authoritative current user.
    pub async fn current_user(&self) -> Result<UserSnapshot, ApiError> {
        self.get("/api/v1/auth/me", "Failed to fetch current user")
            .await
    }

    /// `POST /api/v1/auth/logout`. The response status is ignored;
    /// logout always succeeds locally once the request completes.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.http
            .post(self.url("/api/v1/auth/logout"))
            .send()
            .await?;
        Ok(())
    }

    // ========================================================================
    // Members
    // ========================================================================

    /// `GET /api/v1/members/all` (Hub/Admin).
    pub async fn list_members(&self) -> Result<Vec<UserSnapshot>, ApiError> {
        self.get("/api/v1/members/all", "Failed to fetch members")
            .await
    }

    /// `GET /api/v1/members/pending` (Hub/Admin).
    pub async fn pending_visitors(&self) -> Result<Vec<UserSnapshot>, ApiError> {
        self.get("/api/v1/members/pending", "Failed to fetch pending visitors")
            .await
    }

    /// `POST /api/v1/members/{id}/approve` (Hub/Admin).
    pub async fn approve_visitor(&self, user_id: &str) -> Result<UserSnapshot, ApiError> {
        self.post_empty_body(
            &format!("/api/v1/members/{user_id}/approve"),
            "Failed to approve visitor",
        )
        .await
    }

    /// `POST /api/v1/members/{id}/reject` (Hub/Admin).
    pub async fn reject_visitor(&self, user_id: &str) -> Result<UserSnapshot, ApiError> {
        self.post_empty_body(
            &format!("/api/v1/members/{user_id}/reject"),
            "Failed to reject visitor",
        )
        .await
    }

    /// `GET /api/v1/members/{id}/statistics` (Hub/Admin). The shape is
    /// backend-defined and displayed as-is.
    pub async fn member_statistics(&self, user_id: &str) -> Result<serde_json::Value, ApiError> {
        self.get(
            &format!("/api/v1/members/{user_id}/statistics"),
            "Failed to fetch member statistics",
        )
        .await
    }

    /// `PATCH /api/v1/members/{id}` (Hub/Admin).
    pub async fn update_user(
        &self,
        user_id: &str,
        data: &UserUpdateData,
    ) -> Result<UserSnapshot, ApiError> {
        self.patch(
            &format!("/api/v1/members/{user_id}"),
            data,
            "Failed to update user",
        )
        .await
    }

    /// `POST /api/v1/members/profile`.
    pub async fn create_member_profile(&self, data: &MemberCreateData) -> Result<Member, ApiError> {
        self.post(
            "/api/v1/members/profile",
            data,
            "Failed to create member profile",
        )
        .await
    }

    /// `GET /api/v1/members/profile/me`.
    pub async fn my_member_profile(&self) -> Result<Member, ApiError> {
        self.get("/api/v1/members/profile/me", "Failed to fetch member profile")
            .await
    }

    /// `PATCH /api/v1/members/profile/me`.
    pub async fn update_my_member_profile(
        &self,
        data: &MemberUpdateData,
    ) -> Result<Member, ApiError> {
        self.patch(
            "/api/v1/members/profile/me",
            data,
            "Failed to update member profile",
        )
        .await
    }

    // ========================================================================
    // Onboarding: application and payment
    // ========================================================================

    /// `POST /api/v1/onboarding/apply`.
    pub async fn submit_application(&self, data: &ApplicationData) -> Result<Member, ApiError> {
        self.post(
            "/api/v1/onboarding/apply",
            data,
            "Failed to submit application",
        )
        .await
    }

    /// `POST /api/v1/upload/payment-proof` - multipart upload, single
    /// field named `file`. The returned URL is backend-relative.
    pub async fn upload_payment_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedFile, ApiError> {
        let token = self.bearer().await?;
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.url("/api/v1/upload/payment-proof"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        Self::decode(response, "Failed to upload file").await
    }

    /// `POST /api/v1/onboarding/payment/proof` - links an uploaded proof
    /// to the payment record.
    pub async fn submit_payment_proof(
        &self,
        submission: &PaymentProofSubmission,
    ) -> Result<Payment, ApiError> {
        self.post(
            "/api/v1/onboarding/payment/proof",
            submission,
            "Failed to upload payment proof",
        )
        .await
    }

    /// `GET /api/v1/onboarding/payment/me`.
    pub async fn my_payment(&self) -> Result<Payment, ApiError> {
        self.get("/api/v1/onboarding/payment/me", "Failed to fetch payment")
            .await
    }

    /// `GET /api/v1/onboarding/pix-info` - no auth required.
    pub async fn pix_info(&self) -> Result<PixInfo, ApiError> {
        let response = self
            .http
            .get(self.url("/api/v1/onboarding/pix-info"))
            .send()
            .await?;
        Self::decode(response, "Failed to fetch PIX info").await
    }

    /// `GET /api/v1/onboarding/payments/pending` (Hub/Admin).
    pub async fn pending_payments(&self) -> Result<Vec<Payment>, ApiError> {
        self.get(
            "/api/v1/onboarding/payments/pending",
            "Failed to fetch pending payments",
        )
        .await
    }

    /// `POST /api/v1/onboarding/payments/{id}/verify` (Hub/Admin).
    pub async fn verify_payment(
        &self,
        payment_id: &str,
        decision: &PaymentVerification,
    ) -> Result<Payment, ApiError> {
        self.post(
            &format!("/api/v1/onboarding/payments/{payment_id}/verify"),
            decision,
            "Failed to verify payment",
        )
        .await
    }

    // ========================================================================
    // Onboarding videos
    // ========================================================================

    /// `GET /api/v1/onboarding-videos` - active videos with the caller's
    /// progress attached.
    pub async fn list_videos(&self) -> Result<Vec<OnboardingVideo>, ApiError> {
        self.get("/api/v1/onboarding-videos", "Failed to fetch videos")
            .await
    }

    /// `GET /api/v1/onboarding-videos/all` (Hub/Admin).
    pub async fn list_all_videos(
        &self,
        include_inactive: bool,
    ) -> Result<Vec<OnboardingVideo>, ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .get(self.url("/api/v1/onboarding-videos/all"))
            .query(&[("include_inactive", include_inactive)])
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(response, "Failed to fetch videos").await
    }

    /// `POST /api/v1/onboarding-videos` (Hub/Admin).
    pub async fn create_video(
        &self,
        data: &OnboardingVideoCreate,
    ) -> Result<OnboardingVideo, ApiError> {
        self.post("/api/v1/onboarding-videos", data, "Failed to create video")
            .await
    }

    /// `PATCH /api/v1/onboarding-videos/{id}` (Hub/Admin).
    pub async fn update_video(
        &self,
        video_id: &str,
        data: &OnboardingVideoUpdate,
    ) -> Result<OnboardingVideo, ApiError> {
        self.patch(
            &format!("/api/v1/onboarding-videos/{video_id}"),
            data,
            "Failed to update video",
        )
        .await
    }

    /// `DELETE /api/v1/onboarding-videos/{id}` (Hub/Admin).
    pub async fn delete_video(&self, video_id: &str) -> Result<(), ApiError> {
        self.delete(
            &format!("/api/v1/onboarding-videos/{video_id}"),
            "Failed to delete video",
        )
        .await
    }

    /// `POST /api/v1/onboarding-videos/{id}/start`.
    pub async fn mark_video_started(&self, video_id: &str) -> Result<VideoProgress, ApiError> {
        self.post_empty_body(
            &format!("/api/v1/onboarding-videos/{video_id}/start"),
            "Failed to mark video as started",
        )
        .await
    }

    /// `POST /api/v1/onboarding-videos/{id}/complete`.
    pub async fn mark_video_completed(&self, video_id: &str) -> Result<VideoProgress, ApiError> {
        self.post_empty_body(
            &format!("/api/v1/onboarding-videos/{video_id}/complete"),
            "Failed to mark video as completed",
        )
        .await
    }

    /// `GET /api/v1/onboarding-videos/stats/me`.
    pub async fn my_video_stats(&self) -> Result<VideoStats, ApiError> {
        self.get("/api/v1/onboarding-videos/stats/me", "Failed to fetch video stats")
            .await
    }

    // ========================================================================
    // Video quizzes
    // ========================================================================

    /// `GET /api/v1/quiz/videos/{id}/questions` - answer correctness is
    /// stripped server-side for quiz takers.
    pub async fn video_questions(
        &self,
        video_id: &str,
    ) -> Result<Vec<QuizQuestionPublic>, ApiError> {
        self.get(
            &format!("/api/v1/quiz/videos/{video_id}/questions"),
            "Failed to fetch quiz questions",
        )
        .await
    }

    /// `GET /api/v1/quiz/videos/{id}/questions/admin` (Hub/Admin).
    pub async fn video_questions_admin(
        &self,
        video_id: &str,
    ) -> Result<Vec<QuizQuestion>, ApiError> {
        self.get(
            &format!("/api/v1/quiz/videos/{video_id}/questions/admin"),
            "Failed to fetch quiz questions",
        )
        .await
    }

    /// `POST /api/v1/quiz/questions` (Hub/Admin).
    pub async fn create_question(
        &self,
        data: &QuizQuestionCreate,
    ) -> Result<QuizQuestion, ApiError> {
        self.post("/api/v1/quiz/questions", data, "Failed to create question")
            .await
    }

    /// `PATCH /api/v1/quiz/questions/{id}` (Hub/Admin).
    pub async fn update_question(
        &self,
        question_id: &str,
        data: &QuizQuestionUpdate,
    ) -> Result<QuizQuestion, ApiError> {
        self.patch(
            &format!("/api/v1/quiz/questions/{question_id}"),
            data,
            "Failed to update question",
        )
        .await
    }

    /// `DELETE /api/v1/quiz/questions/{id}` (Hub/Admin).
    pub async fn delete_question(&self, question_id: &str) -> Result<(), ApiError> {
        self.delete(
            &format!("/api/v1/quiz/questions/{question_id}"),
            "Failed to delete question",
        )
        .await
    }

    /// `POST /api/v1/quiz/questions/{id}/options` (Hub/Admin).
    pub async fn add_option(
        &self,
        question_id: &str,
        data: &QuizOptionCreate,
    ) -> Result<QuizOption, ApiError> {
        self.post(
            &format!("/api/v1/quiz/questions/{question_id}/options"),
            data,
            "Failed to add option",
        )
        .await
    }

    /// `PATCH /api/v1/quiz/options/{id}` (Hub/Admin).
    pub async fn update_option(
        &self,
        option_id: &str,
        data: &QuizOptionUpdate,
    ) -> Result<QuizOption, ApiError> {
        self.patch(
            &format!("/api/v1/quiz/options/{option_id}"),
            data,
            "Failed to update option",
        )
        .await
    }

    /// `DELETE /api/v1/quiz/options/{id}` (Hub/Admin).
    pub async fn delete_option(&self, option_id: &str) -> Result<(), ApiError> {
        self.delete(
            &format!("/api/v1/quiz/options/{option_id}"),
            "Failed to delete option",
        )
        .await
    }

    /// `POST /api/v1/quiz/answers` - scoring happens server-side.
    pub async fn submit_answer(
        &self,
        answer: &QuizAnswerSubmit,
    ) -> Result<QuizAnswerFeedback, ApiError> {
        self.post("/api/v1/quiz/answers", answer, "Failed to submit answer")
            .await
    }

    /// `GET /api/v1/quiz/videos/{id}/results` - the pass verdict is the
    /// server's; the client only displays it.
    pub async fn quiz_results(&self, video_id: &str) -> Result<QuizResultSummary, ApiError> {
        self.get(
            &format!("/api/v1/quiz/videos/{video_id}/results"),
            "Failed to fetch quiz results",
        )
        .await
    }

    // ========================================================================
    // Meetings
    // ========================================================================

    /// `POST /api/v1/meetings`.
    pub async fn create_meeting(&self, data: &MeetingCreate) -> Result<Meeting, ApiError> {
        self.post("/api/v1/meetings", data, "Failed to create meeting")
            .await
    }

    /// `POST /api/v1/meetings/hub/create/{member_id}` (Hub).
    pub async fn create_meeting_as_hub(
        &self,
        member_id: &str,
        data: &MeetingCreate,
    ) -> Result<Meeting, ApiError> {
        self.post(
            &format!("/api/v1/meetings/hub/create/{member_id}"),
            data,
            "Failed to create meeting",
        )
        .await
    }

    /// `GET /api/v1/meetings/my-meetings`.
    pub async fn my_meetings(&self, include_cancelled: bool) -> Result<Vec<Meeting>, ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .get(self.url("/api/v1/meetings/my-meetings"))
            .query(&[("include_cancelled", include_cancelled)])
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(response, "Failed to fetch meetings").await
    }

    /// `DELETE /api/v1/meetings/my-meetings/{id}` - a member cancelling
    /// their own meeting, with a reason.
    pub async fn cancel_my_meeting(&self, meeting_id: &str, reason: &str) -> Result<(), ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .delete(self.url(&format!("/api/v1/meetings/my-meetings/{meeting_id}")))
            .bearer_auth(token)
            .json(&json!({ "cancellation_reason": reason }))
            .send()
            .await?;
        Self::check(response, "Failed to cancel meeting").await?;
        Ok(())
    }

    /// `GET /api/v1/meetings/all` (Hub/Admin) with optional filters.
    pub async fn all_meetings(
        &self,
        filters: &MeetingFilters,
    ) -> Result<Vec<MeetingWithMember>, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(status) = filters.status {
            query.push(("status_filter", status.as_str().to_string()));
        }
        if let Some(meeting_type) = filters.meeting_type {
            query.push(("meeting_type", meeting_type.as_str().to_string()));
        }
        if let Some(from) = filters.date_from {
            query.push(("date_from", from.to_rfc3339()));
        }
        if let Some(to) = filters.date_to {
            query.push(("date_to", to.to_rfc3339()));
        }

        let token = self.bearer().await?;
        let response = self
            .http
            .get(self.url("/api/v1/meetings/all"))
            .query(&query)
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(response, "Failed to fetch meetings").await
    }

    /// `GET /api/v1/meetings/stats` (Hub/Admin).
    pub async fn meeting_stats(&self) -> Result<MeetingStats, ApiError> {
        self.get("/api/v1/meetings/stats", "Failed to fetch meeting stats")
            .await
    }

    /// `POST /api/v1/meetings/{id}/confirm` (Hub).
    pub async fn confirm_meeting(
        &self,
        meeting_id: &str,
        confirmation: &MeetingConfirmation,
    ) -> Result<Meeting, ApiError> {
        self.post(
            &format!("/api/v1/meetings/{meeting_id}/confirm"),
            confirmation,
            "Failed to confirm meeting",
        )
        .await
    }

    /// `POST /api/v1/meetings/{id}/complete` (Hub).
    pub async fn complete_meeting(
        &self,
        meeting_id: &str,
        hub_notes: Option<&str>,
    ) -> Result<Meeting, ApiError> {
        self.post(
            &format!("/api/v1/meetings/{meeting_id}/complete"),
            &json!({ "hub_notes": hub_notes }),
            "Failed to complete meeting",
        )
        .await
    }

    /// `DELETE /api/v1/meetings/{id}/cancel` (Hub/Admin), with a reason.
    pub async fn cancel_meeting_admin(
        &self,
        meeting_id: &str,
        reason: &str,
    ) -> Result<(), ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .delete(self.url(&format!("/api/v1/meetings/{meeting_id}/cancel")))
            .bearer_auth(token)
            .json(&json!({ "cancellation_reason": reason }))
            .send()
            .await?;
        Self::check(response, "Failed to cancel meeting").await?;
        Ok(())
    }

    // ========================================================================
    // Collective meetings
    // ========================================================================

    /// `POST /api/v1/collective-meetings` (Hub/Admin).
    pub async fn create_collective_meeting(
        &self,
        data: &CollectiveMeetingCreate,
    ) -> Result<CollectiveMeeting, ApiError> {
        self.post(
            "/api/v1/collective-meetings",
            data,
            "Failed to create collective meeting",
        )
        .await
    }

    /// `GET /api/v1/collective-meetings`.
    pub async fn collective_meetings(
        &self,
        upcoming_only: bool,
    ) -> Result<Vec<CollectiveMeeting>, ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .get(self.url("/api/v1/collective-meetings"))
            .query(&[("upcoming_only", upcoming_only)])
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(response, "Failed to fetch collective meetings").await
    }

    /// `GET /api/v1/collective-meetings/{id}` - includes the attendee
    /// list.
    pub async fn collective_meeting(
        &self,
        meeting_id: &str,
    ) -> Result<CollectiveMeetingWithAttendees, ApiError> {
        self.get(
            &format!("/api/v1/collective-meetings/{meeting_id}"),
            "Failed to fetch collective meeting",
        )
        .await
    }

    /// `GET /api/v1/collective-meetings/stats` (Hub/Admin).
    pub async fn collective_meeting_stats(&self) -> Result<CollectiveMeetingStats, ApiError> {
        self.get(
            "/api/v1/collective-meetings/stats",
            "Failed to fetch meeting stats",
        )
        .await
    }

    /// `POST /api/v1/collective-meetings/{id}/confirm` - the caller
    /// confirming (or withdrawing) their own attendance.
    pub async fn confirm_attendance(
        &self,
        meeting_id: &str,
        confirmed: bool,
    ) -> Result<(), ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .post(self.url(&format!("/api/v1/collective-meetings/{meeting_id}/confirm")))
            .bearer_auth(token)
            .json(&json!({ "confirmed": confirmed }))
            .send()
            .await?;
        Self::check(response, "Failed to confirm attendance").await?;
        Ok(())
    }

    /// `POST /api/v1/collective-meetings/{id}/attendance` (Hub) - marks
    /// which members actually attended.
    pub async fn mark_attendance(
        &self,
        meeting_id: &str,
        member_ids: &[String],
    ) -> Result<CollectiveMeeting, ApiError> {
        self.post(
            &format!("/api/v1/collective-meetings/{meeting_id}/attendance"),
            &json!({ "member_ids": member_ids }),
            "Failed to mark attendance",
        )
        .await
    }

    /// `POST /api/v1/collective-meetings/{id}/complete` (Hub).
    pub async fn complete_collective_meeting(
        &self,
        meeting_id: &str,
        notes: Option<&str>,
    ) -> Result<CollectiveMeeting, ApiError> {
        self.post(
            &format!("/api/v1/collective-meetings/{meeting_id}/complete"),
            &json!({ "notes": notes }),
            "Failed to complete collective meeting",
        )
        .await
    }

    /// `DELETE /api/v1/collective-meetings/{id}/cancel` (Hub/Admin).
    pub async fn cancel_collective_meeting(&self, meeting_id: &str) -> Result<(), ApiError> {
        self.delete(
            &format!("/api/v1/collective-meetings/{meeting_id}/cancel"),
            "Failed to cancel meeting",
        )
        .await
    }

    // ========================================================================
    // Visits
    // ========================================================================

    /// `POST /api/v1/visits`.
    pub async fn create_visit(&self, data: &VisitCreate) -> Result<Visit, ApiError> {
        self.post("/api/v1/visits", data, "Failed to create visit")
            .await
    }

    /// `GET /api/v1/visits/my-visits` - visits made (`as_visitor`) or
    /// received, optionally filtered by status.
    pub async fn my_visits(
        &self,
        as_visitor: bool,
        status: Option<VisitStatus>,
    ) -> Result<Vec<Visit>, ApiError> {
        let mut query: Vec<(&str, String)> = vec![("as_visitor", as_visitor.to_string())];
        if let Some(status) = status {
            query.push(("status_filter", status.as_str().to_string()));
        }

        let token = self.bearer().await?;
        let response = self
            .http
            .get(self.url("/api/v1/visits/my-visits"))
            .query(&query)
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(response, "Failed to fetch visits").await
    }

    /// `GET /api/v1/visits/my-stats`.
    pub async fn my_visit_stats(&self) -> Result<VisitStats, ApiError> {
        self.get("/api/v1/visits/my-stats", "Failed to fetch visit stats")
            .await
    }

    /// `GET /api/v1/visits/{id}`.
    pub async fn get_visit(&self, visit_id: &str) -> Result<Visit, ApiError> {
        self.get(&format!("/api/v1/visits/{visit_id}"), "Failed to fetch visit")
            .await
    }

    /// `POST /api/v1/visits/{id}/complete` - records the visit outcomes.
    pub async fn complete_visit(
        &self,
        visit_id: &str,
        completion: &VisitComplete,
    ) -> Result<Visit, ApiError> {
        self.post(
            &format!("/api/v1/visits/{visit_id}/complete"),
            completion,
            "Failed to complete visit",
        )
        .await
    }

    /// `DELETE /api/v1/visits/{id}/cancel`.
    pub async fn cancel_visit(&self, visit_id: &str) -> Result<(), ApiError> {
        self.delete(
            &format!("/api/v1/visits/{visit_id}/cancel"),
            "Failed to cancel visit",
        )
        .await
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    /// `GET /api/v1/notifications/me`.
    pub async fn my_notifications(
        &self,
        unread_only: bool,
        limit: u32,
    ) -> Result<Vec<Notification>, ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .get(self.url("/api/v1/notifications/me"))
            .query(&[
                ("unread_only", unread_only.to_string()),
                ("limit", limit.to_string()),
            ])
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(response, "Failed to fetch notifications").await
    }

    /// `GET /api/v1/notifications/me/stats` - the bell widget's counters.
    pub async fn notification_stats(&self) -> Result<NotificationStats, ApiError> {
        self.get(
            "/api/v1/notifications/me/stats",
            "Failed to fetch notification stats",
        )
        .await
    }

    /// `PATCH /api/v1/notifications/{id}/read`.
    pub async fn mark_notification_read(
        &self,
        notification_id: &str,
    ) -> Result<Notification, ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .patch(self.url(&format!("/api/v1/notifications/{notification_id}/read")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(response, "Failed to mark notification as read").await
    }

    /// `POST /api/v1/notifications/me/read-all`.
    pub async fn mark_all_notifications_read(&self) -> Result<(), ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .post(self.url("/api/v1/notifications/me/read-all"))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check(response, "Failed to mark all notifications as read").await?;
        Ok(())
    }

    /// `DELETE /api/v1/notifications/{id}`.
    pub async fn delete_notification(&self, notification_id: &str) -> Result<(), ApiError> {
        self.delete(
            &format!("/api/v1/notifications/{notification_id}"),
            "Failed to delete notification",
        )
        .await
    }

    // ========================================================================
    // Extended profile
    // ========================================================================

    /// `GET /api/v1/profile/completion`.
    pub async fn profile_completion(&self) -> Result<ProfileCompletion, ApiError> {
        self.get(
            "/api/v1/profile/completion",
            "Failed to fetch profile completion",
        )
        .await
    }

    /// `PATCH /api/v1/profile/update`.
    pub async fn update_profile(&self, data: &ProfileUpdate) -> Result<ProfileUpdated, ApiError> {
        self.patch("/api/v1/profile/update", data, "Failed to update profile")
            .await
    }

    /// `POST /api/v1/profile/photo` - multipart upload, single field
    /// named `file`.
    pub async fn upload_profile_photo(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ProfilePhotoUploaded, ApiError> {
        let token = self.bearer().await?;
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.url("/api/v1/profile/photo"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        Self::decode(response, "Failed to upload profile photo").await
    }

    /// `DELETE /api/v1/profile/photo`.
    pub async fn delete_profile_photo(&self) -> Result<ProfileUpdated, ApiError> {
        let token = self.bearer().await?;
        let response = self
            .http
            .delete(self.url("/api/v1/profile/photo"))
            .bearer_auth(token)
            .send()
            .await?;
        Self::decode(response, "Failed to delete profile photo").await
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// `GET /health` - the backend's own health payload, passed through
    /// by the frontend health endpoint.
    pub async fn backend_health(&self) -> Result<serde_json::Value, ApiError> {
        let response = self.http.get(self.url("/health")).send().await?;
        Self::decode(response, "Backend unhealthy").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;

    fn api() -> UnionApi {
        let config = BackendConfig {
            base_url: "http://localhost:8000/".to_string(),
            ..Default::default()
        };
        UnionApi::new(&config, Arc::new(InMemorySessionStore::new()))
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = api();
        assert_eq!(
            api.url("/api/v1/auth/me"),
            "http://localhost:8000/api/v1/auth/me"
        );
    }

    #[test]
    fn relative_resource_url_resolves_against_base() {
        let api = api();
        assert_eq!(
            api.resource_url("/uploads/proof/abc.png"),
            "http://localhost:8000/uploads/proof/abc.png"
        );
    }

    #[test]
    fn absolute_resource_url_passes_through() {
        let api = api();
        assert_eq!(
            api.resource_url("https://cdn.example.com/x.png"),
            "https://cdn.example.com/x.png"
        );
    }

    #[tokio::test]
    async fn missing_token_short_circuits_as_unauthorized() {
        let api = api();
        let err = api.bearer().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Not authenticated");
    }
}
