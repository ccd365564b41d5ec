//! HTTP handler for the frontend health endpoint.
//!
//! The frontend reports itself healthy whenever it can answer at all;
//! the response status reflects the backend: 200 when the backend health
//! check passes, 503 when it fails or the backend is unreachable.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::backend::{ApiError, UnionApi};

use super::dto::HealthResponse;

/// Shared state for the health routes.
#[derive(Clone)]
pub struct HealthAppState {
    pub api: Arc<UnionApi>,
}

/// `GET /api/health`
pub async fn get_health(State(state): State<HealthAppState>) -> impl IntoResponse {
    match state.api.backend_health().await {
        Ok(payload) => (StatusCode::OK, Json(HealthResponse::healthy(payload))),
        Err(ApiError::Transport(e)) => {
            tracing::warn!(error = %e, "backend unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::unreachable(e.to_string())),
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "backend health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::unhealthy()),
            )
        }
    }
}
