//! Response shapes for the health endpoint.

use serde::Serialize;

/// Envelope returned by `GET /api/health`.
///
/// `backend` is either the backend's own health payload (passed through
/// verbatim) or the literal string `"unhealthy"` / `"unreachable"`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub frontend: &'static str,
    pub backend: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthResponse {
    /// Backend reachable and healthy; its payload is passed through.
    pub fn healthy(backend: serde_json::Value) -> Self {
        Self {
            frontend: "healthy",
            backend,
            error: None,
        }
    }

    /// Backend responded with a non-success status.
    pub fn unhealthy() -> Self {
        Self {
            frontend: "healthy",
            backend: serde_json::Value::String("unhealthy".to_string()),
            error: None,
        }
    }

    /// Backend could not be reached at all.
    pub fn unreachable(error: String) -> Self {
        Self {
            frontend: "healthy",
            backend: serde_json::Value::String("unreachable".to_string()),
            error: Some(error),
        }
    }
}
