//! API client errors.
//!
//! Non-2xx responses are normalized so that the error's display text is
//! exactly what a page would show the user: the backend's `detail` string
//! when the body carries one, the operation's fallback message otherwise.

use thiserror::Error;

/// Errors produced by the backend API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the request with 401.
    ///
    /// Kept separate from [`ApiError::Status`] so the route guard's
    /// interceptor can clear the session; everywhere else it reads as a
    /// displayable message like any other rejection.
    #[error("{0}")]
    Unauthorized(String),

    /// Any other non-2xx response.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never completed (DNS, connect, timeout, ...).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body did not match the declared type.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the session should be treated as expired.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_the_message_only() {
        let err = ApiError::Status {
            status: 409,
            message: "Email already registered".to_string(),
        };
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn unauthorized_displays_like_any_rejection() {
        let err = ApiError::Unauthorized("Could not validate credentials".to_string());
        assert_eq!(err.to_string(), "Could not validate credentials");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn other_variants_are_not_unauthorized() {
        let err = ApiError::Status {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert!(!err.is_unauthorized());
    }
}
