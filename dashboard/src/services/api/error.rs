//! # API Errors
//!
//! Failure taxonomy for backend calls. Every non-2xx status and every transport
//! failure becomes one of these after the response interceptor has run its
//! side effects.

use reqwest::StatusCode;
use thiserror::Error;

/// Error returned by every backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401: the token is missing, invalid or expired. The session has already
    /// been cleared when a caller sees this.
    #[error("Authentication required: session is invalid or expired")]
    Unauthorized,

    /// 403: the signed-in role may not access the resource.
    #[error("Access forbidden: you do not have permission to view this resource")]
    Forbidden,

    /// 404
    #[error("Resource not found")]
    NotFound,

    /// 500
    #[error("Server error")]
    Server,

    /// Any other non-2xx status.
    #[error("Unexpected response status: {0}")]
    Status(StatusCode),

    /// No response was received (connection refused, DNS, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx response whose body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The request could not be built.
    #[error("Invalid request: {0}")]
    Request(String),
}

impl ApiError {
    /// Map a non-success status onto the taxonomy. Returns `None` for 2xx.
    pub fn from_status(status: StatusCode) -> Option<ApiError> {
        if status.is_success() {
            return None;
        }
        Some(match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::NOT_FOUND => ApiError::NotFound,
            StatusCode::INTERNAL_SERVER_ERROR => ApiError::Server,
            other => ApiError::Status(other),
        })
    }

    /// HTTP status of the response that caused this error, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Unauthorized => Some(StatusCode::UNAUTHORIZED),
            ApiError::Forbidden => Some(StatusCode::FORBIDDEN),
            ApiError::NotFound => Some(StatusCode::NOT_FOUND),
            ApiError::Server => Some(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::Status(status) => Some(*status),
            ApiError::Network(_) | ApiError::Decode(_) | ApiError::Request(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
