//! # Common Error Types
//!
//! Consolidated error handling for the dashboard client.
//!
//! [`AppError`] covers everything above a single HTTP call: session
//! persistence, navigation, configuration and local IO. Backend failures keep
//! their own taxonomy in [`ApiError`] and are wrapped unchanged.
//!
//! ## Error Categories
//!
//! - **Api**: a backend call failed (see [`ApiError`])
//! - **Session**: the persisted session could not be read or written
//! - **Navigation**: the router could not settle on a view
//! - **Config**: invalid configuration
//! - **Io**: local file access (CSV uploads, session file)
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use dashboard::core::error::{AppError, Result};
//!
//! fn week_number(raw: &str) -> Result<u32> {
//!     raw.parse()
//!         .map_err(|_| AppError::Config(format!("invalid week number: {}", raw)))
//! }
//! ```
//!
//! ## Error Conversion
//!
//! - `ApiError` → `AppError::Api`
//! - `std::io::Error` → `AppError::Io`

use thiserror::Error;

use crate::services::api::ApiError;

/// Application-wide error type.
///
/// # Example
///
/// ```rust
/// use dashboard::core::error::AppError;
/// use dashboard::services::api::ApiError;
///
/// let err: AppError = ApiError::Forbidden.into();
/// assert!(!err.is_unauthorized());
///
/// let err = AppError::Navigation("too many redirects".to_string());
/// assert_eq!(err.to_string(), "Navigation error: too many redirects");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend call failed.
    ///
    /// The response interceptor has already run by the time this is seen, so
    /// a 401 here means the session is gone.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Session persistence error.
    ///
    /// Used when the session file exists but cannot be parsed, or when
    /// writing it fails.
    #[error("Session error: {0}")]
    Session(String),

    /// The router could not resolve a path to a view (no matching route or a
    /// redirect loop).
    #[error("Navigation error: {0}")]
    Navigation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Whether the error means the user must sign in again.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Api(err) if err.is_unauthorized())
    }
}

/// Convenience type alias for `Result<T, AppError>`.
///
/// ```rust
/// use dashboard::core::error::Result;
///
/// fn operation() -> Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, AppError>;
