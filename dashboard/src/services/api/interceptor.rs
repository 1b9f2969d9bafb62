//! # Response Interceptor
//!
//! Global failure policy applied to every backend response before it reaches
//! the caller:
//!
//! | Status            | Side effect                                   |
//! |-------------------|-----------------------------------------------|
//! | 2xx               | none, response passes through                 |
//! | 401               | clear session, emit `SessionInvalidated`       |
//! | 403               | emit `Notice::ResourceForbidden`               |
//! | 404, 500, other   | log only                                      |
//! | no response       | emit `Notice::ServerUnreachable`               |
//! | body cut short    | emit `Notice::ServerUnreachable`               |
//!
//! Every failure is still returned to the caller after the side effects run.

use async_channel::Sender;
use reqwest::{Response, StatusCode};

use super::error::ApiError;
use crate::app::{AppEvent, Notice, Session};

/// Applies the failure policy. Cheap to clone; shares the session and the
/// event channel with the rest of the application.
#[derive(Clone)]
pub struct ResponseInterceptor {
    session: Session,
    events: Sender<AppEvent>,
}

impl ResponseInterceptor {
    pub fn new(session: Session, events: Sender<AppEvent>) -> Self {
        Self { session, events }
    }

    /// Inspect the outcome of a dispatched request.
    pub fn on_response(
        &self,
        outcome: Result<Response, reqwest::Error>,
    ) -> Result<Response, ApiError> {
        match outcome {
            Ok(response) => match ApiError::from_status(response.status()) {
                None => Ok(response),
                Some(err) => Err(self.reject(err)),
            },
            Err(err) => Err(self.reject(ApiError::Network(err.to_string()))),
        }
    }

    /// Run the side effects for `err` and hand it back for propagation.
    pub fn reject(&self, err: ApiError) -> ApiError {
        match &err {
            ApiError::Unauthorized => {
                tracing::warn!("Token expired or invalid, clearing session");
                if let Err(e) = self.session.clear() {
                    tracing::error!(error = %e, "Failed to clear persisted session");
                }
                self.emit(AppEvent::SessionInvalidated);
            }
            ApiError::Forbidden => {
                tracing::error!("Access forbidden for current role");
                self.emit(AppEvent::Notice(Notice::ResourceForbidden));
            }
            ApiError::NotFound => tracing::error!("Resource not found"),
            ApiError::Server => tracing::error!("Server error"),
            ApiError::Status(status) => {
                tracing::error!(status = status.as_u16(), "Request failed")
            }
            ApiError::Network(reason) => {
                tracing::error!(error = %reason, "Network error, backend unreachable");
                self.emit(AppEvent::Notice(Notice::ServerUnreachable));
            }
            ApiError::Decode(reason) => {
                tracing::error!(error = %reason, "Response body did not match the expected shape")
            }
            ApiError::Request(reason) => tracing::error!(error = %reason, "Invalid request"),
        }
        err
    }

    #[cfg(test)]
    fn on_status(&self, status: StatusCode) -> Result<(), ApiError> {
        match ApiError::from_status(status) {
            None => Ok(()),
            Some(err) => Err(self.reject(err)),
        }
    }

    fn emit(&self, event: AppEvent) {
        // Unbounded channel: only fails once the orchestrator is gone.
        if self.events.try_send(event).is_err() {
            tracing::debug!("Event receiver dropped, event discarded");
        }
    }
}
