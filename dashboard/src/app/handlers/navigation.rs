//! # Navigation Handlers

use crate::app::router::{Navigation, Router, LOGIN_PATH};
use crate::core::Result;

/// Navigate to a user-supplied path.
///
/// Internal handler function - use [`crate::app::App::navigate`] instead.
pub(crate) fn handle_navigate(router: &mut Router, path: &str) -> Result<Navigation> {
    tracing::debug!(path, "Navigation requested");
    router.navigate(path)
}

/// The backend rejected the token. The interceptor has already cleared the
/// session, so navigating to `/login` lands on the login view.
///
/// Internal handler function - use [`crate::app::App::handle_event`] instead.
pub(crate) fn handle_session_invalidated(router: &mut Router) -> Result<Navigation> {
    tracing::info!("Session invalidated, returning to login");
    router.navigate(LOGIN_PATH)
}
