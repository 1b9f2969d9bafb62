//! # Authentication Handlers
//!
//! Login and logout. Both finish by navigating to `/login` and letting the
//! guard decide where the user ends up.

use crate::app::router::{Navigation, Router, LOGIN_PATH};
use crate::app::state::Session;
use crate::core::{ApiService, Result};

/// Exchange credentials for a token, store it and route to the role's home.
///
/// Internal handler function - use [`crate::app::App::login`] instead.
pub(crate) async fn handle_login(
    api: &dyn ApiService,
    session: &Session,
    router: &mut Router,
    username: String,
    password: String,
) -> Result<Navigation> {
    let response = api.login(username, password).await?;
    session.sign_in(&response)?;
    router.navigate(LOGIN_PATH)
}

/// Forget the session and return to the login view.
///
/// Internal handler function - use [`crate::app::App::logout`] instead.
pub(crate) fn handle_logout(session: &Session, router: &mut Router) -> Result<Navigation> {
    session.clear()?;
    tracing::info!("Signed out");
    router.navigate(LOGIN_PATH)
}
