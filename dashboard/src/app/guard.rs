//! # Navigation Guard
//!
//! Runs before every navigation and decides, from the target route and the
//! session alone, whether to allow it or send the user elsewhere:
//!
//! 1. Auth required, no token: redirect to `/login`.
//! 2. Auth required, route role differs from the stored role: deny, then
//!    redirect to `/login`.
//! 3. Auth required otherwise: allow.
//! 4. Target is `/login` with a token: redirect to the role's dashboard
//!    (unrecognized roles stay on `/login`).
//! 5. Anything else: allow.

use crate::app::router::{dashboard_path, RouteMeta, LOGIN_PATH};
use crate::app::state::SessionState;

/// Guard outcome for one navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
    /// Role mismatch. There is no dedicated forbidden view; the user is sent to
    /// `redirect` after being told access was denied.
    Denied { redirect: &'static str },
}

/// Decide whether navigation to `path` (with `meta`) may proceed.
pub fn evaluate(path: &str, meta: &RouteMeta, session: &SessionState) -> GuardDecision {
    if meta.requires_auth() {
        if !session.has_token() {
            return GuardDecision::Redirect(LOGIN_PATH);
        }
        if let Some(required) = meta.role() {
            if session.role_id() != Some(required.as_str()) {
                return GuardDecision::Denied {
                    redirect: LOGIN_PATH,
                };
            }
        }
        return GuardDecision::Allow;
    }

    if path == LOGIN_PATH && session.has_token() {
        return match session.role() {
            Some(role) => GuardDecision::Redirect(dashboard_path(role)),
            None => GuardDecision::Allow,
        };
    }

    GuardDecision::Allow
}
