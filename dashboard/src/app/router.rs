//! # Client-Side Router
//!
//! Static route table plus the navigation loop. Redirect-only records (`/` and
//! the catch-all) are followed before the guard runs; every view record goes
//! through [`guard::evaluate`](crate::app::guard::evaluate), and guard
//! redirects re-enter the loop for the new target.

use async_channel::Sender;
use shared::Role;

use crate::app::events::{AppEvent, Notice};
use crate::app::guard::{self, GuardDecision};
use crate::app::state::Session;
use crate::core::{AppError, Result};

pub const LOGIN_PATH: &str = "/login";
pub const ACADEMIC_DASHBOARD_PATH: &str = "/academic/dashboard";
pub const WELLBEING_DASHBOARD_PATH: &str = "/wellbeing/dashboard";

/// Upper bound on redirects followed by a single navigation.
pub const MAX_REDIRECTS: usize = 10;

/// Dashboard a role lands on after login.
pub fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::CourseDirector => ACADEMIC_DASHBOARD_PATH,
        Role::WellbeingOfficer => WELLBEING_DASHBOARD_PATH,
    }
}

/// Views the router can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    AcademicDashboard,
    WellbeingDashboard,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Login => "Login",
            View::AcademicDashboard => "Academic Dashboard",
            View::WellbeingDashboard => "Wellbeing Dashboard",
        }
    }
}

/// Access requirements of a route.
///
/// A role constraint always implies authentication; the constructors are the
/// only way to build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMeta {
    requires_auth: bool,
    role: Option<Role>,
}

impl RouteMeta {
    pub const fn public() -> Self {
        Self {
            requires_auth: false,
            role: None,
        }
    }

    pub const fn authenticated() -> Self {
        Self {
            requires_auth: true,
            role: None,
        }
    }

    pub const fn role_gated(role: Role) -> Self {
        Self {
            requires_auth: true,
            role: Some(role),
        }
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePattern {
    Exact(&'static str),
    /// Matches any path no other record matched.
    CatchAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    View(View),
    Redirect(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRecord {
    pub pattern: RoutePattern,
    pub target: RouteTarget,
    pub meta: RouteMeta,
}

/// The dashboard's route table.
pub fn default_routes() -> Vec<RouteRecord> {
    vec![
        RouteRecord {
            pattern: RoutePattern::Exact("/"),
            target: RouteTarget::Redirect(LOGIN_PATH),
            meta: RouteMeta::public(),
        },
        RouteRecord {
            pattern: RoutePattern::Exact(LOGIN_PATH),
            target: RouteTarget::View(View::Login),
            meta: RouteMeta::public(),
        },
        RouteRecord {
            pattern: RoutePattern::Exact(ACADEMIC_DASHBOARD_PATH),
            target: RouteTarget::View(View::AcademicDashboard),
            meta: RouteMeta::role_gated(Role::CourseDirector),
        },
        RouteRecord {
            pattern: RoutePattern::Exact(WELLBEING_DASHBOARD_PATH),
            target: RouteTarget::View(View::WellbeingDashboard),
            meta: RouteMeta::role_gated(Role::WellbeingOfficer),
        },
        RouteRecord {
            pattern: RoutePattern::CatchAll,
            target: RouteTarget::Redirect(LOGIN_PATH),
            meta: RouteMeta::public(),
        },
    ]
}

/// Strip query and fragment, and any trailing slash except on the root.
pub fn normalize_path(path: &str) -> String {
    let path = path
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Result of a completed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Path the caller asked for, as given.
    pub requested: String,
    /// Path of the view finally selected.
    pub path: String,
    pub view: View,
    /// Intermediate paths that redirected, in order.
    pub redirects: Vec<String>,
}

impl Navigation {
    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }
}

/// Route table, session and the current location.
pub struct Router {
    routes: Vec<RouteRecord>,
    session: Session,
    events: Sender<AppEvent>,
    current: Option<Navigation>,
}

impl Router {
    pub fn new(session: Session, events: Sender<AppEvent>) -> Self {
        Self::with_routes(default_routes(), session, events)
    }

    pub fn with_routes(routes: Vec<RouteRecord>, session: Session, events: Sender<AppEvent>) -> Self {
        Self {
            routes,
            session,
            events,
            current: None,
        }
    }

    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    pub fn current(&self) -> Option<&Navigation> {
        self.current.as_ref()
    }

    /// Route record for `path`. Exact matches win over the catch-all.
    pub fn match_route(&self, path: &str) -> Option<&RouteRecord> {
        let path = normalize_path(path);
        self.routes
            .iter()
            .find(|r| matches!(r.pattern, RoutePattern::Exact(p) if p == path))
            .or_else(|| {
                self.routes
                    .iter()
                    .find(|r| r.pattern == RoutePattern::CatchAll)
            })
    }

    /// Navigate to `path`, following record and guard redirects.
    ///
    /// On success the router's current location is updated. Denials emit
    /// [`Notice::AccessDenied`] before redirecting.
    pub fn navigate(&mut self, path: &str) -> Result<Navigation> {
        let requested = path.to_string();
        let mut target = normalize_path(path);
        let mut redirects = Vec::new();

        loop {
            if redirects.len() > MAX_REDIRECTS {
                tracing::error!(requested = %requested, chain = ?redirects, "Redirect loop");
                return Err(AppError::Navigation(format!(
                    "too many redirects navigating to {}",
                    requested
                )));
            }

            let record = *self
                .match_route(&target)
                .ok_or_else(|| AppError::Navigation(format!("no route matches {}", target)))?;

            let view = match record.target {
                RouteTarget::Redirect(to) => {
                    redirects.push(std::mem::replace(&mut target, to.to_string()));
                    continue;
                }
                RouteTarget::View(view) => view,
            };

            let session = self.session.snapshot();
            match guard::evaluate(&target, &record.meta, &session) {
                GuardDecision::Allow => {
                    let navigation = Navigation {
                        requested,
                        path: target,
                        view,
                        redirects,
                    };
                    tracing::info!(
                        path = %navigation.path,
                        view = view.title(),
                        redirected = navigation.was_redirected(),
                        "Navigation complete"
                    );
                    self.current = Some(navigation.clone());
                    return Ok(navigation);
                }
                GuardDecision::Redirect(to) => {
                    tracing::debug!(from = %target, to, "Guard redirect");
                    redirects.push(std::mem::replace(&mut target, to.to_string()));
                }
                GuardDecision::Denied { redirect } => {
                    tracing::warn!(
                        path = %target,
                        role = ?session.role_id(),
                        "Access denied: role does not match route"
                    );
                    if self.events.try_send(AppEvent::Notice(Notice::AccessDenied)).is_err() {
                        tracing::debug!("Event receiver dropped, notice discarded");
                    }
                    redirects.push(std::mem::replace(&mut target, redirect.to_string()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::SessionState;
    use async_channel::{unbounded, Receiver};

    fn router_with(token: Option<&str>, role: Option<&str>) -> (Router, Receiver<AppEvent>) {
        let session = Session::in_memory();
        session
            .replace(SessionState {
                token: token.map(str::to_string),
                role: role.map(str::to_string),
                username: None,
            })
            .unwrap();
        let (tx, rx) = unbounded();
        (Router::new(session, tx), rx)
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/login/"), "/login");
        assert_eq!(normalize_path("/login?next=/x#top"), "/login");
        assert_eq!(normalize_path("login"), "/login");
    }

    #[test]
    fn test_role_routes_require_auth() {
        for record in default_routes() {
            if record.meta.role().is_some() {
                assert!(record.meta.requires_auth());
            }
        }
    }

    #[test]
    fn test_root_redirects_to_login() {
        let (mut router, _rx) = router_with(None, None);
        let nav = router.navigate("/").unwrap();

        assert_eq!(nav.path, LOGIN_PATH);
        assert_eq!(nav.view, View::Login);
        assert_eq!(nav.redirects, vec!["/".to_string()]);
    }

    #[test]
    fn test_unknown_paths_resolve_to_login() {
        for path in ["/nope", "/academic", "/wellbeing/dashboard/extra", "/a/b/c"] {
            let (mut router, _rx) = router_with(None, None);
            assert_eq!(router.navigate(path).unwrap().path, LOGIN_PATH, "{}", path);
        }
    }

    #[test]
    fn test_unknown_path_with_session_lands_on_dashboard() {
        let (mut router, _rx) = router_with(Some("t"), Some("course_director"));
        let nav = router.navigate("/missing").unwrap();

        assert_eq!(nav.path, ACADEMIC_DASHBOARD_PATH);
        assert_eq!(nav.redirects, vec!["/missing".to_string(), LOGIN_PATH.to_string()]);
    }

    #[test]
    fn test_dashboard_without_token_redirects_to_login() {
        let (mut router, rx) = router_with(None, Some("course_director"));
        let nav = router.navigate(ACADEMIC_DASHBOARD_PATH).unwrap();

        assert_eq!(nav.view, View::Login);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_matching_role_reaches_dashboard() {
        let (mut router, rx) = router_with(Some("t"), Some("wellbeing_officer"));
        let nav = router.navigate(WELLBEING_DASHBOARD_PATH).unwrap();

        assert_eq!(nav.view, View::WellbeingDashboard);
        assert!(!nav.was_redirected());
        assert_eq!(router.current(), Some(&nav));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_role_mismatch_denies_and_goes_through_login() {
        let (mut router, rx) = router_with(Some("t"), Some("wellbeing_officer"));
        let nav = router.navigate(ACADEMIC_DASHBOARD_PATH).unwrap();

        // Denied to /login, which then forwards a signed-in officer home.
        assert_eq!(
            nav.redirects,
            vec![ACADEMIC_DASHBOARD_PATH.to_string(), LOGIN_PATH.to_string()]
        );
        assert_eq!(nav.view, View::WellbeingDashboard);
        assert_eq!(rx.try_recv().unwrap(), AppEvent::Notice(Notice::AccessDenied));
    }

    #[test]
    fn test_unrecognized_role_denied_stays_on_login() {
        let (mut router, rx) = router_with(Some("t"), Some("registrar"));
        let nav = router.navigate(WELLBEING_DASHBOARD_PATH).unwrap();

        assert_eq!(nav.view, View::Login);
        assert_eq!(rx.try_recv().unwrap(), AppEvent::Notice(Notice::AccessDenied));
    }

    #[test]
    fn test_login_with_session_forwards_by_role() {
        let (mut router, _rx) = router_with(Some("t"), Some("course_director"));
        assert_eq!(router.navigate(LOGIN_PATH).unwrap().path, ACADEMIC_DASHBOARD_PATH);

        let (mut router, _rx) = router_with(Some("t"), Some("wellbeing_officer"));
        assert_eq!(router.navigate(LOGIN_PATH).unwrap().path, WELLBEING_DASHBOARD_PATH);

        let (mut router, _rx) = router_with(Some("t"), None);
        assert_eq!(router.navigate(LOGIN_PATH).unwrap().path, LOGIN_PATH);
    }

    #[test]
    fn test_guard_sees_session_changes() {
        let (mut router, _rx) = router_with(Some("t"), Some("course_director"));
        assert_eq!(router.navigate(ACADEMIC_DASHBOARD_PATH).unwrap().view, View::AcademicDashboard);

        router.session.clear().unwrap();
        assert_eq!(router.navigate(ACADEMIC_DASHBOARD_PATH).unwrap().view, View::Login);
    }

    #[test]
    fn test_redirect_loop_is_an_error() {
        let routes = vec![
            RouteRecord {
                pattern: RoutePattern::Exact("/a"),
                target: RouteTarget::Redirect("/b"),
                meta: RouteMeta::public(),
            },
            RouteRecord {
                pattern: RoutePattern::Exact("/b"),
                target: RouteTarget::Redirect("/a"),
                meta: RouteMeta::public(),
            },
        ];
        let (tx, _rx) = unbounded();
        let mut router = Router::with_routes(routes, Session::in_memory(), tx);

        assert!(matches!(router.navigate("/a"), Err(AppError::Navigation(_))));
        assert!(router.current().is_none());
    }

    #[test]
    fn test_no_matching_route_is_an_error() {
        let routes = vec![RouteRecord {
            pattern: RoutePattern::Exact("/only"),
            target: RouteTarget::View(View::Login),
            meta: RouteMeta::public(),
        }];
        let (tx, _rx) = unbounded();
        let mut router = Router::with_routes(routes, Session::in_memory(), tx);

        assert!(matches!(router.navigate("/other"), Err(AppError::Navigation(_))));
    }
}
