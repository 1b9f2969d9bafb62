//! # Application Orchestrator
//!
//! [`App`] ties the session, the router and the backend together. User actions
//! (login, logout, navigation, API calls) go through it, and events raised by
//! the request layer are applied to it in [`App::on_tick`].
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  App (orchestrator)                                  │
//! │  - login() / logout() / navigate() / call()          │
//! │  - on_tick() drains AppEvent                         │
//! └───────┬──────────────────────────────┬───────────────┘
//!         │                              │
//! ┌───────▼──────────┐          ┌────────▼─────────────┐
//! │  Router + guard  │          │  ApiService          │
//! │  (reads Session) │          │  (ApiClient: bearer  │
//! └───────┬──────────┘          │   + interceptor)     │
//!         │                     └────────┬─────────────┘
//!         │     Session (Arc<RwLock>)    │
//!         └──────────────┬───────────────┘
//!                        │ SessionStore (file / memory)
//!                        ▼
//!          async_channel (unbounded) ─► AppEvent ─► on_tick()
//! ```
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use dashboard::app::{App, AppConfig};
//!
//! # async fn run() -> dashboard::core::Result<()> {
//! let mut app = App::new(AppConfig::from_env())?;
//! let home = app.login("director".into(), "secret".into()).await?;
//! println!("signed in, now at {}", home.path);
//!
//! let courses = app.call(|api| async move { api.get_courses().await }).await?;
//! for notice in app.take_notices() {
//!     eprintln!("{}", notice);
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod event_handler;
mod events;
mod guard;
pub mod handlers;
mod router;
mod state;
pub mod storage;

pub use config::{AppConfig, DEFAULT_SESSION_FILE};
pub use events::{AppEvent, Notice};
pub use guard::{evaluate as evaluate_guard, GuardDecision};
pub use router::{
    dashboard_path, default_routes, normalize_path, Navigation, RouteMeta, RoutePattern,
    RouteRecord, RouteTarget, Router, View, ACADEMIC_DASHBOARD_PATH, LOGIN_PATH, MAX_REDIRECTS,
    WELLBEING_DASHBOARD_PATH,
};
pub use state::{Session, SessionState};
pub use storage::{FileStore, MemoryStore, SessionStore};

use std::future::Future;
use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};

use crate::core::{ApiService, Result};
use crate::services::api::{ApiClient, ApiError};

/// Main application orchestrator.
///
/// Owns the router and the receiving end of the event channel. The session is
/// shared with the API client, so a 401 seen by the client is visible to the
/// router's next guard check before `on_tick` even runs.
pub struct App {
    session: Session,
    router: Router,
    api: Arc<dyn ApiService>,
    /// Receives events from the API client and the router. Polled in
    /// `on_tick()` with `try_recv()`.
    event_rx: Receiver<AppEvent>,
    /// Notices not yet collected by the host.
    notices: Vec<Notice>,
}

impl App {
    /// Create an application backed by the file session store and a real
    /// [`ApiClient`].
    ///
    /// A previously persisted session is restored, so a user who signed in
    /// earlier is still signed in.
    pub fn new(config: AppConfig) -> Result<Self> {
        let session = Session::load(Arc::new(FileStore::new(config.session_file)))?;
        let (event_tx, event_rx) = unbounded();
        let client = ApiClient::new(config.api, session.clone(), event_tx.clone())?;

        Ok(Self::from_parts(session, Arc::new(client), event_tx, event_rx))
    }

    /// Assemble an application from explicit parts. `event_tx` must feed
    /// `event_rx`; it is handed to the router.
    pub fn from_parts(
        session: Session,
        api: Arc<dyn ApiService>,
        event_tx: Sender<AppEvent>,
        event_rx: Receiver<AppEvent>,
    ) -> Self {
        let router = Router::new(session.clone(), event_tx);
        Self {
            session,
            router,
            api,
            event_rx,
            notices: Vec::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn api(&self) -> Arc<dyn ApiService> {
        self.api.clone()
    }

    /// Where the user currently is, once anything has been navigated to.
    pub fn current(&self) -> Option<&Navigation> {
        self.router.current()
    }

    /// Process all pending events. Non-blocking.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Apply a single event.
    pub fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Notices raised since the last call, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Sign in and navigate to the role's dashboard.
    pub async fn login(&mut self, username: String, password: String) -> Result<Navigation> {
        let result = handlers::auth::handle_login(
            self.api.as_ref(),
            &self.session,
            &mut self.router,
            username,
            password,
        )
        .await;
        self.on_tick();
        result
    }

    pub fn logout(&mut self) -> Result<Navigation> {
        let result = handlers::auth::handle_logout(&self.session, &mut self.router);
        self.on_tick();
        result
    }

    pub fn navigate(&mut self, path: &str) -> Result<Navigation> {
        let result = handlers::navigation::handle_navigate(&mut self.router, path);
        self.on_tick();
        result
    }

    /// Run one backend call and apply whatever events it raised.
    ///
    /// A 401 therefore leaves the app on the login view by the time this
    /// returns.
    pub async fn call<T, F, Fut>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(Arc<dyn ApiService>) -> Fut,
        Fut: Future<Output = std::result::Result<T, ApiError>>,
    {
        let result = f(self.api.clone()).await;
        self.on_tick();
        Ok(result?)
    }
}
