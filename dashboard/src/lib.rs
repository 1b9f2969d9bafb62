//! # Student Analytics Dashboard - Library Root
//!
//! Client for the student analytics backend. Course directors see course
//! analytics and academic alerts; wellbeing officers see survey trends and
//! at-risk students. The `dashboard` binary (`main.rs`) drives it from the
//! command line.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              dashboard (this crate)                    │
//! ├────────────────────────────────────────────────────────┤
//! │  app       - orchestrator, session, router + guard     │
//! │  services  - HTTP client, interceptor, endpoints       │
//! │  core      - errors, ApiService trait                  │
//! │  debug     - logging                                   │
//! │  cli       - command line front end                    │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (bearer token)
//!          ▼
//! ┌─────────────────────────┐
//! │  Analytics backend      │
//! │  /auth /academic        │
//! │  /wellbeing             │
//! └─────────────────────────┘
//! ```
//!
//! ## Core Concepts
//!
//! ### Session
//!
//! One [`Session`](app::Session) value (token, role, username) is shared by
//! the API client, which reads the token for every request, and the router,
//! whose guard decides access from it. It is persisted through a
//! [`SessionStore`](app::SessionStore).
//!
//! ### Failure Policy
//!
//! Every response passes through the
//! [`ResponseInterceptor`](services::api::ResponseInterceptor). A 401 clears
//! the session and raises [`AppEvent::SessionInvalidated`]; a 403 or a
//! missing response raises a user notice. The error still reaches the caller.
//!
//! ### Routing
//!
//! | Path                   | Access                        |
//! |------------------------|-------------------------------|
//! | `/`                    | redirect to `/login`          |
//! | `/login`               | public                        |
//! | `/academic/dashboard`  | `course_director`             |
//! | `/wellbeing/dashboard` | `wellbeing_officer`           |
//! | anything else          | redirect to `/login`          |
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p dashboard
//! ```

pub mod app;
pub mod cli;
pub mod core;
pub mod debug;
pub mod services;

pub use app::{App, AppConfig, AppEvent, Notice, Session, SessionState, View};
pub use core::{AppError, Result};
