//! # Services Module
//!
//! External integrations. The only external system is the analytics backend.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 dashboard                    │
//! │                                              │
//! │   App ──► ApiService (trait) ──► ApiClient   │
//! │                                    │         │
//! │              Session ◄── interceptor         │
//! └────────────────────────────────────┼─────────┘
//!                                      │ HTTP (JSON / form / multipart)
//!                                      ▼
//!                        ┌──────────────────────────┐
//!                        │  Analytics backend       │
//!                        │  /auth/token             │
//!                        │  /academic/*             │
//!                        │  /wellbeing/*            │
//!                        └──────────────────────────┘
//! ```
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use dashboard::app::{AppEvent, Session};
//! use dashboard::services::api::{academic, ApiClient, ApiConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let (tx, _rx) = async_channel::unbounded::<AppEvent>();
//! let client = ApiClient::new(ApiConfig::from_env(), Session::in_memory(), tx)?;
//! let courses = academic::get_courses(&client).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
