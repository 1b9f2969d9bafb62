//! # Logging
//!
//! Structured logging for the dashboard client. Events go to a daily-rotated
//! file under `logs/` and, optionally, to stderr.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dashboard::debug::{self, DebugConfig};
//!
//! let _guard = debug::init(&DebugConfig::from_env()).unwrap();
//! tracing::info!(endpoint = "/academic/courses", duration_ms = 42, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `dashboard=info,warn`)
//! - `DASHBOARD_LOG_DIR`: Log directory (default `logs`)
//! - `DASHBOARD_LOG_STDERR`: Mirror logs to stderr (1=on)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init;
