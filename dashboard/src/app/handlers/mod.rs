//! # Event Handlers
//!
//! User-action and event handlers, split by domain. [`App`](crate::app::App)
//! is the public entry point; these functions take the pieces of state they
//! touch explicitly.

pub mod auth;
pub mod navigation;
