//! # Core Abstractions
//!
//! Error types and the service trait the orchestrator depends on.
//!
//! - **[`error`]**: [`AppError`] and the [`Result`] alias
//! - **[`service`]**: [`ApiService`], implemented by
//!   [`ApiClient`](crate::services::api::ApiClient)
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dashboard::app::Session;
//! use dashboard::core::ApiService;
//! use dashboard::services::api::{ApiClient, ApiConfig};
//!
//! let (tx, _rx) = async_channel::unbounded();
//! let client = ApiClient::new(ApiConfig::default(), Session::in_memory(), tx).unwrap();
//! let api: Arc<dyn ApiService> = Arc::new(client);
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::ApiService;
