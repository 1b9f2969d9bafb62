//! # Application Configuration

use std::path::PathBuf;

use crate::services::api::ApiConfig;

/// Default location of the persisted session.
pub const DEFAULT_SESSION_FILE: &str = ".dashboard/session.json";

/// Everything [`App::new`](crate::app::App::new) needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub session_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// - `DASHBOARD_SESSION_FILE`: persisted session path
    /// - see [`ApiConfig::from_env`] for the backend settings
    pub fn from_env() -> Self {
        Self {
            api: ApiConfig::from_env(),
            session_file: std::env::var_os("DASHBOARD_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE)),
        }
    }
}
