//! Logging configuration from environment variables

use std::path::PathBuf;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "dashboard=info,warn";

/// Log file name; the appender adds a date suffix.
pub const LOG_FILE_NAME: &str = "dashboard.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Log level filter (e.g., "dashboard=debug,info")
    pub log_level: String,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Mirror log output to stderr
    pub log_to_stderr: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: PathBuf::from("logs"),
            log_to_stderr: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    ///
    /// - `RUST_LOG`: filter directives
    /// - `DASHBOARD_LOG_DIR`: log directory
    /// - `DASHBOARD_LOG_STDERR=1`: also log to stderr
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_dir: std::env::var_os("DASHBOARD_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_to_stderr: std::env::var("DASHBOARD_LOG_STDERR")
                .map(|v| v == "1")
                .unwrap_or(defaults.log_to_stderr),
        }
    }

    /// Path of today's log file is `log_dir/dashboard.log.<date>`.
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
