//! # Session Storage
//!
//! Where the session survives between runs. [`FileStore`] keeps the three keys
//! (`token`, `role`, `username`) in one JSON file; [`MemoryStore`] keeps them
//! for the life of the process.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::app::state::SessionState;
use crate::core::{AppError, Result};

/// Backing store for [`Session`](crate::app::Session).
pub trait SessionStore: Send + Sync {
    /// Read the persisted state; an empty store yields the default state.
    fn load(&self) -> Result<SessionState>;

    fn save(&self, state: &SessionState) -> Result<()>;

    /// Remove all persisted keys.
    fn clear(&self) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<SessionState>,
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<SessionState> {
        Ok(self.state.lock().clone())
    }

    fn save(&self, state: &SessionState) -> Result<()> {
        *self.state.lock() = state.clone();
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.state.lock() = SessionState::default();
        Ok(())
    }
}

/// JSON file store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<SessionState> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(SessionState::default()),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw).map_err(|e| {
            AppError::Session(format!(
                "corrupt session file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn save(&self, state: &SessionState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| AppError::Session(e.to_string()))?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
