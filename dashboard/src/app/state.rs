//! # Session State
//!
//! The signed-in identity, shared by the request layer (bearer token) and the
//! router (token presence and role). Reads copy out of the lock; writes go to
//! the backing [`SessionStore`] first and then to memory.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared::{Role, TokenResponse};

use crate::app::storage::{MemoryStore, SessionStore};
use crate::core::Result;

/// Persisted session fields. Each is optional; a logged-out session has none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Raw role identifier as returned at login. May be unrecognized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl SessionState {
    pub fn from_token(response: &TokenResponse) -> Self {
        Self {
            token: Some(response.access_token.clone()),
            role: Some(response.role.clone()),
            username: Some(response.username.clone()),
        }
    }

    /// Bearer token, treating an empty string as absent.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    /// Stored role identifier, verbatim.
    pub fn role_id(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Stored role, if it is one the dashboard recognizes.
    pub fn role(&self) -> Option<Role> {
        self.role_id().and_then(Role::parse)
    }
}

/// Session context handed to the API client and the router.
///
/// Cloning shares the same state and store.
#[derive(Clone)]
pub struct Session {
    state: Arc<RwLock<SessionState>>,
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("Session")
            .field("authenticated", &state.has_token())
            .field("role", &state.role)
            .field("username", &state.username)
            .finish()
    }
}

impl Session {
    /// Load the session persisted in `store`.
    pub fn load(store: Arc<dyn SessionStore>) -> Result<Self> {
        let state = store.load()?;
        tracing::debug!(
            authenticated = state.has_token(),
            role = ?state.role,
            "Session loaded"
        );
        Ok(Self {
            state: Arc::new(RwLock::new(state)),
            store,
        })
    }

    /// Empty session that lives only in memory.
    pub fn in_memory() -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::default())),
            store: Arc::new(MemoryStore::default()),
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.read().token().map(str::to_string)
    }

    pub fn role(&self) -> Option<Role> {
        self.state.read().role()
    }

    pub fn username(&self) -> Option<String> {
        self.state.read().username.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().has_token()
    }

    /// Store the identity returned by a successful login.
    pub fn sign_in(&self, response: &TokenResponse) -> Result<()> {
        self.replace(SessionState::from_token(response))?;
        tracing::info!(username = %response.username, role = %response.role, "Session started");
        Ok(())
    }

    /// Overwrite all fields.
    pub fn replace(&self, state: SessionState) -> Result<()> {
        self.store.save(&state)?;
        *self.state.write() = state;
        Ok(())
    }

    /// Remove token, role and username.
    ///
    /// Memory is cleared even when the store fails, so a broken store can never
    /// keep a rejected token in use.
    pub fn clear(&self) -> Result<()> {
        *self.state.write() = SessionState::default();
        self.store.clear()
    }
}
