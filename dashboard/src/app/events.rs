//! # Application Events
//!
//! Events raised by the request layer and the router, consumed by
//! [`App::on_tick`](crate::app::App::on_tick).

/// User-facing notices. The host decides how to show them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Navigation to a dashboard the stored role may not see.
    AccessDenied,
    /// The backend answered 403.
    ResourceForbidden,
    /// No response from the backend.
    ServerUnreachable,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::AccessDenied => {
                "Access Denied: You do not have permission to view this page."
            }
            Notice::ResourceForbidden => {
                "Access Denied: You do not have permission to view this resource."
            }
            Notice::ServerUnreachable => {
                "Network Error: Please check if the backend server is running."
            }
        }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A request was answered with 401; the session has been cleared and the
    /// user must sign in again.
    SessionInvalidated,
    /// Something to show the user.
    Notice(Notice),
}
