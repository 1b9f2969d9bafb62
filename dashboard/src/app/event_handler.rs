//! # Event Handler
//!
//! Applies [`AppEvent`]s raised by the request layer and the router to the
//! application.

use crate::app::handlers;
use crate::app::{App, AppEvent};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        tracing::debug!(event = ?event, "Handling event");

        match event {
            AppEvent::SessionInvalidated => {
                if let Err(e) = handlers::navigation::handle_session_invalidated(&mut self.router) {
                    tracing::error!(error = %e, "Failed to return to login");
                }
            }
            AppEvent::Notice(notice) => {
                tracing::warn!(notice = %notice, "User notice");
                self.notices.push(notice);
            }
        }
    }
}
