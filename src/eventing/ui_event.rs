//! UI Events
//!
//! Events emitted from the service and state layers to the front end for
//! notifications and persistence feedback.

use std::sync::Arc;

/// UI events for user feedback
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UIEvent {
    /// Display a toast notification
    Toast {
        /// Message to display
        message: Arc<str>,
        /// Whether this is an error (affects styling)
        is_error: bool,
    },

    /// A committed record reached durable storage
    PersistSucceeded {
        /// Where it was stored (file path or URL)
        target: Arc<str>,
    },

    /// Durable storage of a committed record failed
    PersistFailed {
        /// Where it should have been stored
        target: Arc<str>,
        /// Error message
        message: Arc<str>,
    },
}

impl UIEvent {
    /// Create an error toast
    pub fn error_toast(message: impl Into<Arc<str>>) -> Self {
        Self::Toast {
            message: message.into(),
            is_error: true,
        }
    }
}
