//! Channel Notifier
//!
//! Forwards validation errors to the front end as toast events.

use crate::eventing::UIEvent;
use crate::services::collaborators::Notifier;
use crossbeam_channel::Sender;
use tracing::warn;

/// Notifier that publishes error toasts on the UI event channel
#[derive(Clone, Debug)]
pub struct ChannelNotifier {
    tx: Sender<UIEvent>,
}

impl ChannelNotifier {
    /// Create a notifier writing to `tx`
    pub fn new(tx: Sender<UIEvent>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn show_error(&self, message: &str) {
        if self.tx.send(UIEvent::error_toast(message)).is_err() {
            warn!(toast = message, "UI event channel closed, dropping error toast");
        }
    }
}
