//! Camera Controller
//!
//! Owns the page state and the collaborators, loads the record and dispatches
//! operator events.

use crate::i18n::Locale;
use crate::services::{ConfigLoader, ConfigUpdater, Notifier};
use crate::state::{ConfigState, EditorEvent, EventOutcome};
use crate::views::{ConfigView, PageView};
use rust_i18n::t;
use tracing::{error, info};

/// Camera configuration page controller
pub struct CameraConfigController {
    state: ConfigState,
    loader: Box<dyn ConfigLoader>,
    updater: Box<dyn ConfigUpdater>,
    notifier: Box<dyn Notifier>,
}

impl CameraConfigController {
    /// Create a controller in the loading state. Call [`Self::reload`] to
    /// fetch the record.
    pub fn new(
        loader: impl ConfigLoader + 'static,
        updater: impl ConfigUpdater + 'static,
        notifier: impl Notifier + 'static,
    ) -> Self {
        Self {
            state: ConfigState::Loading,
            loader: Box::new(loader),
            updater: Box::new(updater),
            notifier: Box::new(notifier),
        }
    }

    /// Current page state
    pub fn state(&self) -> &ConfigState {
        &self.state
    }

    /// Load the record and replace the page state with it.
    ///
    /// Pending commits are flushed first so the loader sees them. A loader
    /// failure is reported through the notifier and leaves the current state
    /// in place.
    pub fn reload(&mut self, locale: Locale) -> bool {
        self.updater.flush();
        match self.loader.load() {
            Ok(record) => {
                info!(loaded = record.is_some(), "Camera record loaded");
                self.state.update_config(record);
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to load camera record");
                let message = t!("camera.load_failed", locale = locale.code(), message = e.to_string());
                self.notifier.show_error(&message);
                false
            }
        }
    }

    /// Dispatch an operator event
    pub fn handle(&mut self, event: EditorEvent) -> EventOutcome {
        self.state
            .handle(event, self.updater.as_ref(), self.notifier.as_ref())
    }

    /// Wait for committed records to reach storage
    pub fn flush(&self) {
        self.updater.flush();
    }

    /// Render the page
    pub fn view(&self, locale: Locale) -> PageView {
        ConfigView::render(&self.state, locale)
    }
}
