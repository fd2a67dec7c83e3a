//! ConfigState - Camera Configuration Page State

use crate::domain::camera::{CameraConfig, ValidationError};
use crate::services::{ConfigUpdater, Notifier};
use crate::state::camera_editor::{CameraEditor, CommitOutcome, EditorEvent};
use tracing::debug;

/// What happened to an event dispatched to the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Page is still loading, the event was dropped
    Ignored,
    /// Buffer changed
    Edited,
    /// Record validated and handed off
    Committed(CameraConfig),
    /// Commit failed validation
    Rejected(ValidationError),
}

impl From<CommitOutcome> for EventOutcome {
    fn from(outcome: CommitOutcome) -> Self {
        match outcome {
            CommitOutcome::Committed(record) => EventOutcome::Committed(record),
            CommitOutcome::Rejected(error) => EventOutcome::Rejected(error),
        }
    }
}

/// State for the camera configuration page
#[derive(Debug, Clone, Default)]
pub enum ConfigState {
    /// No record yet; only the loading placeholder is shown
    #[default]
    Loading,
    /// Record loaded and being edited
    Editing(CameraEditor),
}

impl ConfigState {
    /// Build the state for a loader result
    pub fn from_record(record: Option<CameraConfig>) -> Self {
        match record {
            Some(record) => ConfigState::Editing(CameraEditor::new(&record)),
            None => ConfigState::Loading,
        }
    }

    /// Replace the state with a fresh load. Any unsaved edits are discarded.
    pub fn update_config(&mut self, record: Option<CameraConfig>) {
        *self = Self::from_record(record);
    }

    /// Check if still waiting for the record
    pub fn is_loading(&self) -> bool {
        matches!(self, ConfigState::Loading)
    }

    /// Editor, once loaded
    pub fn editor(&self) -> Option<&CameraEditor> {
        match self {
            ConfigState::Loading => None,
            ConfigState::Editing(editor) => Some(editor),
        }
    }

    /// Dispatch an event. Nothing reaches the editor before the record is loaded.
    pub fn handle(
        &mut self,
        event: EditorEvent,
        updater: &dyn ConfigUpdater,
        notifier: &dyn Notifier,
    ) -> EventOutcome {
        match self {
            ConfigState::Loading => {
                debug!(event = ?event, "Ignoring event while loading");
                EventOutcome::Ignored
            }
            ConfigState::Editing(editor) => match editor.handle(event, updater, notifier) {
                Some(outcome) => outcome.into(),
                None => EventOutcome::Edited,
            },
        }
    }
}
