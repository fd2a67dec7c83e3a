//! CameraEditor - Edit Buffer, Dirty Tracking and Commit Gate
//!
//! ```text
//! seed ──▶ buffer (dirty) ──edit──▶ buffer' (dirty) ──commit──┬─ valid ──▶ updater, clean
//!                                                             └─ invalid ─▶ notifier, unchanged
//! ```
//!
//! The buffer is an immutable value: every edit builds a new draft and swaps
//! the shared reference, so a snapshot handed to a renderer never changes
//! under it.

use crate::domain::camera::{
    BoolField, CameraConfig, CameraConfigDraft, TextField, ValidationError,
};
use crate::services::{ConfigUpdater, Notifier};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Field-scoped edit or commit request coming from the interaction surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    /// Text input changed
    Text { field: TextField, value: String },
    /// Checkbox toggled
    Toggle { field: BoolField, checked: bool },
    /// Commit button pressed
    Commit,
}

/// Result of a commit request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Validated and handed to the updater
    Committed(CameraConfig),
    /// Validation failed, nothing changed
    Rejected(ValidationError),
}

/// Working copy of the camera record plus its dirty flag
#[derive(Debug, Clone)]
pub struct CameraEditor {
    buffer: Arc<CameraConfigDraft>,
    dirty: bool,
}

impl CameraEditor {
    /// Seed the editor from a loaded record.
    ///
    /// The editor starts dirty: the commit action is offered even before the
    /// first edit.
    pub fn new(seed: &CameraConfig) -> Self {
        Self {
            buffer: Arc::new(CameraConfigDraft::from(seed)),
            dirty: true,
        }
    }

    // ==================== Getters ====================

    /// Current working copy
    pub fn buffer(&self) -> &CameraConfigDraft {
        &self.buffer
    }

    /// Shared handle to the current working copy
    pub fn snapshot(&self) -> Arc<CameraConfigDraft> {
        Arc::clone(&self.buffer)
    }

    /// Whether there are uncommitted changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn replace(&mut self, buffer: CameraConfigDraft, dirty: bool) {
        self.buffer = Arc::new(buffer);
        self.dirty = dirty;
    }

    // ==================== Mutation Router ====================

    /// Store raw text for a text field. No coercion happens here.
    pub fn apply_text_edit(&mut self, field: TextField, raw: impl Into<String>) {
        let raw = raw.into();
        debug!(field = %field, value = %raw, "Text edit");
        let next = self.buffer.with_text(field, raw);
        self.replace(next, true);
    }

    /// Store a checkbox state for a boolean field
    pub fn apply_bool_edit(&mut self, field: BoolField, checked: bool) {
        debug!(field = %field, checked, "Toggle edit");
        let next = self.buffer.with_flag(field, checked);
        self.replace(next, true);
    }

    /// Handler bound to one text field; the event only carries the raw value
    pub fn text_handler(field: TextField) -> impl Fn(&mut CameraEditor, &str) {
        move |editor: &mut CameraEditor, raw: &str| editor.apply_text_edit(field, raw)
    }

    /// Handler bound to one boolean field; the event only carries the checked state
    pub fn bool_handler(field: BoolField) -> impl Fn(&mut CameraEditor, bool) {
        move |editor: &mut CameraEditor, checked: bool| editor.apply_bool_edit(field, checked)
    }

    /// Route a keyed event to the mutation router or the commit gate.
    /// Returns the commit outcome for [`EditorEvent::Commit`].
    pub fn handle(
        &mut self,
        event: EditorEvent,
        updater: &dyn ConfigUpdater,
        notifier: &dyn Notifier,
    ) -> Option<CommitOutcome> {
        match event {
            EditorEvent::Text { field, value } => {
                self.apply_text_edit(field, value);
                None
            }
            EditorEvent::Toggle { field, checked } => {
                self.apply_bool_edit(field, checked);
                None
            }
            EditorEvent::Commit => Some(self.commit(updater, notifier)),
        }
    }

    // ==================== Commit Gate ====================

    /// Validate the buffer and hand it to `updater`.
    ///
    /// On success the tick interval text is replaced by its integer value and
    /// the editor becomes clean. On failure `notifier` is called once and
    /// neither the buffer nor the dirty flag change.
    pub fn commit(&mut self, updater: &dyn ConfigUpdater, notifier: &dyn Notifier) -> CommitOutcome {
        let record = match self.buffer.validate() {
            Ok(record) => record,
            Err(error) => {
                warn!(error = %error, raw = %self.buffer.tick_interval, "Commit rejected");
                notifier.show_error(&error.to_string());
                return CommitOutcome::Rejected(error);
            }
        };

        let coerced = self
            .buffer
            .with_text(TextField::TickInterval, record.tick_interval.to_string());

        updater.update(record.clone());
        self.replace(coerced, false);

        info!(tick_interval = record.tick_interval, "Camera record committed");
        CommitOutcome::Committed(record)
    }
}
