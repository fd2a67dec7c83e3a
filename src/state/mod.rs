//! State - Camera Editor State
//!
//! Follows a unidirectional data flow pattern:
//!
//! ```text
//! UI Event → ConfigState::handle → CameraEditor → (ConfigUpdater | Notifier) → render
//! ```

pub mod camera_editor;
pub mod config_state;

pub use camera_editor::{CameraEditor, CommitOutcome, EditorEvent};
pub use config_state::{ConfigState, EventOutcome};
