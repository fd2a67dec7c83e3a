//! Collaborators - Seams Between the Editor and the Outside World
//!
//! The editor never loads or stores on its own; it talks to these traits.
//! Closures implement the editor-facing traits directly, which keeps tests
//! and small embedders free of wrapper types.

use crate::domain::camera::CameraConfig;
use crate::error::Result;

/// Supplies the record the editor is seeded with
pub trait ConfigLoader {
    /// `Ok(None)` means the record is not available yet
    fn load(&self) -> Result<Option<CameraConfig>>;
}

/// Receives a validated record on commit
///
/// Fire-and-forget: storage failures are reported by the implementor through
/// its own channel, never returned to the editor.
pub trait ConfigUpdater {
    fn update(&self, record: CameraConfig);

    /// Block until every record handed to [`Self::update`] so far has been
    /// stored or has failed. Synchronous updaters have nothing to wait for.
    fn flush(&self) {}
}

/// Surfaces commit-time validation errors to the operator
pub trait Notifier {
    fn show_error(&self, message: &str);
}

/// Durable storage used behind the persist worker
pub trait ConfigSink: Send + 'static {
    fn store(&self, record: &CameraConfig) -> Result<()>;
}

impl<F> ConfigLoader for F
where
    F: Fn() -> Result<Option<CameraConfig>>,
{
    fn load(&self) -> Result<Option<CameraConfig>> {
        self()
    }
}

impl<F> ConfigUpdater for F
where
    F: Fn(CameraConfig),
{
    fn update(&self, record: CameraConfig) {
        self(record)
    }
}

impl<F> Notifier for F
where
    F: Fn(&str),
{
    fn show_error(&self, message: &str) {
        self(message)
    }
}
