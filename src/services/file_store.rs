//! File Store
//!
//! Local TOML persistence for the camera record.
//!
//! ```toml
//! updated_at = "2026-10-19T08:00:00+00:00"
//!
//! [camera]
//! enable = true
//! tick_interval = 10
//! capture_flags = "-n 3"
//! image_directory = "/var/img"
//! upload = false
//! ```

use crate::domain::camera::{CameraConfig, RawCameraConfig};
use crate::error::Result;
use crate::helpers::write_atomically;
use crate::services::collaborators::{ConfigLoader, ConfigSink};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default file name inside the data directory
pub const RECORD_FILE_NAME: &str = "camera.toml";

#[derive(Debug, Default, Deserialize)]
struct CameraDocument {
    #[serde(default)]
    camera: RawCameraConfig,
}

#[derive(Serialize)]
struct CameraDocumentRef<'a> {
    /// Last update timestamp (RFC3339)
    updated_at: String,
    camera: &'a CameraConfig,
}

/// Camera record stored in a TOML file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigLoader for FileStore {
    fn load(&self) -> Result<Option<CameraConfig>> {
        if !self.path.exists() {
            info!(path = ?self.path, "No camera record yet, using defaults");
            return Ok(Some(CameraConfig::default()));
        }

        let value = fs::read_to_string(&self.path)?;
        let document: CameraDocument = toml::from_str(&value)?;

        let record = document.camera.into_record();
        if record.is_none() {
            debug!(path = ?self.path, "Camera record has no enable flag");
        }
        Ok(record)
    }
}

impl ConfigSink for FileStore {
    fn store(&self, record: &CameraConfig) -> Result<()> {
        let document = CameraDocumentRef {
            updated_at: chrono::Local::now().to_rfc3339(),
            camera: record,
        };
        let content = toml::to_string_pretty(&document)?;
        write_atomically(&self.path, &content)?;
        info!(path = ?self.path, "Camera record saved");
        Ok(())
    }
}
