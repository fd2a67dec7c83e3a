//! Camera - Capture Device Configuration Record

use crate::error::Error;
use crate::helpers::parse_int_prefix;
use serde::{Deserialize, Serialize};
use snafu::Snafu;
use std::fmt;
use std::str::FromStr;

/// Default minutes between two captures
pub const DEFAULT_TICK_INTERVAL: i64 = 120;
/// Default directory captured images are written to
pub const DEFAULT_IMAGE_DIRECTORY: &str = "/var/lib/reef-pi/images";

/// Persisted camera configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Whether the device is active
    pub enable: bool,
    /// Minutes between captures
    pub tick_interval: i64,
    /// Flags passed verbatim to the capture command
    pub capture_flags: String,
    /// Where captured images are stored
    pub image_directory: String,
    /// Forward captured images to remote storage
    pub upload: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            enable: false,
            tick_interval: DEFAULT_TICK_INTERVAL,
            capture_flags: String::new(),
            image_directory: DEFAULT_IMAGE_DIRECTORY.to_string(),
            upload: false,
        }
    }
}

/// Camera configuration as supplied by a loader, before it is known to be complete
///
/// A document without `enable` has not been loaded yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCameraConfig {
    pub enable: Option<bool>,
    pub tick_interval: Option<i64>,
    pub capture_flags: Option<String>,
    pub image_directory: Option<String>,
    pub upload: Option<bool>,
}

impl RawCameraConfig {
    /// Convert into a complete record, `None` while the sentinel is set.
    /// Other missing fields fall back to their defaults.
    pub fn into_record(self) -> Option<CameraConfig> {
        let enable = self.enable?;
        let defaults = CameraConfig::default();
        Some(CameraConfig {
            enable,
            tick_interval: self.tick_interval.unwrap_or(defaults.tick_interval),
            capture_flags: self.capture_flags.unwrap_or(defaults.capture_flags),
            image_directory: self.image_directory.unwrap_or(defaults.image_directory),
            upload: self.upload.unwrap_or(defaults.upload),
        })
    }
}

/// Commit-time validation failure
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum ValidationError {
    /// `tick_interval` has no leading integer
    #[snafu(display("Tick interval has to be a positive integer"))]
    TickInterval { raw: String },
}

/// Text-edited fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    TickInterval,
    CaptureFlags,
    ImageDirectory,
}

impl TextField {
    pub const ALL: [TextField; 3] = [
        TextField::TickInterval,
        TextField::CaptureFlags,
        TextField::ImageDirectory,
    ];

    /// Record key of the field
    pub fn key(self) -> &'static str {
        match self {
            TextField::TickInterval => "tick_interval",
            TextField::CaptureFlags => "capture_flags",
            TextField::ImageDirectory => "image_directory",
        }
    }
}

/// Toggled fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolField {
    Enable,
    Upload,
}

impl BoolField {
    pub const ALL: [BoolField; 2] = [BoolField::Enable, BoolField::Upload];

    /// Record key of the field
    pub fn key(self) -> &'static str {
        match self {
            BoolField::Enable => "enable",
            BoolField::Upload => "upload",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for BoolField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TextField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| Error::Invalid {
                message: format!("Not a text field: {s}"),
            })
    }
}

impl FromStr for BoolField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoolField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| Error::Invalid {
                message: format!("Not a boolean field: {s}"),
            })
    }
}

/// Working copy of the record while it is being edited
///
/// `tick_interval` stays free-form text until commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraConfigDraft {
    pub enable: bool,
    pub tick_interval: String,
    pub capture_flags: String,
    pub image_directory: String,
    pub upload: bool,
}

impl From<&CameraConfig> for CameraConfigDraft {
    fn from(config: &CameraConfig) -> Self {
        Self {
            enable: config.enable,
            tick_interval: config.tick_interval.to_string(),
            capture_flags: config.capture_flags.clone(),
            image_directory: config.image_directory.clone(),
            upload: config.upload,
        }
    }
}

impl CameraConfigDraft {
    /// Current text of a text field
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::TickInterval => &self.tick_interval,
            TextField::CaptureFlags => &self.capture_flags,
            TextField::ImageDirectory => &self.image_directory,
        }
    }

    /// Current value of a boolean field
    pub fn flag(&self, field: BoolField) -> bool {
        match field {
            BoolField::Enable => self.enable,
            BoolField::Upload => self.upload,
        }
    }

    /// Copy of this draft with one text field replaced
    pub fn with_text(&self, field: TextField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            TextField::TickInterval => next.tick_interval = value,
            TextField::CaptureFlags => next.capture_flags = value,
            TextField::ImageDirectory => next.image_directory = value,
        }
        next
    }

    /// Copy of this draft with one boolean field replaced
    pub fn with_flag(&self, field: BoolField, checked: bool) -> Self {
        let mut next = self.clone();
        match field {
            BoolField::Enable => next.enable = checked,
            BoolField::Upload => next.upload = checked,
        }
        next
    }

    /// Coerce the draft into a record. Only `tick_interval` is checked.
    pub fn validate(&self) -> Result<CameraConfig, ValidationError> {
        let tick_interval =
            parse_int_prefix(&self.tick_interval).ok_or_else(|| ValidationError::TickInterval {
                raw: self.tick_interval.clone(),
            })?;

        Ok(CameraConfig {
            enable: self.enable,
            tick_interval,
            capture_flags: self.capture_flags.clone(),
            image_directory: self.image_directory.clone(),
            upload: self.upload,
        })
    }
}
