//! Constants
//!
//! Centralized constants shared by the services and the front end.

/// REST resource holding the camera record on the controller
pub const CAMERA_CONFIG_PATH: &str = "/api/camera/config";

/// Request timeout for the HTTP store
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Settings file inside the config directory
pub const SETTINGS_FILE_NAME: &str = "camera-config.toml";

/// Log file prefix inside the data directory
pub const LOG_FILE_PREFIX: &str = "camera-config.log";

/// Locale used when neither settings nor the system provide one
pub const DEFAULT_LOCALE: &str = "en";
