//! File System Utilities
//!
//! Configuration and data directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("io", "reef-pi", "camera-config").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/camera-config/` or `$XDG_CONFIG_HOME/camera-config/`
/// - **macOS**: `~/Library/Application Support/io.reef-pi.camera-config/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\reef-pi\camera-config\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    ensure_dir(dirs.config_dir())
}

/// Get or create the data directory (log files, local record store)
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/camera-config/`
/// - **macOS**: `~/Library/Application Support/io.reef-pi.camera-config/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\reef-pi\camera-config\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    ensure_dir(dirs.data_dir())
}

/// Write `content` to `path` through a sibling temp file and a rename, so a
/// reader never observes a half-written document.
pub fn write_atomically(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
