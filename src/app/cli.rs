//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Interactive editor for the camera configuration of a reef-pi controller
#[derive(Parser, Debug, Default)]
#[command(name = "camera-config")]
#[command(version)]
pub struct Cli {
    /// Controller base URL (e.g. http://reef-pi.local:8080)
    ///
    /// Edits the record served at /api/camera/config instead of a local file.
    #[arg(long, env = "CAMERA_CONFIG_REMOTE", conflicts_with = "file")]
    pub remote: Option<String>,

    /// Local record file (TOML)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// UI language (en, zh-CN)
    #[arg(long)]
    pub locale: Option<String>,

    /// Write logs to stderr instead of the rolling log file
    #[arg(long)]
    pub log_stderr: bool,
}
