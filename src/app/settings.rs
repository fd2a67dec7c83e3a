//! Application Settings
//!
//! Persisted front-end settings (`camera-config.toml` in the config directory),
//! overridden by command-line flags.

use crate::app::cli::Cli;
use crate::constants::SETTINGS_FILE_NAME;
use crate::error::Result;
use crate::helpers::{get_or_create_config_dir, get_or_create_data_dir};
use crate::i18n::Locale;
use crate::services::file_store::RECORD_FILE_NAME;
use locale_config::Locale as SystemLocale;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

fn get_settings_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(SETTINGS_FILE_NAME);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Where the camera record lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreTarget {
    /// Controller base URL
    Remote(String),
    /// Local TOML file
    File(PathBuf),
}

/// Persisted application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    locale: Option<String>,
    remote_url: Option<String>,
    record_path: Option<PathBuf>,
}

impl AppSettings {
    /// Load settings from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_settings_path()?;
        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(&path)?;

        let mut settings = Self::from_toml_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
            e
        })?;

        // Detect system locale if not set
        if settings.locale.as_ref().is_none_or(|l| l.is_empty()) {
            settings.locale = Some(SystemLocale::current().to_string());
        }

        Ok(settings)
    }

    /// Parse settings; an empty document yields defaults
    pub fn from_toml_str(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    /// Apply command-line overrides. `--file` wins over a persisted remote URL.
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(locale) = &cli.locale {
            self.locale = Some(locale.clone());
        }
        if let Some(remote) = &cli.remote {
            self.remote_url = Some(remote.clone());
        }
        if let Some(file) = &cli.file {
            self.record_path = Some(file.clone());
            self.remote_url = None;
        }
        self
    }

    // ==================== Getters ====================

    pub fn locale(&self) -> Locale {
        self.locale.as_deref().map(Locale::from_tag).unwrap_or_default()
    }

    pub fn remote_url(&self) -> Option<&str> {
        self.remote_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Resolve where the record is loaded from and stored to
    pub fn store_target(&self) -> Result<StoreTarget> {
        if let Some(url) = self.remote_url() {
            return Ok(StoreTarget::Remote(url.to_string()));
        }
        let path = match &self.record_path {
            Some(path) => path.clone(),
            None => get_or_create_data_dir()?.join(RECORD_FILE_NAME),
        };
        Ok(StoreTarget::File(path))
    }
}
