use crate::options::SanitizeOptions;
use anyhow::{Context, Result, bail};
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CURRENT_VERSION: u32 = 1;
const SETTINGS_FILENAME: &str = "config.yaml";
const APP_NAME: &str = "filenamify";

/// On-disk defaults for the command line tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

fn default_version() -> u32 {
    CURRENT_VERSION
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            replacement: None,
            max_length: None,
        }
    }
}

impl Settings {
    pub fn options(&self) -> SanitizeOptions {
        SanitizeOptions {
            replacement: self.replacement.clone(),
            max_length: self.max_length,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|config| config.join(APP_NAME).join(SETTINGS_FILENAME))
}

/// Load settings from an explicit file. Any failure is an error.
pub fn load_settings_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let settings = parse_settings(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    debug!("Loaded settings from {path:?}");
    Ok(settings)
}

pub fn parse_settings(content: &str) -> Result<Settings> {
    // An empty YAML document deserializes to unit, not a map.
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    let settings: Settings = serde_yaml::from_str(content)?;
    if settings.version > CURRENT_VERSION {
        bail!(
            "config version {} is newer than supported version {}",
            settings.version,
            CURRENT_VERSION
        );
    }
    Ok(settings)
}

/// Load settings from `explicit` if given, otherwise from the default
/// location. A missing or broken default file falls back to defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return load_settings_from_path(path);
    }

    let Some(path) = default_config_path() else {
        debug!("Could not determine config directory, using default settings");
        return Ok(Settings::default());
    };

    if !path.exists() {
        debug!("No config file at {path:?}, using default settings");
        return Ok(Settings::default());
    }

    match load_settings_from_path(&path) {
        Ok(settings) => {
            info!("Using config file {path:?}");
            Ok(settings)
        }
        Err(e) => {
            error!("Ignoring config file {path:?}: {e:#}");
            Ok(Settings::default())
        }
    }
}
