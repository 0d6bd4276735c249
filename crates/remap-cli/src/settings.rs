//! User settings, loaded from the platform config directory.
//!
//! - macOS: ~/Library/Application Support/org.material-remap.material-remap/
//! - Windows: %APPDATA%/material-remap/material-remap/config/
//! - Linux: ~/.config/material-remap/

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use remap_model::DEFAULT_STARTER_ROWS;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "material-remap";
const APP_NAME: &str = "material-remap";
const CONFIG_FILENAME: &str = "settings.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Empty rows given to a new workspace.
    pub starter_rows: usize,
    /// File name used by `export` when no path is given.
    pub default_export_name: String,
    /// Maximum number of completions printed by `suggest`.
    pub suggestion_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starter_rows: DEFAULT_STARTER_ROWS,
            default_export_name: "Material_Mapping.json".to_string(),
            suggestion_limit: 5,
        }
    }
}

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from an explicit file, or from the platform location.
///
/// Falls back to defaults when the file is missing or unparsable.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match settings_path() {
            Some(path) => path,
            None => {
                tracing::warn!("Could not determine settings path, using defaults");
                return Settings::default();
            }
        },
    };

    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No settings file found at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read settings file: {}, using defaults", e);
            Settings::default()
        }
    }
}
