//! Preference persistence and the default output directory
//!
//! A single preference survives across sessions: the directory last used in
//! a save or open dialog. It is stored as JSON under the user config
//! directory; a missing or unreadable file means first run, never an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Preferences persisted between sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Directory last used in a save/open dialog
    pub last_dir: Option<PathBuf>,
}

impl Preferences {
    /// Load preferences from disk, or return defaults if unavailable
    pub fn load() -> Self {
        let Some(path) = preferences_path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(prefs) => prefs,
                Err(err) => {
                    log::warn!("Error parsing preferences, using defaults: {err}");
                    Self::default()
                }
            },
            // First run
            Err(_) => Self::default(),
        }
    }

    /// Save preferences to disk
    pub fn save(&self) {
        let Some(path) = preferences_path() else {
            log::error!("Could not resolve a config directory for saving preferences");
            return;
        };
        if let Some(parent) = path.parent()
            && let Err(err) = fs::create_dir_all(parent)
        {
            log::error!("Failed to create config directory: {err}");
            return;
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(&path, json) {
                    log::error!("Failed to save preferences: {err}");
                }
            }
            Err(err) => log::error!("Failed to serialize preferences: {err}"),
        }
    }

    /// The directory a save/open dialog should start in
    pub fn last_dir_or_home(&self) -> PathBuf {
        self.last_dir
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Record the directory of a file the user just saved or opened
    ///
    /// The caller persists the change with [`Preferences::save`].
    pub fn remember_dir(&mut self, file: &Path) {
        if let Some(parent) = file.parent() {
            self.last_dir = Some(parent.to_path_buf());
        }
    }
}

/// Default output directory for quick saves, `<home>/screenshoter`
pub fn default_output_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("screenshoter")
}

/// Create the default output directory if absent; called once at startup
pub fn ensure_output_dir() -> Result<PathBuf> {
    let dir = default_output_dir();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn preferences_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("screenshoter").join("preferences.json"))
}
