//! The one persisted setting: light or dark theme.
//!
//! Stored as a small JSON object, `{"theme":"dark"}`. A missing file means
//! nothing has been chosen yet and the default (dark) applies.

use crate::error::{Result, StorefrontError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
struct StoredPreferences {
    #[serde(default)]
    theme: Theme,
}

/// File-backed theme preference
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    theme: Theme,
}

impl PreferenceStore {
    /// Read the preference file, falling back to the default theme if it
    /// doesn't exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let stored = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str::<StoredPreferences>(&content)
                .map_err(|e| preference_error(&path, e))?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No preference file at {:?}, using defaults", path);
                StoredPreferences::default()
            }
            Err(e) => return Err(preference_error(&path, e)),
        };

        Ok(Self {
            path,
            theme: stored.theme,
        })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist a new theme
    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        let stored = StoredPreferences { theme };
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| preference_error(&self.path, e))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| preference_error(&self.path, e))?;
        }
        fs::write(&self.path, json).map_err(|e| preference_error(&self.path, e))?;

        info!("Theme set to {}", theme);
        self.theme = theme;
        Ok(())
    }

    /// Flip between light and dark and persist the result
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.set_theme(next)?;
        Ok(next)
    }
}

fn preference_error(path: &Path, reason: impl fmt::Display) -> StorefrontError {
    StorefrontError::Preferences {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
