//! User settings for the contact book
//!
//! Settings are optional. When no settings file exists the defaults apply
//! and nothing is written; the file is only ever edited by hand.

use serde::{Deserialize, Serialize};

use super::paths::ContactPaths;
use crate::error::ContactError;

/// User settings for the contact book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Group assigned when the user leaves the group prompt blank
    #[serde(default = "default_group")]
    pub default_group: String,

    /// Window, in calendar days, for the "recently updated" statistic
    #[serde(default = "default_recent_window_days")]
    pub recent_window_days: i64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_group() -> String {
    "Other".to_string()
}

fn default_recent_window_days() -> i64 {
    7
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_group: default_group(),
            recent_window_days: default_recent_window_days(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ContactPaths) -> Result<Self, ContactError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ContactError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| ContactError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ContactError> {
        if self.default_group.trim().is_empty() {
            return Err(ContactError::Config("default_group cannot be empty".into()));
        }
        if self.recent_window_days < 0 {
            return Err(ContactError::Config(format!(
                "recent_window_days must not be negative (got {})",
                self.recent_window_days
            )));
        }
        Ok(())
    }
}
