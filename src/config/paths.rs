//! Path management for the contact book
//!
//! Every file the program touches lives directly under one base directory.
//! In normal use that is the current working directory.

use std::path::PathBuf;

use crate::error::ContactError;

/// Default storage file name
pub const STORAGE_FILE_NAME: &str = "contacts_data.json";

/// Default CSV export file name
pub const EXPORT_FILE_NAME: &str = "contacts.csv";

/// Optional settings file name
pub const SETTINGS_FILE_NAME: &str = "contacts_config.json";

/// Manages all paths used by the contact book
#[derive(Debug, Clone)]
pub struct ContactPaths {
    /// Directory holding the data, export and settings files
    base_dir: PathBuf,
}

impl ContactPaths {
    /// Resolve paths relative to the current working directory
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn current_dir() -> Result<Self, ContactError> {
        let base_dir = std::env::current_dir()
            .map_err(|e| ContactError::Config(format!("Failed to resolve working directory: {}", e)))?;
        Ok(Self { base_dir })
    }

    /// Create ContactPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to contacts_data.json
    pub fn storage_file(&self) -> PathBuf {
        self.base_dir.join(STORAGE_FILE_NAME)
    }

    /// Get the path to contacts.csv
    pub fn export_file(&self) -> PathBuf {
        self.base_dir.join(EXPORT_FILE_NAME)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE_NAME)
    }
}
