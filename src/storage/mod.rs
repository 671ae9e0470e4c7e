//! Storage layer for the contact book
//!
//! Loads and saves the whole collection as one JSON document. Every save is
//! a full rewrite through a temp file and rename.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use std::path::{Path, PathBuf};

use crate::config::paths::ContactPaths;
use crate::error::ContactError;
use crate::models::ContactBook;

/// JSON-file persistence for the contact collection
#[derive(Debug, Clone)]
pub struct ContactStorage {
    path: PathBuf,
}

impl ContactStorage {
    /// Create storage backed by the file at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create storage at the standard location under `paths`
    pub fn from_paths(paths: &ContactPaths) -> Self {
        Self::new(paths.storage_file())
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the collection, or an empty one if nothing has been saved yet
    pub fn load(&self) -> Result<ContactBook, ContactError> {
        match read_json::<ContactBook, _>(&self.path)? {
            Some(book) => {
                for contact in &book {
                    if let Err(e) = contact.validate() {
                        tracing::warn!(contact = %contact.name, "Stored contact is invalid: {}", e);
                    }
                }
                tracing::debug!(
                    path = %self.path.display(),
                    count = book.len(),
                    "Loaded contacts"
                );
                Ok(book)
            }
            None => {
                tracing::info!(path = %self.path.display(), "No contacts file, starting empty");
                Ok(ContactBook::new())
            }
        }
    }

    /// Write the full collection to disk
    pub fn save(&self, book: &ContactBook) -> Result<(), ContactError> {
        write_json_atomic(&self.path, book)?;
        tracing::debug!(
            path = %self.path.display(),
            count = book.len(),
            "Saved contacts"
        );
        Ok(())
    }
}
