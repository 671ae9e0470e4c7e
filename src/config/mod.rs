//! Configuration module for the contact book
//!
//! This module provides configuration management including:
//! - Path resolution for the data, export and settings files
//! - Optional user settings

pub mod paths;
pub mod settings;

pub use paths::ContactPaths;
pub use settings::Settings;
