//! Contact Book - Terminal-based personal address book
//!
//! This library provides the core functionality for an interactive contact
//! book: a menu-driven program that adds, searches, updates, deletes, lists,
//! exports and summarizes contacts kept in a local JSON file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: File locations and optional user settings
//! - `error`: Custom error types
//! - `validation`: Phone and email syntax checks
//! - `models`: The contact record and the ordered collection
//! - `storage`: JSON file storage layer
//! - `services`: The contact store (CRUD plus persistence)
//! - `display`: Terminal formatting
//! - `export`: CSV export
//! - `reports`: Collection statistics
//! - `cli`: Console I/O, menu handlers and the menu loop
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book::cli::{run_menu, Console};
//! use contact_book::config::{ContactPaths, Settings};
//! use contact_book::services::ContactStore;
//! use contact_book::storage::ContactStorage;
//!
//! let paths = ContactPaths::current_dir()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut store = ContactStore::open(ContactStorage::from_paths(&paths), settings)?;
//! run_menu(&mut store, &paths, &mut Console::stdio())?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::{ContactError, ContactResult};
