//! Export module for the contact book
//!
//! Provides spreadsheet-compatible CSV export of the contact collection.

pub mod csv;

pub use self::csv::{export_contacts_csv, export_contacts_csv_file, CSV_HEADER};
