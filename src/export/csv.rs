//! CSV Export functionality
//!
//! Exports the contact collection to a spreadsheet-compatible CSV file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{ContactError, ContactResult};
use crate::models::ContactBook;

/// Header row of the contacts export
pub const CSV_HEADER: [&str; 5] = ["Name", "Phone", "Email", "Address", "Group"];

/// Write all contacts as CSV, in collection order
///
/// Missing email or address values are written as empty fields. Returns the
/// number of data rows written.
pub fn export_contacts_csv<W: Write>(book: &ContactBook, writer: W) -> ContactResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    for contact in book {
        csv_writer.write_record([
            contact.name.as_str(),
            contact.phone.as_str(),
            contact.email.as_deref().unwrap_or(""),
            contact.address.as_deref().unwrap_or(""),
            contact.group.as_str(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| ContactError::Export(e.to_string()))?;

    Ok(book.len())
}

/// Export all contacts to a CSV file at `path`, replacing any previous export
pub fn export_contacts_csv_file(book: &ContactBook, path: &Path) -> ContactResult<usize> {
    let file = File::create(path).map_err(|e| {
        ContactError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    let count = export_contacts_csv(book, BufWriter::new(file))?;
    tracing::debug!(path = %path.display(), count, "Exported contacts to CSV");
    Ok(count)
}
