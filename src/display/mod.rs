//! Display formatting for terminal output
//!
//! Formats contacts and banners for the interactive menu.

pub mod contact;

pub use contact::{format_contact_list, format_search_results};

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "=".repeat(width)
}

/// Center a title in a field of the given width
pub fn format_header(title: &str, width: usize) -> String {
    let padding = width.saturating_sub(title.len()) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

/// A title framed by double separators
pub fn banner(title: &str, width: usize) -> String {
    format!(
        "{}\n{}\n{}",
        double_separator(width),
        format_header(title, width),
        double_separator(width)
    )
}
