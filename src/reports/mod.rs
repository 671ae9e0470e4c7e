//! Reports module for the contact book
//!
//! Read-only summaries computed over the contact collection.

pub mod statistics;

pub use statistics::{ContactStatistics, GroupCount};
