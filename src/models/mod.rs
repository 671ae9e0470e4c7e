//! Core data models for the contact book
//!
//! This module contains the contact record and the ordered collection that
//! holds them.

pub mod book;
pub mod contact;

pub use book::ContactBook;
pub use contact::{Contact, ContactRecord, ContactValidationError};
