//! Service layer for the contact book
//!
//! The service layer provides the CRUD operations on top of the storage
//! layer, handling validation and persistence after each change.

pub mod contact;

pub use contact::{ContactStore, ContactUpdate, NewContact, UpdateField, UpdateOutcome};
