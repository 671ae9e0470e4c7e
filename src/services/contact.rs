//! Contact store
//!
//! Owns the in-memory collection together with the storage it is persisted
//! to. Every mutating operation writes the whole collection back before it
//! returns; if that write fails the in-memory change is rolled back.

use chrono::NaiveDateTime;
use std::fmt;

use crate::config::Settings;
use crate::error::{ContactError, ContactResult};
use crate::models::{Contact, ContactBook};
use crate::storage::ContactStorage;
use crate::validation::{validate_email, validate_phone};

/// Input for creating a contact
#[derive(Debug, Clone, Default)]
pub struct NewContact {
    pub name: String,
    /// Raw phone input, normalized on insert
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    /// Blank or missing falls back to the configured default group
    pub group: Option<String>,
}

/// Requested changes to a contact; blank or missing fields are kept
#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub group: Option<String>,
}

/// Fields whose update was dropped because the new value was invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateField {
    Phone,
    Email,
}

impl fmt::Display for UpdateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateField::Phone => write!(f, "phone number"),
            UpdateField::Email => write!(f, "email"),
        }
    }
}

/// Result of an update
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    /// The contact after the update
    pub contact: Contact,
    /// Fields left unchanged because their new value did not validate
    pub ignored: Vec<UpdateField>,
}

/// The contact collection and its persistence
pub struct ContactStore {
    book: ContactBook,
    storage: ContactStorage,
    settings: Settings,
}

impl ContactStore {
    /// Create a store over an already loaded collection
    pub fn new(book: ContactBook, storage: ContactStorage, settings: Settings) -> Self {
        Self {
            book,
            storage,
            settings,
        }
    }

    /// Load the collection from `storage` and wrap it in a store
    pub fn open(storage: ContactStorage, settings: Settings) -> ContactResult<Self> {
        let book = storage.load()?;
        Ok(Self::new(book, storage, settings))
    }

    /// The in-memory collection
    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    /// The backing storage
    pub fn storage(&self) -> &ContactStorage {
        &self.storage
    }

    /// Active settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Persist the current collection
    pub fn save(&self) -> ContactResult<()> {
        self.storage.save(&self.book)
    }

    /// Add a contact, replacing any existing contact with the same name
    ///
    /// Returns the replaced contact, if there was one.
    pub fn add(&mut self, input: NewContact, at: NaiveDateTime) -> ContactResult<Option<Contact>> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(ContactError::Validation("Name cannot be empty".into()));
        }

        let phone = validate_phone(&input.phone).ok_or_else(|| {
            ContactError::Validation(format!("Invalid phone number: {}", input.phone))
        })?;

        let email = non_blank(input.email);
        if let Some(email) = &email {
            if !validate_email(email) {
                return Err(ContactError::Validation(format!(
                    "Invalid email format: {}",
                    email
                )));
            }
        }

        let group = non_blank(input.group).unwrap_or_else(|| self.settings.default_group.clone());
        let contact = Contact::new(name, phone, email, non_blank(input.address), group, at);

        let replaced = self.commit(|book| Ok(book.upsert(contact)))?;
        if let Some(old) = &replaced {
            tracing::debug!(contact = %old.name, "Replaced existing contact");
        }
        Ok(replaced)
    }

    /// Contacts whose name contains `query`, ignoring case
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        self.book.search(query)
    }

    /// Update a contact by exact name
    ///
    /// `updated_at` is refreshed and the collection saved even when every
    /// field is left blank.
    pub fn update(
        &mut self,
        name: &str,
        changes: ContactUpdate,
        at: NaiveDateTime,
    ) -> ContactResult<UpdateOutcome> {
        self.commit(|book| {
            let contact = book
                .get_mut(name)
                .ok_or_else(|| ContactError::contact_not_found(name))?;
            let mut ignored = Vec::new();

            if let Some(phone) = non_blank(changes.phone) {
                match validate_phone(&phone) {
                    Some(digits) => contact.phone = digits,
                    None => ignored.push(UpdateField::Phone),
                }
            }

            if let Some(email) = non_blank(changes.email) {
                if validate_email(&email) {
                    contact.email = Some(email);
                } else {
                    ignored.push(UpdateField::Email);
                }
            }

            if let Some(address) = non_blank(changes.address) {
                contact.address = Some(address);
            }

            if let Some(group) = non_blank(changes.group) {
                contact.group = group;
            }

            contact.touch(at);

            for field in &ignored {
                tracing::warn!(contact = %contact.name, "Ignored invalid {} on update", field);
            }

            Ok(UpdateOutcome {
                contact: contact.clone(),
                ignored,
            })
        })
    }

    /// Delete a contact by exact name
    pub fn delete(&mut self, name: &str) -> ContactResult<Contact> {
        self.commit(|book| {
            book.remove(name)
                .ok_or_else(|| ContactError::contact_not_found(name))
        })
    }

    /// Apply `change` to the collection and persist it
    ///
    /// Nothing is kept in memory unless both the change and the save succeed.
    fn commit<T>(
        &mut self,
        change: impl FnOnce(&mut ContactBook) -> ContactResult<T>,
    ) -> ContactResult<T> {
        let snapshot = self.book.clone();

        let result = change(&mut self.book).and_then(|value| {
            self.storage.save(&self.book)?;
            Ok(value)
        });

        if result.is_err() {
            self.book = snapshot;
        }
        result
    }
}

/// Trim an optional input, treating blank as absent
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
