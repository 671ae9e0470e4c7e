//! The contact collection
//!
//! `ContactBook` maps names to contacts while remembering insertion order.
//! It serializes as a single JSON object keyed by name, written in
//! collection order, and reads back in document order.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::contact::{Contact, ContactRecord};

/// Ordered name-to-contact collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the collection holds no contacts
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterate contacts in collection order
    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    /// Look up a contact by exact name
    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name == name)
    }

    /// Look up a contact by exact name for modification
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.name == name)
    }

    /// Whether a contact with this exact name exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Insert a contact, replacing any contact with the same name in place
    ///
    /// Returns the replaced contact, if any.
    pub fn upsert(&mut self, contact: Contact) -> Option<Contact> {
        match self.contacts.iter().position(|c| c.name == contact.name) {
            Some(idx) => Some(std::mem::replace(&mut self.contacts[idx], contact)),
            None => {
                self.contacts.push(contact);
                None
            }
        }
    }

    /// Remove a contact by exact name
    pub fn remove(&mut self, name: &str) -> Option<Contact> {
        let idx = self.contacts.iter().position(|c| c.name == name)?;
        Some(self.contacts.remove(idx))
    }

    /// All contacts whose name contains `query`, ignoring case
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| c.name_contains(query))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ContactBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}

impl FromIterator<Contact> for ContactBook {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        let mut book = ContactBook::new();
        for contact in iter {
            book.upsert(contact);
        }
        book
    }
}

impl Serialize for ContactBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.contacts.len()))?;
        for contact in &self.contacts {
            map.serialize_entry(&contact.name, &contact.to_record())?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ContactBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ContactBookVisitor)
    }
}

struct ContactBookVisitor;

impl<'de> Visitor<'de> for ContactBookVisitor {
    type Value = ContactBook;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of contact name to contact record")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut book = ContactBook::new();
        while let Some((name, record)) = access.next_entry::<String, ContactRecord>()? {
            // Duplicate keys: the last one wins, as in any JSON object
            book.upsert(Contact::from_record(name, record));
        }
        Ok(book)
    }
}
