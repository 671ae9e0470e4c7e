//! Contact model
//!
//! A contact is one person's stored details. The name is the key and lives
//! on the contact itself; the on-disk record carries only the remaining fields.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::{validate_email, PHONE_MAX_DIGITS, PHONE_MIN_DIGITS};

/// Current local time, the clock every contact timestamp is taken from
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// A single address-book entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Unique name, acts as the key of the collection
    pub name: String,

    /// Digits-only phone number
    pub phone: String,

    /// Optional email address
    pub email: Option<String>,

    /// Optional postal address
    pub address: Option<String>,

    /// Free-text category label
    pub group: String,

    /// When the contact was created
    pub created_at: NaiveDateTime,

    /// When the contact was last modified
    pub updated_at: NaiveDateTime,
}

/// The stored fields of a contact, in on-disk order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub group: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Contact {
    /// Create a new contact with both timestamps set to `at`
    ///
    /// Empty optional strings are stored as absent.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: Option<String>,
        address: Option<String>,
        group: impl Into<String>,
        at: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.filter(|e| !e.is_empty()),
            address: address.filter(|a| !a.is_empty()),
            group: group.into(),
            created_at: at,
            updated_at: at,
        }
    }

    /// Rebuild a contact from its key and stored record
    pub fn from_record(name: String, record: ContactRecord) -> Self {
        Self {
            name,
            phone: record.phone,
            email: record.email,
            address: record.address,
            group: record.group,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    /// Split the contact into its stored record (without the name)
    pub fn to_record(&self) -> ContactRecord {
        ContactRecord {
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            group: self.group.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Refresh the modification timestamp
    ///
    /// Never moves `updated_at` before `created_at`, even if the clock has
    /// gone backwards since the contact was created.
    pub fn touch(&mut self, at: NaiveDateTime) {
        self.updated_at = at.max(self.created_at);
    }

    /// Case-insensitive substring match on the name
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Validate the contact against the collection invariants
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::EmptyName);
        }

        if !self.phone.chars().all(|c| c.is_ascii_digit())
            || !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&self.phone.len())
        {
            return Err(ContactValidationError::InvalidPhone(self.phone.clone()));
        }

        if let Some(email) = &self.email {
            if !validate_email(email) {
                return Err(ContactValidationError::InvalidEmail(email.clone()));
            }
        }

        if self.updated_at < self.created_at {
            return Err(ContactValidationError::UpdatedBeforeCreated);
        }

        Ok(())
    }
}

/// Invariant violations on a contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    EmptyName,
    InvalidPhone(String),
    InvalidEmail(String),
    UpdatedBeforeCreated,
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => write!(
                f,
                "Phone '{}' must be {}-{} digits",
                phone, PHONE_MIN_DIGITS, PHONE_MAX_DIGITS
            ),
            Self::InvalidEmail(email) => write!(f, "Invalid email address '{}'", email),
            Self::UpdatedBeforeCreated => {
                write!(f, "updated_at is earlier than created_at")
            }
        }
    }
}

impl std::error::Error for ContactValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_new_contact() {
        let contact = Contact::new("Alice", "5551234567", None, None, "Work", at(1));
        assert_eq!(contact.name, "Alice");
        assert_eq!(contact.created_at, contact.updated_at);
        assert!(contact.email.is_none());
        assert!(contact.validate().is_ok());
    }

    #[test]
    fn test_empty_optionals_become_none() {
        let contact = Contact::new(
            "Alice",
            "5551234567",
            Some(String::new()),
            Some(String::new()),
            "Other",
            at(1),
        );
        assert!(contact.email.is_none());
        assert!(contact.address.is_none());
    }

    #[test]
    fn test_record_round_trip() {
        let contact = Contact::new(
            "Bob",
            "5550001111",
            Some("bob@example.com".into()),
            Some("1 Main St".into()),
            "Family",
            at(2),
        );
        let rebuilt = Contact::from_record("Bob".into(), contact.to_record());
        assert_eq!(rebuilt, contact);
    }

    #[test]
    fn test_touch_keeps_created_at() {
        let mut contact = Contact::new("Alice", "5551234567", None, None, "Work", at(1));
        contact.touch(at(5));
        assert_eq!(contact.created_at, at(1));
        assert_eq!(contact.updated_at, at(5));
    }

    #[test]
    fn test_touch_never_precedes_created_at() {
        let mut contact = Contact::new("Alice", "5551234567", None, None, "Work", at(5));
        contact.touch(at(2));
        assert_eq!(contact.updated_at, at(5));
        assert!(contact.validate().is_ok());
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let contact = Contact::new("Natalie", "5551234567", None, None, "Work", at(1));
        assert!(contact.name_contains("ALI"));
        assert!(contact.name_contains(""));
        assert!(!contact.name_contains("bob"));
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut contact = Contact::new("Alice", "5551234567", None, None, "Work", at(2));

        contact.phone = "555-123".into();
        assert!(matches!(
            contact.validate(),
            Err(ContactValidationError::InvalidPhone(_))
        ));

        contact.phone = "5551234567".into();
        contact.email = Some("nope".into());
        assert!(matches!(
            contact.validate(),
            Err(ContactValidationError::InvalidEmail(_))
        ));

        contact.email = None;
        contact.updated_at = at(1);
        assert_eq!(
            contact.validate(),
            Err(ContactValidationError::UpdatedBeforeCreated)
        );
    }

    #[test]
    fn test_record_serializes_in_field_order_with_nulls() {
        let contact = Contact::new("Alice", "5551234567", None, None, "Other", at(1));
        let json = serde_json::to_string(&contact.to_record()).unwrap();
        assert_eq!(
            json,
            r#"{"phone":"5551234567","email":null,"address":null,"group":"Other","created_at":"2025-01-01T10:30:00","updated_at":"2025-01-01T10:30:00"}"#
        );
    }

    #[test]
    fn test_record_accepts_fractional_seconds_and_missing_optionals() {
        let json = r#"{"phone":"5551234567","group":"Work","created_at":"2025-01-01T10:30:00.123456","updated_at":"2025-01-02T08:00:00"}"#;
        let record: ContactRecord = serde_json::from_str(json).unwrap();
        assert!(record.email.is_none());
        assert!(record.address.is_none());
        assert!(record.updated_at > record.created_at);
    }
}
