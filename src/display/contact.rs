//! Contact display formatting

use crate::models::Contact;

use super::{double_separator, separator};

/// Format the full contact listing, including the total count header
pub fn format_contact_list<'a>(contacts: impl ExactSizeIterator<Item = &'a Contact>) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n--- ALL CONTACTS ({} total) ---\n", contacts.len()));
    output.push_str(&double_separator(60));
    output.push('\n');

    if contacts.len() == 0 {
        output.push_str("No contacts available.\n");
        return output;
    }

    for contact in contacts {
        output.push_str(&format!("Name:  {}\n", contact.name));
        output.push_str(&format!("  Phone: {}\n", contact.phone));
        if let Some(email) = &contact.email {
            output.push_str(&format!("  Email: {}\n", email));
        }
        output.push_str(&format!("  Group: {}\n", contact.group));
        output.push_str(&separator(40));
        output.push('\n');
    }

    output
}

/// Format numbered search results
pub fn format_search_results(results: &[&Contact]) -> String {
    if results.is_empty() {
        return "No contacts found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("\nFound {} contact(s):\n", results.len()));
    output.push_str(&separator(50));
    output.push('\n');

    for (i, contact) in results.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, contact.name));
        output.push_str(&format!("   Phone: {}\n", contact.phone));
        if let Some(email) = &contact.email {
            output.push_str(&format!("   Email: {}\n", email));
        }
        if let Some(address) = &contact.address {
            output.push_str(&format!("   Address: {}\n", address));
        }
        output.push_str(&format!("   Group: {}\n\n", contact.group));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn contact(name: &str, email: Option<&str>, address: Option<&str>) -> Contact {
        let at = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Contact::new(
            name,
            "5551234567",
            email.map(String::from),
            address.map(String::from),
            "Work",
            at,
        )
    }

    #[test]
    fn test_empty_list() {
        let contacts: Vec<Contact> = Vec::new();
        let output = format_contact_list(contacts.iter());
        assert!(output.contains("(0 total)"));
        assert!(output.contains("No contacts available."));
    }

    #[test]
    fn test_list_shows_email_only_when_present() {
        let contacts = vec![
            contact("Alice", Some("alice@example.com"), Some("1 Main St")),
            contact("Bob", None, None),
        ];
        let output = format_contact_list(contacts.iter());

        assert!(output.contains("(2 total)"));
        assert!(output.contains("Email: alice@example.com"));
        assert_eq!(output.matches("Email:").count(), 1);
        assert!(!output.contains("1 Main St"));
        assert!(output.find("Alice").unwrap() < output.find("Bob").unwrap());
    }

    #[test]
    fn test_search_results_numbered() {
        let alice = contact("Alice", None, Some("1 Main St"));
        let natalie = contact("Natalie", None, None);
        let output = format_search_results(&[&alice, &natalie]);

        assert!(output.contains("Found 2 contact(s):"));
        assert!(output.contains("1. Alice"));
        assert!(output.contains("2. Natalie"));
        assert!(output.contains("Address: 1 Main St"));
    }

    #[test]
    fn test_search_no_results() {
        assert_eq!(format_search_results(&[]), "No contacts found.\n");
    }
}
