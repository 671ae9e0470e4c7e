//! Contact menu handlers
//!
//! One handler per menu entry. Handlers prompt through a `Console`, act on
//! the `ContactStore`, and report the result to the user. Lookup and export
//! failures are reported and swallowed; storage failures propagate.

use std::io::{BufRead, Write};

use crate::config::ContactPaths;
use crate::display::{format_contact_list, format_search_results};
use crate::error::{ContactError, ContactResult};
use crate::export::export_contacts_csv_file;
use crate::models::contact::now;
use crate::reports::ContactStatistics;
use crate::services::{ContactStore, ContactUpdate, NewContact};
use crate::validation::{validate_email, validate_phone};

use super::console::Console;

/// Add a new contact, re-prompting until each required field is valid
pub fn add_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> ContactResult<()> {
    console.say("\n--- ADD NEW CONTACT ---")?;

    let name = console.prompt_until("Enter contact name: ", "Name cannot be empty!", |s| {
        (!s.is_empty()).then(|| s.to_string())
    })?;

    let phone = console.prompt_until("Enter phone number: ", "Invalid phone number!", validate_phone)?;

    let email = console.prompt_until(
        "Enter email (optional, press Enter to skip): ",
        "Invalid email format!",
        |s| (s.is_empty() || validate_email(s)).then(|| s.to_string()),
    )?;

    let address = console.prompt("Enter address (optional): ")?;
    let group = console.prompt("Enter group (Friends/Work/Family/Other): ")?;

    let input = NewContact {
        name: name.clone(),
        phone,
        email: Some(email),
        address: Some(address),
        group: Some(group),
    };
    store.add(input, now())?;

    console.say(format!("Contact '{}' added successfully!", name))?;
    saved_notice(store, console)
}

/// Search contacts by case-insensitive name substring
pub fn search_contact<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
) -> ContactResult<()> {
    let query = console.prompt_raw("Enter name to search: ")?;
    let results = store.search(&query);
    write!(console.out(), "{}", format_search_results(&results))?;
    Ok(())
}

/// Update a contact by exact name; blank answers keep the current value
pub fn update_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> ContactResult<()> {
    let name = console.prompt("Enter contact name to update: ")?;
    if !store.book().contains(&name) {
        console.say("Contact not found!")?;
        return Ok(());
    }

    console.say("Leave blank to keep existing value.")?;
    let changes = ContactUpdate {
        phone: Some(console.prompt("New phone number: ")?),
        email: Some(console.prompt("New email: ")?),
        address: Some(console.prompt("New address: ")?),
        group: Some(console.prompt("New group: ")?),
    };

    match store.update(&name, changes, now()) {
        Ok(outcome) => {
            for field in &outcome.ignored {
                console.say(format!("Invalid {} ignored; keeping existing value.", field))?;
            }
            console.say("Contact updated successfully!")?;
            saved_notice(store, console)
        }
        Err(e) if e.is_not_found() => console.say("Contact not found!"),
        Err(e) => Err(e),
    }
}

/// Delete a contact by exact name
pub fn delete_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> ContactResult<()> {
    let name = console.prompt("Enter contact name to delete: ")?;

    match store.delete(&name) {
        Ok(_) => {
            console.say("Contact deleted!")?;
            saved_notice(store, console)
        }
        Err(e) if e.is_not_found() => console.say("Contact not found!"),
        Err(e) => Err(e),
    }
}

/// List every contact in collection order
pub fn list_contacts<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
) -> ContactResult<()> {
    write!(console.out(), "{}", format_contact_list(store.book().iter()))?;
    Ok(())
}

/// Export every contact to the CSV export file
///
/// A failed export leaves the collection untouched, so it is reported and the
/// session carries on.
pub fn export_contacts<R: BufRead, W: Write>(
    store: &ContactStore,
    paths: &ContactPaths,
    console: &mut Console<R, W>,
) -> ContactResult<()> {
    let path = paths.export_file();
    match export_contacts_csv_file(store.book(), &path) {
        Ok(count) => console.say(format!(
            "Exported {} contact(s) to {}",
            count,
            display_name(&path)
        )),
        Err(e @ (ContactError::Export(_) | ContactError::Io(_))) => {
            tracing::warn!(path = %path.display(), error = %e, "CSV export failed");
            console.say(format!("Export failed: {}", e))
        }
        Err(e) => Err(e),
    }
}

/// Show collection statistics
pub fn show_statistics<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
) -> ContactResult<()> {
    let stats = ContactStatistics::generate(
        store.book(),
        now(),
        store.settings().recent_window_days,
    );
    write!(console.out(), "{}", stats.format_terminal())?;
    Ok(())
}

/// Tell the user the collection was written
pub(crate) fn saved_notice<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
) -> ContactResult<()> {
    console.say(format!(
        "Contacts saved to {}",
        display_name(store.storage().path())
    ))
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
