//! Main menu loop
//!
//! A single "awaiting choice" state: read a line, dispatch it, repeat until
//! the user exits. Running out of input is treated the same as choosing Exit.

use std::io::{BufRead, Write};

use crate::config::ContactPaths;
use crate::display::{banner, double_separator};
use crate::error::ContactResult;
use crate::services::ContactStore;

use super::console::Console;
use super::contact::{
    add_contact, delete_contact, export_contacts, list_contacts, saved_notice, search_contact,
    show_statistics, update_contact,
};

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Search,
    Update,
    Delete,
    List,
    Export,
    Statistics,
    Exit,
}

impl MenuChoice {
    /// All entries, in menu order
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::Add,
        MenuChoice::Search,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::List,
        MenuChoice::Export,
        MenuChoice::Statistics,
        MenuChoice::Exit,
    ];

    /// Parse a menu selection; only the exact numbers 1-8 are accepted
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Search),
            "3" => Some(MenuChoice::Update),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::List),
            "6" => Some(MenuChoice::Export),
            "7" => Some(MenuChoice::Statistics),
            "8" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add New Contact",
            MenuChoice::Search => "Search Contact",
            MenuChoice::Update => "Update Contact",
            MenuChoice::Delete => "Delete Contact",
            MenuChoice::List => "View All Contacts",
            MenuChoice::Export => "Export to CSV",
            MenuChoice::Statistics => "View Statistics",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Format the main menu
fn format_menu() -> String {
    let mut output = String::new();
    output.push('\n');
    output.push_str(&banner("MAIN MENU", 30));
    output.push('\n');
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, choice.label()));
    }
    output.push_str(&double_separator(30));
    output.push('\n');
    output
}

/// Run the interactive menu until the user exits
///
/// Storage failures end the loop with an error; everything else is reported
/// to the user and the loop continues.
pub fn run_menu<R: BufRead, W: Write>(
    store: &mut ContactStore,
    paths: &ContactPaths,
    console: &mut Console<R, W>,
) -> ContactResult<()> {
    console.say(banner("CONTACT MANAGEMENT SYSTEM", 50))?;
    if !store.storage().exists() {
        console.say("\nNo existing contacts file found. Starting fresh.\n")?;
    }

    loop {
        write!(console.out(), "{}", format_menu())?;

        let result = match console.prompt_raw("Enter your choice (1-8): ") {
            Ok(input) => match MenuChoice::parse(&input) {
                Some(choice) => dispatch(choice, store, paths, console),
                None => console.say("Invalid choice!").map(|()| true),
            },
            Err(e) => Err(e),
        };

        match result {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) if e.is_input_closed() => {
                tracing::debug!("Input closed, exiting");
                break;
            }
            Err(e) => return Err(e),
        }
    }

    store.save()?;
    saved_notice(store, console)?;
    console.say(format!(
        "\n{}\n{}\n{}",
        double_separator(50),
        "Thank you for using Contact Management System!",
        double_separator(50)
    ))
}

/// Run the handler for `choice`; returns `false` once the user asks to exit
fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    store: &mut ContactStore,
    paths: &ContactPaths,
    console: &mut Console<R, W>,
) -> ContactResult<bool> {
    let handled = match choice {
        MenuChoice::Add => add_contact(store, console),
        MenuChoice::Search => search_contact(store, console),
        MenuChoice::Update => update_contact(store, console),
        MenuChoice::Delete => delete_contact(store, console),
        MenuChoice::List => list_contacts(store, console),
        MenuChoice::Export => export_contacts(store, paths, console),
        MenuChoice::Statistics => show_statistics(store, console),
        MenuChoice::Exit => return Ok(false),
    };
    handled.map(|()| true)
}
