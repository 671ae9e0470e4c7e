//! Interactive command handlers
//!
//! This module contains the menu loop and one handler per menu entry,
//! bridging console input with the contact store.

pub mod console;
pub mod contact;
pub mod menu;

pub use console::Console;
pub use contact::{
    add_contact, delete_contact, export_contacts, list_contacts, search_contact,
    show_statistics, update_contact,
};
pub use menu::{run_menu, MenuChoice};
