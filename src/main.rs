use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use contact_book::cli::{run_menu, Console};
use contact_book::config::{ContactPaths, Settings};
use contact_book::services::ContactStore;
use contact_book::storage::ContactStorage;

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Terminal-based personal contact book",
    long_about = "An interactive, menu-driven contact book. Contacts are kept in \
                  contacts_data.json in the current directory and can be exported \
                  to contacts.csv."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Diagnostics go to stderr so the interactive transcript stays on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Initialize paths and settings
    let paths = ContactPaths::current_dir()?;
    let settings = Settings::load_or_create(&paths)?;

    // Load contacts
    let storage = ContactStorage::from_paths(&paths);
    let mut store = ContactStore::open(storage, settings)?;

    let mut console = Console::stdio();
    run_menu(&mut store, &paths, &mut console)?;

    Ok(())
}
