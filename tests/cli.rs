//! CLI integration tests for the contact book
//!
//! These tests run the real binary with a scripted stdin session inside a
//! temporary working directory.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command instance for the contacts binary
fn contacts_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("contacts"))
}

/// Run one scripted session in `dir`
fn run_session(dir: &TempDir, script: &str) -> assert_cmd::assert::Assert {
    contacts_cmd()
        .current_dir(dir.path())
        .write_stdin(script)
        .assert()
}

// =============================================================================
// Startup and exit
// =============================================================================

#[test]
fn test_fresh_start_and_exit() {
    let dir = TempDir::new().unwrap();

    run_session(&dir, "8\n")
        .success()
        .stdout(predicate::str::contains("CONTACT MANAGEMENT SYSTEM"))
        .stdout(predicate::str::contains("Starting fresh"))
        .stdout(predicate::str::contains(
            "Thank you for using Contact Management System!",
        ));

    let stored = fs::read_to_string(dir.path().join("contacts_data.json")).unwrap();
    assert_eq!(stored, "{}");
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    run_session(&dir, "")
        .success()
        .stdout(predicate::str::contains("Thank you"));
}

#[test]
fn test_help_flag() {
    contacts_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("contact book"));
}

// =============================================================================
// Contact management
// =============================================================================

#[test]
fn test_add_persists_across_sessions() {
    let dir = TempDir::new().unwrap();

    run_session(&dir, "1\nAlice\n(555) 123-4567\nalice@example.com\n\nWork\n8\n")
        .success()
        .stdout(predicate::str::contains("Contact 'Alice' added successfully!"));

    let stored: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("contacts_data.json")).unwrap())
            .unwrap();
    assert_eq!(stored["Alice"]["phone"], "5551234567");
    assert_eq!(stored["Alice"]["email"], "alice@example.com");
    assert!(stored["Alice"]["address"].is_null());
    assert_eq!(stored["Alice"]["group"], "Work");

    run_session(&dir, "5\n8\n")
        .success()
        .stdout(predicate::str::contains("(1 total)"))
        .stdout(predicate::str::contains("5551234567"))
        .stdout(predicate::str::contains("Starting fresh").not());
}

#[test]
fn test_delete_missing_contact() {
    let dir = TempDir::new().unwrap();

    run_session(&dir, "4\nGhost\n8\n")
        .success()
        .stdout(predicate::str::contains("Contact not found!"));
}

#[test]
fn test_export_and_statistics() {
    let dir = TempDir::new().unwrap();
    let script = "\
1\nAlice\n5551234567\n\n\nWork\n\
1\nBob\n5559876543\n\n\nWork\n\
1\nCarol\n5550001111\n\n12 Oak Road, Springfield\nFamily\n\
6\n7\n8\n";

    run_session(&dir, script)
        .success()
        .stdout(predicate::str::contains("Total Contacts: 3"))
        .stdout(predicate::str::contains("Work: 2 contact(s)"))
        .stdout(predicate::str::contains("Family: 1 contact(s)"))
        .stdout(predicate::str::contains("Recently Updated (last 7 days): 3"));

    let csv = fs::read_to_string(dir.path().join("contacts.csv")).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "Name,Phone,Email,Address,Group");
    assert_eq!(lines[3], "Carol,5550001111,,\"12 Oak Road, Springfield\",Family");
}

#[test]
fn test_export_failure_keeps_session_running() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("contacts.csv")).unwrap();

    run_session(&dir, "6\n5\n8\n")
        .success()
        .stdout(predicate::str::contains("Export failed:"))
        .stdout(predicate::str::contains("No contacts available."))
        .stdout(predicate::str::contains("Thank you"));

    assert!(dir.path().join("contacts_data.json").exists());
}

#[test]
fn test_invalid_utf8_input_is_tolerated() {
    let dir = TempDir::new().unwrap();

    contacts_cmd()
        .current_dir(dir.path())
        .write_stdin(b"\xff\n1\nAl\xffice\n5551234567\n\n\nWork\n8\n".to_vec())
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice!"))
        .stdout(predicate::str::contains("added successfully"))
        .stdout(predicate::str::contains("Thank you"));

    let stored: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("contacts_data.json")).unwrap())
            .unwrap();
    assert_eq!(stored["Al\u{FFFD}ice"]["phone"], "5551234567");
}

#[test]
fn test_corrupt_storage_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("contacts_data.json"), "{ not json").unwrap();

    run_session(&dir, "8\n")
        .failure()
        .stderr(predicate::str::contains("Failed to parse"));

    assert_eq!(
        fs::read_to_string(dir.path().join("contacts_data.json")).unwrap(),
        "{ not json"
    );
}
