//! End-to-end tests driving the interactive session.
//!
//! These mirror what the binary does: load the directory, run the loop over
//! a scripted input, then save.

mod fixtures;
mod mocks;

use contact_book::commands::repl;
use contact_book::repositories::DirectoryRepository;
use contact_book::{CommandHandler, Config};
use fixtures::{date, sample_directory};
use mocks::MockDirectoryRepository;

/// Run a full load → session → save cycle and return everything printed.
fn run_session(repo: &MockDirectoryRepository, handler: &CommandHandler, script: &str) -> String {
    let mut directory = repo.load().unwrap();
    let mut output = Vec::new();
    repl::run(script.as_bytes(), &mut output, &mut directory, handler, || {
        date(2024, 3, 10)
    })
    .unwrap();
    repo.save(&directory).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_contacts_survive_between_sessions() {
    let repo = MockDirectoryRepository::new();
    let handler = CommandHandler::default();

    run_session(
        &repo,
        &handler,
        "add Ann 1111111111\nadd-birthday Ann 15.03.1990\nexit\n",
    );
    let output = run_session(&repo, &handler, "show Ann\nbirthdays\nclose\n");

    assert!(output.contains("Contact name: Ann, phones: 1111111111, birthday: 15.03.1990"));
    assert!(output.contains("Ann: 2024.03.15"));
    assert_eq!(repo.get_call_count("load"), 2);
    assert_eq!(repo.get_call_count("save"), 2);
}

#[test]
fn test_domain_errors_are_reported_not_fatal() {
    let repo = MockDirectoryRepository::with_directory(sample_directory());
    let handler = CommandHandler::default();

    let output = run_session(
        &repo,
        &handler,
        "add-birthday Ann 01.01.2000\n\
         add Bob 12\n\
         delete Nobody\n\
         change Bob 9999999999 1234567890\n\
         add-birthday Bob 31.04.1990\n\
         frobnicate\n\
         add\n\
         all\n\
         exit\n",
    );

    assert!(output.contains("Only one birthday can be added."));
    assert!(output.contains("Phone number must be 10 digits, got: 12."));
    assert!(output.contains("Contact not found."));
    assert!(output.contains("Phone not found."));
    assert!(output.contains("Birthday must have format day.month.year, got: 31.04.1990."));
    assert!(output.contains("Invalid command."));
    assert!(output.contains("Usage: add <name> <phone>"));
    assert!(output.contains("Bob: 2222222222; 3333333333; 2222222222"));
    assert!(output.trim_end().ends_with("Good bye!"));

    // Nothing above changed the stored data.
    assert_eq!(repo.stored().unwrap(), sample_directory());
}

#[test]
fn test_birthday_window_comes_from_config() {
    let repo = MockDirectoryRepository::with_directory(sample_directory());
    let config = Config {
        birthday_window_days: 2,
        ..Config::default()
    };
    let handler = CommandHandler::from_config(&config);

    // Ann (15 March) is five days out: outside the configured window,
    // inside an explicit one.
    let output = run_session(&repo, &handler, "birthdays\nbirthdays 5\nexit\n");
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines.iter().any(|l| l.ends_with("No upcoming birthdays.")));
    assert!(lines.iter().any(|l| l.ends_with("Ann: 2024.03.15")));
}

#[test]
fn test_search_and_delete_flow() {
    let repo = MockDirectoryRepository::with_directory(sample_directory());
    let handler = CommandHandler::default();

    let output = run_session(
        &repo,
        &handler,
        "search bob\nsearch 3333333333\ndelete Bob\nsearch bob\nexit\n",
    );

    assert_eq!(output.matches("Bob: 2222222222; 3333333333; 2222222222").count(), 2);
    assert!(output.contains("Contact 'Bob' deleted."));
    assert!(output.contains("No matches found."));
    assert!(repo.stored().unwrap().find("Bob").is_none());
}
