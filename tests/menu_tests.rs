//! End-to-end menu session tests
//!
//! Each test scripts a complete interactive session through an injected
//! reader/writer pair and checks the transcript, without spawning a process.

use std::io::Cursor;

use libris::{
    menu::{ListFormat, Menu},
    repository::Repository,
    services::Services,
};
use pretty_assertions::assert_eq;

const MENU: &str = "Menu\n1. Add Book\n2. Remove Book\n3. List All Books\n4. Rent Book\n5. Return Book\n6. Add User\n7. Remove User\n8. Exit\nEnter choice: ";

fn run_session_with(input: &str, format: ListFormat) -> (Services, String) {
    let services = Services::new(Repository::new());
    let mut output = Vec::new();
    let mut menu = Menu::new(
        services.clone(),
        Cursor::new(input.to_string()),
        &mut output,
        format,
    );
    menu.run().expect("menu session failed");
    (services, String::from_utf8(output).expect("non-utf8 output"))
}

fn run_session(input: &str) -> String {
    run_session_with(input, ListFormat::Text).1
}

#[test]
fn test_exit_prints_menu_once() {
    let output = run_session("8\n");
    assert_eq!(output, MENU);
}

#[test]
fn test_eof_terminates_like_exit() {
    let output = run_session("");
    assert_eq!(output, MENU);
}

#[test]
fn test_eof_mid_prompt_terminates() {
    // Input ends while Add Book is still collecting fields.
    let output = run_session("1\nDune\n");
    assert_eq!(output, format!("{MENU}Title: Author Name: "));
}

#[test]
fn test_add_then_list_exact_transcript() {
    let output = run_session("1\nDune\nHerbert\nSci-Fi\n3\n8\n");
    let expected = format!(
        "{MENU}Title: Author Name: Category: \
         {MENU}Books in the Library:\n\
         Title: Dune, Author: Herbert, Category: Sci-Fi, Available: true\n\
         {MENU}"
    );
    assert_eq!(output, expected);
}

#[test]
fn test_rent_success_then_not_available() {
    let input = "1\nDune\nHerbert\nSci-Fi\n\
                 6\nAda\nada@example.org\n\
                 4\ndune\nADA@example.org\n\
                 4\nDune\nada@example.org\n\
                 8\n";
    let (services, output) = run_session_with(input, ListFormat::Text);

    assert!(output.contains("Book 'Dune' rented successfully.\nBook 'dune' rented by Ada\n"));
    assert!(output.contains("Book 'Dune' is not available for rent.\n"));

    let books = services.catalog.list_books();
    assert!(!books[0].available);
}

#[test]
fn test_rent_missing_book_or_user_same_message() {
    let input = "1\nDune\nHerbert\nSci-Fi\n\
                 6\nAda\nada@example.org\n\
                 4\nNeuromancer\nada@example.org\n\
                 4\nDune\nnobody@example.org\n\
                 8\n";
    let output = run_session(input);
    assert_eq!(output.matches("Book or user not found.\n").count(), 2);
}

#[test]
fn test_return_with_rating_updates_balance() {
    let input = "1\nDune\nHerbert\nSci-Fi\n\
                 6\nAda\nada@example.org\n\
                 4\nDune\nada@example.org\n\
                 5\nDune\n4.5\n\
                 8\n";
    let (services, output) = run_session_with(input, ListFormat::Text);

    assert!(output.contains("Book 'Dune' returned successfully. Thank you for rating.\n"));
    assert!(output.contains("Library balance updated. Current balance: 4.5\n"));
    assert_eq!(services.rentals.balance(), "4.5".parse::<rust_decimal::Decimal>().unwrap());
    assert!(services.catalog.list_books()[0].available);
}

#[test]
fn test_return_without_rating_skips_balance_line() {
    let input = "1\nDune\nHerbert\nSci-Fi\n\
                 5\nDune\n\n\
                 8\n";
    let (services, output) = run_session_with(input, ListFormat::Text);

    assert!(output.contains("Book 'Dune' returned successfully.\n"));
    assert!(!output.contains("Thank you for rating"));
    assert!(!output.contains("Library balance updated"));
    assert_eq!(services.rentals.balance(), rust_decimal::Decimal::ZERO);
}

#[test]
fn test_invalid_rating_degrades_to_no_rating() {
    let input = "1\nDune\nHerbert\nSci-Fi\n\
                 5\nDune\nfive stars\n\
                 8\n";
    let (services, output) = run_session_with(input, ListFormat::Text);

    assert!(output.contains("Invalid rating. Skipping...\n"));
    assert!(output.contains("Book 'Dune' returned successfully.\n"));
    assert_eq!(services.rentals.balance(), rust_decimal::Decimal::ZERO);
}

#[test]
fn test_return_missing_book() {
    let output = run_session("5\nDune\n\n8\n");
    assert!(output.contains("Book not found.\n"));
}

#[test]
fn test_remove_book_case_insensitive_and_missing() {
    let input = "1\nDune\nHerbert\nSci-Fi\n\
                 2\nDUNE\n\
                 2\nDUNE\n\
                 8\n";
    let (services, output) = run_session_with(input, ListFormat::Text);

    assert!(output.contains("Removed: DUNE\n"));
    assert!(output.contains("Not found: DUNE\n"));
    assert!(services.catalog.list_books().is_empty());
}

#[test]
fn test_remove_user_echoes_email_as_typed() {
    let input = "6\nAda\nada@example.org\n\
                 7\nADA@EXAMPLE.ORG\n\
                 7\nada@example.org\n\
                 8\n";
    let output = run_session(input);

    assert!(output.contains("Removed user: ADA@EXAMPLE.ORG\n"));
    assert!(output.contains("User not found: ada@example.org\n"));
}

#[test]
fn test_invalid_choice_reprompts() {
    let output = run_session("9\n8\n");
    assert_eq!(output, format!("{MENU}Invalid choice. Try again.\n{MENU}"));
}

#[test]
fn test_json_listing() {
    let input = "1\nDune\nHerbert\nSci-Fi\n3\n8\n";
    let (_, output) = run_session_with(input, ListFormat::Json);

    assert!(output.contains("\"title\": \"Dune\""));
    assert!(output.contains("\"author\": \"Herbert\""));
    assert!(output.contains("\"category\": \"Sci-Fi\""));
    assert!(output.contains("\"available\": true"));
    assert!(!output.contains("Books in the Library:"));
}

#[test]
fn test_balance_accumulates_across_returns() {
    let input = "1\nDune\nHerbert\nSci-Fi\n\
                 1\nEmma\nAusten\nClassic\n\
                 5\nDune\n4.5\n\
                 5\nEmma\n0.5\n\
                 5\nDune\n\n\
                 8\n";
    let (services, output) = run_session_with(input, ListFormat::Text);

    assert!(output.contains("Library balance updated. Current balance: 4.5\n"));
    assert!(output.contains("Library balance updated. Current balance: 5.0\n"));
    assert_eq!(services.rentals.balance(), "5.0".parse::<rust_decimal::Decimal>().unwrap());
}
