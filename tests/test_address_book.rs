//! Integration tests for records and the address book.
//!
//! These follow the life of a contact through the public API: creation,
//! phone edits, birthdays and deletion.

mod fixtures;
use fixtures::*;

use contact_book::{AddressBook, BookError, PhoneNumber, Record, ValidationError};

fn phones(record: &Record) -> Vec<&str> {
    record.phones().iter().map(PhoneNumber::as_str).collect()
}

#[test]
fn test_contact_lifecycle() {
    let mut book = book_of([
        sample_record("John", &["1234567890", "5555555555"]),
        sample_record("Jane", &["9876543210"]),
    ]);

    assert_eq!(
        book.to_string(),
        "Contact name: John, phones: 1234567890; 5555555555\n\
         Contact name: Jane, phones: 9876543210"
    );

    let john = book.find_mut("John").unwrap();
    john.edit_phone("1234567890", "1112223333").unwrap();
    assert_eq!(
        john.to_string(),
        "Contact name: John, phones: 5555555555; 1112223333"
    );

    let john = book.find("John").unwrap();
    let found = john.find_phone("5555555555").unwrap();
    assert_eq!(format!("{}: {}", john.name(), found), "John: 5555555555");

    book.delete("Jane").unwrap();
    assert!(book.find("Jane").is_none());
    assert_eq!(book.len(), 1);
}

#[test]
fn test_edit_phone_unknown_old_phone_is_not_found() {
    let mut record = sample_record("John", &["1234567890", "5555555555"]);

    let err = record.edit_phone("0000000000", "1112223333").unwrap_err();

    assert_eq!(err, BookError::PhoneNotFound("0000000000".to_string()));
    assert_eq!(phones(&record), vec!["1234567890", "5555555555"]);
}

#[test]
fn test_delete_unknown_on_empty_book() {
    let mut book = AddressBook::new();
    let err = book.delete("Unknown").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_keys_match_record_names() {
    let book = book_of([
        sample_record("Mary Ann", &["1111111111"]),
        sample_record("Bob", &[]),
    ]);

    for record in book.values() {
        let stored = book.find(record.name().as_str()).unwrap();
        assert_eq!(stored.name(), record.name());
    }
    assert!(book.find("Mary Ann").is_some());
    assert!(book.find("MaryAnn").is_none());
}

#[test]
fn test_overwrite_discards_previous_record() {
    let mut book = book_of([sample_record("John", &["1111111111"])]);
    let mut replacement = sample_record("John", &["2222222222"]);
    replacement.add_birthday("01.01.1990").unwrap();

    book.add_record(replacement);

    let john = book.find("John").unwrap();
    assert_eq!(phones(john), vec!["2222222222"]);
    assert_eq!(john.birthday().unwrap().as_str(), "01.01.1990");
}

#[test]
fn test_validation_errors_surface_unchanged() {
    assert_eq!(
        Record::new("Anna 2").unwrap_err(),
        BookError::Validation(ValidationError::InvalidName("Anna 2".to_string()))
    );

    let mut record = sample_record("Anna", &[]);
    assert_eq!(
        record.add_birthday("29.02.2023").unwrap_err(),
        BookError::Validation(ValidationError::InvalidBirthday("29.02.2023".to_string()))
    );
    record.add_birthday("29.02.2024").unwrap();
    assert_eq!(record.birthday().unwrap().as_str(), "29.02.2024");
}
