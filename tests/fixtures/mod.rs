//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable records and dates so each test file can
//! build an address book in one line.

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_book::{AddressBook, Record};

/// Monday 10 June 2024, the reference "today" for birthday scenarios.
pub fn reference_today() -> NaiveDate {
    date(2024, 6, 10)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Create a record with the given phones.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).expect("valid fixture name");
    for phone in phones {
        record.add_phone(*phone).expect("valid fixture phone");
    }
    record
}

/// Create a record with a birthday and no phones.
pub fn record_with_birthday(name: &str, birthday: &str) -> Record {
    let mut record = Record::new(name).expect("valid fixture name");
    record
        .add_birthday(birthday)
        .expect("valid fixture birthday");
    record
}

/// Build an address book from records, in order.
pub fn book_of(records: impl IntoIterator<Item = Record>) -> AddressBook {
    let mut book = AddressBook::new();
    for record in records {
        book.add_record(record);
    }
    book
}
