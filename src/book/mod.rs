//! The address book: records keyed by contact name.
//!
//! Records are only reachable through [`AddressBook`]'s methods, so every
//! key always equals the name of the record stored under it.

pub mod birthdays;

pub use birthdays::{upcoming_birthdays, UpcomingBirthday, DEFAULT_WINDOW_DAYS};

use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;

/// An in-memory, insertion-ordered collection of contact records.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    /// Keys in insertion order
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name.
    ///
    /// A record with the same name is replaced without error; the entry keeps
    /// its original position in iteration order.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_some() {
            tracing::trace!(name = %key, "Replaced record");
        } else {
            tracing::trace!(name = %key, "Added record");
            self.order.push(key);
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for in-place changes.
    ///
    /// The name of a record cannot change, so handing out `&mut Record`
    /// keeps keys and names in sync.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if there is no such record.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        self.order.retain(|key| key != name);
        tracing::trace!(name = %name, "Deleted record");
        Ok(record)
    }

    /// Iterate over all records in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Number of records stored.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Upcoming birthdays within `window_days` of `today`.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(self.values(), today, window_days)
    }

    /// Upcoming birthdays in the next week, rendered as `"{name}: DD.MM.YYYY"`.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<String> {
        self.upcoming_birthdays(today, DEFAULT_WINDOW_DAYS)
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
