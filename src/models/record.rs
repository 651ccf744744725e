//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, its phone numbers in insertion order, and an
/// optional birthday.
///
/// The name is fixed at construction because the address book keys
/// records by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,

    /// Phone numbers, duplicates allowed
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if `name` is not a valid contact name.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> BookResult<()> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if the record has no such phone.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace `old` with `new`.
    ///
    /// The new phone is appended before the old one is removed, so it ends up
    /// at the end of the list. On any error the record is left as it was.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if `old` is not present
    /// - `BookError::Validation` if `new` is not a valid phone
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> BookResult<()> {
        if self.find_phone(old).is_none() {
            return Err(BookError::PhoneNotFound(old.to_string()));
        }
        self.add_phone(new)?;
        self.remove_phone(old)
    }

    /// Set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, date: impl Into<String>) -> BookResult<()> {
        self.birthday = Some(Birthday::new(date)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn phones_of(record: &Record) -> Vec<&str> {
        record.phones().iter().map(PhoneNumber::as_str).collect()
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("John").unwrap();
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_new_invalid_name() {
        let err = Record::new("J0hn").unwrap_err();
        assert_eq!(
            err,
            BookError::Validation(ValidationError::InvalidName("J0hn".to_string()))
        );
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("1234567890").unwrap();
        assert_eq!(phones_of(&record), vec!["1234567890", "1234567890"]);
    }

    #[test]
    fn test_add_phone_invalid_leaves_record_unchanged() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        assert!(record.add_phone("12345").is_err());
        assert_eq!(phones_of(&record), vec!["1234567890"]);
    }

    #[test]
    fn test_find_phone() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("5555555555").unwrap();
        assert_eq!(
            record.find_phone("5555555555").map(PhoneNumber::as_str),
            Some("5555555555")
        );
        assert!(record.find_phone("1111111111").is_none());
    }

    #[test]
    fn test_remove_phone() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        record.remove_phone("1111111111").unwrap();
        assert_eq!(phones_of(&record), vec!["2222222222", "1111111111"]);

        let err = record.remove_phone("3333333333").unwrap_err();
        assert_eq!(err, BookError::PhoneNotFound("3333333333".to_string()));
    }

    #[test]
    fn test_edit_phone_moves_to_end() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();

        record.edit_phone("1234567890", "1112223333").unwrap();
        assert_eq!(phones_of(&record), vec!["5555555555", "1112223333"]);
    }

    #[test]
    fn test_edit_phone_missing_old_leaves_record_unchanged() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();

        let err = record.edit_phone("0000000000", "1112223333").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(phones_of(&record), vec!["1234567890"]);
    }

    #[test]
    fn test_edit_phone_invalid_new_leaves_record_unchanged() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();

        let err = record.edit_phone("1234567890", "bad").unwrap_err();
        assert!(matches!(err, BookError::Validation(_)));
        assert_eq!(phones_of(&record), vec!["1234567890"]);
    }

    #[test]
    fn test_add_birthday_replaces() {
        let mut record = Record::new("John").unwrap();
        record.add_birthday("01.01.1990").unwrap();
        record.add_birthday("02.02.1992").unwrap();
        assert_eq!(record.birthday().unwrap().as_str(), "02.02.1992");

        assert!(record.add_birthday("31.02.1992").is_err());
        assert_eq!(record.birthday().unwrap().as_str(), "02.02.1992");
    }

    #[test]
    fn test_record_display() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1112223333").unwrap();
        record.add_phone("5555555555").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1112223333; 5555555555"
        );

        record.add_birthday("05.03.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1112223333; 5555555555, birthday: 05.03.1990"
        );
    }

    #[test]
    fn test_record_display_without_phones() {
        let record = Record::new("Jane").unwrap();
        assert_eq!(record.to_string(), "Contact name: Jane, phones: ");
    }

    #[test]
    fn test_record_serialization() {
        let mut record = Record::new("Jane").unwrap();
        record.add_phone("9876543210").unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Jane","phones":["9876543210"]}"#);
    }

    #[test]
    fn test_record_deserialization_validates_fields() {
        let json = r#"{"name":"Jane","phones":["9876543210"],"birthday":"15.06.1990"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.birthday().unwrap().as_str(), "15.06.1990");

        let json = r#"{"name":"Jane","phones":["98765"]}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }
}
