//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's display name and directory key.
///
/// Spaces are ignored while validating, but the stored value keeps them, so
/// `"Mary Ann"` is stored as `"Mary Ann"`.
///
/// # Example
///
/// ```
/// use contact_book::domain::ContactName;
///
/// let name = ContactName::new("Mary Ann").unwrap();
/// assert_eq!(name.as_str(), "Mary Ann");
/// assert!(ContactName::new("R2D2").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` when nothing but spaces is
    /// given, or when any other character is not alphabetic.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !Self::is_valid(&name) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(name))
    }

    fn is_valid(name: &str) -> bool {
        let mut letters = name.chars().filter(|c| *c != ' ').peekable();
        letters.peek().is_some() && letters.all(char::is_alphabetic)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
