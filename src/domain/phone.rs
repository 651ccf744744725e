//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits every stored phone number has.
pub const PHONE_DIGITS: usize = 10;

/// A type-safe wrapper for phone numbers.
///
/// Only the bare ten-digit form is accepted: no country prefix, no
/// separators, no spaces.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the input is exactly
    /// ten ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    fn is_valid(phone: &str) -> bool {
        phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
