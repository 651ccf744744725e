//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Format used both to parse birthdays and to render report dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A birthday in `DD.MM.YYYY` form.
///
/// Keeps the raw input for display and the parsed date for calendar
/// arithmetic.
///
/// # Example
///
/// ```
/// use chrono::Datelike;
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("05.03.1990").unwrap();
/// assert_eq!(birthday.as_str(), "05.03.1990");
/// assert_eq!(birthday.date().month(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday.
    ///
    /// # Validation Rules
    ///
    /// - Exactly `DD.MM.YYYY`: two-digit day, two-digit month, four-digit year
    /// - Must name a real calendar date (`31.04.2020` and `29.02.2023` fail)
    /// - Year must be at least 1
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` otherwise.
    pub fn new(date: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = date.into();

        match Self::parse(&raw) {
            Some(date) => Ok(Self { raw, date }),
            None => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    fn parse(raw: &str) -> Option<NaiveDate> {
        let bytes = raw.as_bytes();
        if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
            return None;
        }

        let digits_ok = bytes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != 2 && *i != 5)
            .all(|(_, b)| b.is_ascii_digit());
        if !digits_ok {
            return None;
        }

        let day: u32 = raw[0..2].parse().ok()?;
        let month: u32 = raw[3..5].parse().ok()?;
        let year: i32 = raw[6..10].parse().ok()?;
        if year < 1 {
            return None;
        }

        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Get the birthday exactly as it was entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
