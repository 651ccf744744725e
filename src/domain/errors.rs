//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty or contains non-letter characters.
    InvalidName(String),

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => {
                write!(f, "Invalid name: {} (name can only contain letters)", name)
            }
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number: {} (must be 10 digits)", phone)
            }
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid birthday: {} (use DD.MM.YYYY)", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
