//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field failed validation; nothing was modified
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record is stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The record has no phone with the given value
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),
}

impl BookError {
    /// Whether this error reports a missing contact or phone.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ContactNotFound(_) | Self::PhoneNotFound(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
