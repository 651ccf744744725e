//! Contact Book - an in-memory address book with a line-command assistant.
//!
//! Contacts carry a validated name, any number of ten-digit phone numbers and
//! an optional birthday. The book can report whose birthday falls within the
//! next week, moving weekend dates to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The contact record aggregate
//! - **book**: The address book and the upcoming birthday query
//! - **error**: Error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **assistant**: Command parsing, handlers and the read-eval-print loop

pub mod assistant;
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, UpcomingBirthday};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::Record;
