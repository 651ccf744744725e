//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! its name, phone numbers and birthday. These value objects validate at
//! construction time so invalid data can never be stored in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
