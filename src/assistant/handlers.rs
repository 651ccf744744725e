//! Command handlers for the assistant.
//!
//! Each handler takes the parsed arguments and the address book, calls into
//! the core, and returns the reply text. Errors are turned into user-facing
//! messages by [`render_error`].

use crate::book::AddressBook;
use crate::domain::ValidationError;
use crate::error::BookError;
use crate::models::Record;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors a handler can report back to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// The command was given too few arguments
    #[error("Missing argument")]
    MissingArgument,

    /// The address book rejected the operation
    #[error(transparent)]
    Book(#[from] BookError),
}

/// Result type for handlers: reply text or an error to render.
pub type HandlerResult = Result<String, AssistantError>;

/// Turn a handler error into the message shown to the user.
pub fn render_error(err: &AssistantError) -> String {
    let message = match err {
        AssistantError::MissingArgument => "Enter the argument for the command.",
        AssistantError::Book(BookError::Validation(ValidationError::InvalidName(_))) => {
            "Name can only contain letters."
        }
        AssistantError::Book(BookError::Validation(ValidationError::InvalidPhone(_))) => {
            "Phone number must be 10 digits."
        }
        AssistantError::Book(BookError::Validation(ValidationError::InvalidBirthday(_))) => {
            "Invalid date format. Use DD.MM.YYYY."
        }
        AssistantError::Book(BookError::ContactNotFound(_)) => "Contact not found.",
        AssistantError::Book(BookError::PhoneNotFound(_)) => "Phone not found.",
    };
    message.to_string()
}

/// Take the first `N` arguments, failing if fewer were given.
fn required<'a, const N: usize>(args: &[&'a str]) -> Result<[&'a str; N], AssistantError> {
    args.get(..N)
        .and_then(|slice| <[&str; N]>::try_from(slice).ok())
        .ok_or(AssistantError::MissingArgument)
}

fn record_mut<'a>(
    book: &'a mut AddressBook,
    name: &str,
) -> Result<&'a mut Record, AssistantError> {
    book.find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()).into())
}

fn record<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record, AssistantError> {
    book.find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()).into())
}

/// `add <name> <phone>`: create the contact or append a phone to it.
///
/// A new contact is only stored once its phone is valid.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> HandlerResult {
    let [name, phone] = required::<2>(args)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> HandlerResult {
    let [name, old, new] = required::<3>(args)?;
    record_mut(book, name)?.edit_phone(old, new)?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`: the contact's phones, comma separated.
pub fn show_phone(args: &[&str], book: &AddressBook) -> HandlerResult {
    let [name] = required::<1>(args)?;
    let phones = record(book, name)?
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(phones)
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> HandlerResult {
    let [name, date] = required::<2>(args)?;
    record_mut(book, name)?.add_birthday(date)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> HandlerResult {
    let [name] = required::<1>(args)?;
    match record(book, name)?.birthday() {
        Some(birthday) => Ok(format!("Birthday for {}: {}", name, birthday)),
        None => Ok(format!("Birthday not set for {}.", name)),
    }
}

/// `birthdays`: upcoming congratulation dates, one per line.
pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: u32) -> HandlerResult {
    let upcoming = book.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays.".to_string());
    }
    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `all`: every contact, one per line.
pub fn show_all(book: &AddressBook) -> HandlerResult {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }
    Ok(book.to_string())
}

/// `delete <name>`
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> HandlerResult {
    let [name] = required::<1>(args)?;
    book.delete(name)?;
    Ok("Contact deleted.".to_string())
}
