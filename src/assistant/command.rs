//! Command parsing for the assistant.

use std::fmt;

/// A command understood by the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    All,
    Delete,
    Exit,
    /// Anything else, kept for logging
    Unknown(String),
}

impl Command {
    /// Map a command token to a command, ignoring case.
    pub fn from_token(token: &str) -> Self {
        match token.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "all" => Self::All,
            "delete" => Self::Delete,
            "close" | "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::All => "all",
            Self::Delete => "delete",
            Self::Exit => "exit",
            Self::Unknown(token) => token.as_str(),
        };
        write!(f, "{}", name)
    }
}

/// Split a line into a command and its whitespace-separated arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(Command, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = Command::from_token(parts.next()?);
    Some((command, parts.collect()))
}
