//! Line-command assistant on top of the address book.
//!
//! The assistant reads one command per line, dispatches it to a handler and
//! writes the reply. It owns nothing but its configuration: the address book
//! is passed in by the caller.

pub mod command;
pub mod handlers;

pub use command::{parse_input, Command};
pub use handlers::{render_error, AssistantError, HandlerResult};

use crate::book::AddressBook;
use crate::config::Config;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply (if any) and read the next line
    Continue(Option<String>),
    /// Print the reply and stop
    Exit(String),
}

/// Handle a single input line.
///
/// `today` is only consulted by the `birthdays` command.
pub fn dispatch(
    line: &str,
    book: &mut AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> Outcome {
    let Some((command, args)) = parse_input(line) else {
        return Outcome::Continue(None);
    };

    tracing::debug!(command = %command, args = args.len(), "Dispatching command");

    let result = match command {
        Command::Exit => return Outcome::Exit("Good bye!".to_string()),
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => handlers::add_contact(&args, book),
        Command::Change => handlers::change_contact(&args, book),
        Command::Phone => handlers::show_phone(&args, book),
        Command::AddBirthday => handlers::add_birthday(&args, book),
        Command::ShowBirthday => handlers::show_birthday(&args, book),
        Command::Birthdays => handlers::birthdays(book, today, window_days),
        Command::All => handlers::show_all(book),
        Command::Delete => handlers::delete_contact(&args, book),
        Command::Unknown(_) => Ok("Invalid command.".to_string()),
    };

    let reply = result.unwrap_or_else(|err| {
        tracing::debug!(command = %command, error = %err, "Command failed");
        render_error(&err)
    });
    Outcome::Continue(Some(reply))
}

/// Run the read-eval-print loop until `exit`/`close` or end of input.
///
/// `today` is called for every line, so a long session keeps up with the
/// calendar.
pub fn run<R, W, F>(
    book: &mut AddressBook,
    config: &Config,
    today: F,
    mut input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut line = String::new();
    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            tracing::info!("End of input, leaving assistant loop");
            writeln!(output)?;
            break;
        }

        match dispatch(&line, book, today(), config.birthday_window_days) {
            Outcome::Continue(Some(reply)) => writeln!(output, "{}", reply)?,
            Outcome::Continue(None) => {}
            Outcome::Exit(reply) => {
                writeln!(output, "{}", reply)?;
                break;
            }
        }
    }

    Ok(())
}
