//! Contact Book - Main entry point
//!
//! Runs the interactive assistant on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::{assistant, AddressBook, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only to keep the conversation on stdout)
    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Birthday window: {} days", config.birthday_window_days);

    let mut book = AddressBook::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    assistant::run(
        &mut book,
        &config,
        || chrono::Local::now().date_naive(),
        stdin.lock(),
        stdout.lock(),
    )?;

    info!("Assistant finished with {} contacts", book.len());
    Ok(())
}
