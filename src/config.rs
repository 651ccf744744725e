//! Configuration management for the contact book assistant.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is read first if present.

use crate::book::DEFAULT_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Largest accepted birthday window.
const MAX_WINDOW_DAYS: u32 = 365;

/// Configuration for the assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Days ahead the `birthdays` command looks (default: 7)
    pub birthday_window_days: u32,

    /// Prompt printed before each command (default: "Enter a command: ")
    pub prompt: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: Look-ahead for upcoming birthdays (default: 7, max: 365)
    /// - `ASSISTANT_PROMPT`: Input prompt (default: "Enter a command: ")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;
        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or(defaults.prompt);

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            birthday_window_days,
            prompt,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            prompt: "Enter a command: ".to_string(),
            log_level: "error".to_string(),
        }
    }
}
