//! Command parsing for the TUI command deck
//!
//! Supports:
//! - `:q` or `:quit` → Quit command
//! - `:h` or `:help` → Help command
//! - `:close` → Close the open document
//! - `:wpm N` → Set the reading rate
//! - `:seek P` → Jump to P percent of the document
//! - `@filename.pdf`, `@filename.epub`, `@filename.txt` → Load file command

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    Close,
    SetRate(u32),
    Seek(i64),
    LoadFile(String),
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let mut parts = cmd.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let argument = parts.next();
        if parts.next().is_some() {
            return Command::Unknown(input.to_string());
        }

        match (name, argument) {
            ("q" | "quit", None) => Command::Quit,
            ("h" | "help", None) => Command::Help,
            ("close", None) => Command::Close,
            ("wpm", Some(value)) => match value.parse::<u32>() {
                Ok(rate) if rate > 0 => Command::SetRate(rate),
                _ => Command::Unknown(input.to_string()),
            },
            ("seek", Some(value)) => match value.trim_end_matches('%').parse::<i64>() {
                Ok(percent) => Command::Seek(percent),
                Err(_) => Command::Unknown(input.to_string()),
            },
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() {
            Command::Unknown(input.to_string())
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
///
/// This is the translation layer between command deck input and App core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::Close => AppEvent::Close,
        Command::SetRate(rate) => AppEvent::SetRate(rate),
        Command::Seek(percent) => AppEvent::Seek(percent),
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}
