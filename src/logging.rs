//! Log setup. The terminal belongs to the TUI, so records go to a file in
//! the platform cache directory instead of stderr.

use crate::engine::config::{LoggingConfig, APP_DIR};
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

/// Environment variable overriding the configured log level.
pub const LOG_ENV: &str = "SPEEDREAD_LOG";

pub fn parse_level(value: &str) -> Option<Level> {
    value.trim().parse().ok()
}

pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join("speedread.log"))
}

/// Installs the global subscriber and returns the log file path, or `None`
/// when the file cannot be created (logging is then disabled).
pub fn init(config: &LoggingConfig) -> Option<PathBuf> {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| parse_level(&value))
        .or_else(|| parse_level(&config.level))
        .unwrap_or(Level::INFO);

    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = File::create(&path).ok()?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .ok()?;

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(Level::DEBUG));
        assert_eq!(parse_level(" WARN "), Some(Level::WARN));
        assert_eq!(parse_level("loud"), None);
    }
}
