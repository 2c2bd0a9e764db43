// Configuration for the speedread engine and UI
// Every field has a default so a partial (or missing) config file still works

use crate::engine::error::ConfigError;
use crate::input::MAX_DOCUMENT_BYTES;
use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Directory name used under the platform config and cache directories.
pub const APP_DIR: &str = "speedread";

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SPEEDREAD_CONFIG";

/// Playback defaults and the bounds of the rate controls.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    /// Words per minute when a document is opened (default 250)
    pub wpm: u32,

    /// Bounds for the rate keys (default 100..=1000)
    pub min_wpm: u32,
    pub max_wpm: u32,

    /// Rate change per keypress (default 50)
    pub wpm_step: u32,

    /// Rates bound to the number keys 1-4
    pub presets: Vec<u32>,

    /// Words jumped by the skip keys (default 10)
    pub skip_words: u32,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            wpm: 250,
            min_wpm: 100,
            max_wpm: 1000,
            wpm_step: 50,
            presets: vec![200, 300, 500, 800],
            skip_words: 10,
        }
    }
}

impl ReadingConfig {
    /// Allowed rate range. Never contains zero, even with a bogus config.
    pub fn wpm_range(&self) -> RangeInclusive<u32> {
        let min = self.min_wpm.max(1);
        min..=self.max_wpm.max(min)
    }

    pub fn clamp_wpm(&self, wpm: u32) -> u32 {
        let range = self.wpm_range();
        wpm.clamp(*range.start(), *range.end())
    }

    pub fn initial_wpm(&self) -> u32 {
        self.clamp_wpm(self.wpm)
    }

    /// Applies `steps` rate increments (negative to slow down) to `wpm`.
    pub fn step_wpm(&self, wpm: u32, steps: i32) -> u32 {
        let target = i64::from(wpm) + i64::from(steps) * i64::from(self.wpm_step);
        let range = self.wpm_range();
        target.clamp(i64::from(*range.start()), i64::from(*range.end())) as u32
    }

    pub fn preset(&self, index: usize) -> Option<u32> {
        self.presets
            .get(index)
            .copied()
            .filter(|&wpm| wpm > 0)
    }
}

/// Ingestion limits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Largest accepted document, in megabytes (default 50)
    pub max_size_mb: u64,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            max_size_mb: MAX_DOCUMENT_BYTES / BYTES_PER_MB,
        }
    }
}

impl DocumentConfig {
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_mb.saturating_mul(BYTES_PER_MB)
    }
}

/// Terminal colors as `#RRGGBB` strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub background: String,
    pub text: String,
    pub accent: String,
    pub dimmed: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: "#1A1B26".to_string(),
            text: "#A9B1D6".to_string(),
            accent: "#F7768E".to_string(),
            dimmed: "#646E96".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Master configuration combining all speedread settings
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reading: ReadingConfig,
    pub document: DocumentConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `$SPEEDREAD_CONFIG`, or `<config_dir>/speedread/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml")),
        }
    }

    /// Loads the user's config file. A missing file is not an error and
    /// yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(path),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.reading.wpm, 250);
        assert_eq!(config.reading.wpm_range(), 100..=1000);
        assert_eq!(config.reading.skip_words, 10);
        assert_eq!(config.reading.presets, vec![200, 300, 500, 800]);
        assert_eq!(config.document.max_size_bytes(), 50 * 1024 * 1024);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = Config::from_toml_str(
            r##"
            [reading]
            wpm = 400

            [theme]
            accent = "#FF0000"
            "##,
        )
        .unwrap();
        assert_eq!(config.reading.wpm, 400);
        assert_eq!(config.reading.wpm_step, 50);
        assert_eq!(config.theme.accent, "#FF0000");
        assert_eq!(config.theme.text, "#A9B1D6");
        assert_eq!(config.document, DocumentConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(Config::from_toml_str("[reading]\nwpm = \"fast\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[document]\nmax_size_mb = 5").unwrap();
        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.document.max_size_bytes(), 5 * 1024 * 1024);
    }

    #[test]
    fn test_load_from_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_load_from_bad_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is not toml").unwrap();
        let result = Config::load_from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_clamp_wpm() {
        let reading = ReadingConfig::default();
        assert_eq!(reading.clamp_wpm(20), 100);
        assert_eq!(reading.clamp_wpm(5000), 1000);
        assert_eq!(reading.clamp_wpm(300), 300);
    }

    #[test]
    fn test_step_wpm_stays_in_range() {
        let reading = ReadingConfig::default();
        assert_eq!(reading.step_wpm(250, 1), 300);
        assert_eq!(reading.step_wpm(250, -1), 200);
        assert_eq!(reading.step_wpm(100, -1), 100);
        assert_eq!(reading.step_wpm(1000, 3), 1000);
    }

    #[test]
    fn test_degenerate_range_never_allows_zero() {
        let reading = ReadingConfig {
            min_wpm: 0,
            max_wpm: 0,
            ..ReadingConfig::default()
        };
        assert_eq!(reading.wpm_range(), 1..=1);
        assert_eq!(reading.initial_wpm(), 1);
    }

    #[test]
    fn test_preset_lookup() {
        let reading = ReadingConfig::default();
        assert_eq!(reading.preset(0), Some(200));
        assert_eq!(reading.preset(3), Some(800));
        assert_eq!(reading.preset(4), None);
    }
}
