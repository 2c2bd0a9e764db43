use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Raised when cleaning leaves nothing to play back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("no readable text could be extracted from the document")]
    NoExtractableText,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_extractable_text_message() {
        let message = TokenizeError::NoExtractableText.to_string();
        assert!(message.contains("no readable text"));
    }

    #[test]
    fn test_config_read_error_names_path() {
        let err = ConfigError::Read {
            path: PathBuf::from("/etc/speedread.toml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/etc/speedread.toml"));
    }
}
