pub mod config;
pub mod error;
pub mod playback;
pub mod timing;

pub use config::Config;
pub use error::{ConfigError, TokenizeError};
pub use playback::{PlaybackController, PlaybackStatus, Snapshot};
pub use timing::{wpm_to_interval, wpm_to_milliseconds, Ticker};
