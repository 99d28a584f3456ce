//! Game-specific error types.
//!
//! Systems report problems through [`GameError`] rather than panicking.  Only
//! two things can go wrong in this game: a sprite fails to load (fatal, the
//! app exits) or the optional tuning file is unusable (the compiled defaults
//! stay in effect).

use std::fmt;

/// Top-level error enum.
#[derive(Debug)]
pub enum GameError {
    /// A static image asset could not be loaded at startup.
    AssetLoad {
        /// Asset path relative to the asset root.
        path: String,
        /// Loader-provided reason.
        reason: String,
    },

    /// The tuning file exists but could not be read.
    ConfigRead {
        /// Path of the config file.
        path: &'static str,
        source: std::io::Error,
    },

    /// The tuning file is not valid TOML for [`crate::config::GameConfig`].
    ConfigParse {
        /// Path of the config file.
        path: &'static str,
        source: toml::de::Error,
    },

    /// A config value is outside the range the simulation can handle.
    InvalidConfig {
        /// Name of the offending field.
        name: &'static str,
        /// The value that was rejected.
        value: f64,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::AssetLoad { path, reason } => {
                write!(f, "failed to load asset '{}': {}", path, reason)
            }
            GameError::ConfigRead { path, source } => {
                write!(f, "failed to read {}: {}", path, source)
            }
            GameError::ConfigParse { path, source } => {
                write!(f, "failed to parse {}: {}", path, source)
            }
            GameError::InvalidConfig {
                name,
                value,
                expected,
            } => write!(
                f,
                "config value '{}' = {} is outside accepted range {}",
                name, value, expected
            ),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::ConfigRead { source, .. } => Some(source),
            GameError::ConfigParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;
