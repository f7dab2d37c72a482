//! Error types for sdpack configuration

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error type for loading and validating a [`PackConfig`](crate::PackConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has wrongly typed fields
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Unknown log level name
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),

    /// Bundle extension cannot be used as a directory suffix
    #[error("invalid bundle extension {extension:?}: {reason}")]
    InvalidExtension { extension: String, reason: String },
}
