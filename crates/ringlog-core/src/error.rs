//! Error types for ringlog

use std::path::PathBuf;

/// ringlog error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Log file not available for {0}")]
    NoLogFileAvailable(String),

    #[error("Log not found for {0}")]
    LogNotFound(String),

    #[error("Log file does not exist: {0}")]
    FileNotFound(PathBuf),

    #[error("{attribute} not available for {path}")]
    MetadataUnavailable {
        path: PathBuf,
        attribute: &'static str,
    },

    #[error("Log queue is closed")]
    QueueClosed,

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias for ringlog
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::ConfigError(msg.into())
    }

    pub fn metadata(path: impl Into<PathBuf>, attribute: &'static str) -> Self {
        Error::MetadataUnavailable {
            path: path.into(),
            attribute,
        }
    }
}
