//! Error types for kvconf

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`ConfigStore`](crate::store::ConfigStore) operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Opening, reading, creating, writing or flushing a file failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Caller passed an argument the store refuses, e.g. an empty key
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ConfigError>;
