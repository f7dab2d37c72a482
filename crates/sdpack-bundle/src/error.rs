//! Error types for bundle operations.

use crate::Rejection;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while generating a bundle.
#[derive(Debug, Error)]
pub enum BundleError {
    /// I/O error on a specific path.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The pack failed validation.
    #[error("Invalid iconpack {name}: {reason}")]
    InvalidPack { name: String, reason: Rejection },

    /// An icon path cannot be stored in the index.
    #[error("Invalid icon path: {0}")]
    InvalidIconPath(String),
}

impl BundleError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// `map_err` adapter attaching `path` to an I/O error.
pub(crate) fn at(path: &Path) -> impl FnOnce(std::io::Error) -> BundleError + '_ {
    move |source| BundleError::io(path, source)
}
