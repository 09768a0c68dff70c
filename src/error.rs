//! Error types for wintree

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = WintreeError> = std::result::Result<T, E>;

/// Every failure is terminal for the invocation that hit it.
#[derive(Debug, Error)]
pub enum WintreeError {
    #[error("invalid starting path '{path}': {source}")]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error finding files: cannot read '{path}': {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error finding files: {0}")]
    Walk(#[from] ignore::Error),

    #[error("failed to write to output file '{path}': {source}")]
    Sink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WintreeError {
    pub(crate) fn traversal(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Traversal {
            path: path.into(),
            source,
        }
    }
}
