//! Error types for the data preparation routines

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while reading or batching a corpus.
#[derive(Error, Debug)]
pub enum Error {
    /// A caller-supplied argument is out of range or unrecognised
    /// (unknown corpus side, zero batch size, mismatched corpora)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The corpus file is missing or could not be read
    #[error("Cannot read corpus '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
