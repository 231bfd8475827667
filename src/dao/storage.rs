use std::{io, path::PathBuf};

use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends while reading or writing the game collection.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing file exists but could not be read.
    #[error("failed to read `{}`", .path.display())]
    Read {
        /// File or directory that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// Writing or replacing the backing file failed.
    #[error("failed to write `{}`", .path.display())]
    Write {
        /// File or directory that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The backing file does not hold a JSON array of games.
    #[error("failed to decode games from `{}`", .path.display())]
    Decode {
        /// File holding the unreadable document.
        path: PathBuf,
        /// Parser error with line and column.
        #[source]
        source: serde_json::Error,
    },
    /// The in-memory collection could not be serialized.
    #[error("failed to encode games")]
    Encode {
        /// Serializer error.
        #[source]
        source: serde_json::Error,
    },
    /// The backend refused the operation for a reason of its own.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
