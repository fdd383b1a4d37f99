//! Crate error type

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by walkers, aggregators, and path utilities.
///
/// The two variants separate caller bugs from environment failures:
/// `InvalidArgument` is raised before any traversal I/O begins, while `Io`
/// surfaces mid-stream at the point a directory listing fails.
#[derive(Error, Debug)]
pub enum Error {
    /// An input failed validation (bad pattern, empty separator, malformed
    /// entry, non-file URL).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An underlying filesystem operation failed.
    #[error("{}: {}", path.display(), source)]
    Io {
        /// The path at which the operation failed.
        path: PathBuf,
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for pathwalk operations.
pub type Result<T> = std::result::Result<T, Error>;
