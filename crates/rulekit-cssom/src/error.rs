//! Error types for the object model.

use std::path::PathBuf;

/// Result type alias for object model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or mutating stylesheets.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rule text could not be parsed.
    #[error("CSS parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// A rule index was outside the rule list.
    #[error("Rule index {index} is out of range for a list of {len} rules")]
    IndexOutOfRange { index: usize, len: usize },

    /// The stylesheet does not expose the requested operation.
    #[error("Operation not supported by this stylesheet: {0}")]
    NotSupported(&'static str),

    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document manifest could not be decoded.
    #[error("Invalid document manifest '{path}': {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create a parse error.
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create an index error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a manifest error.
    pub fn manifest(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Manifest {
            path: path.into(),
            source,
        }
    }
}
