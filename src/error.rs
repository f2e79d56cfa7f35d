//! Error types for semilla.

use std::path::PathBuf;

/// Result type alias for semilla operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in semilla operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        /// The path where the error occurred, if known.
        path: Option<PathBuf>,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A row is shorter than the requested column index.
    #[error("Column index {index} out of bounds for row with {len} fields")]
    IndexOutOfBounds {
        /// The requested column index.
        index: usize,
        /// The actual number of fields in the offending row.
        len: usize,
    },

    /// Shape mismatch between aligned data sources.
    #[error("Shape mismatch: {message}")]
    ShapeMismatch {
        /// Description of the shape mismatch.
        message: String,
    },

    /// An image file exists but cannot be decoded.
    #[error("Decode error at {path:?}: {source}")]
    Decode {
        /// The path of the undecodable image.
        path: PathBuf,
        /// The underlying decode error.
        #[source]
        source: image::ImageError,
    },

    /// Parse error.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },
}

impl Error {
    /// Create an I/O error with a path context.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// Create an I/O error without path context.
    pub fn io_no_path(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }

    /// Create a shape mismatch error.
    pub fn shape_mismatch(message: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            message: message.into(),
        }
    }

    /// Create a decode error with the offending path.
    pub fn decode(source: image::ImageError, path: impl Into<PathBuf>) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}
