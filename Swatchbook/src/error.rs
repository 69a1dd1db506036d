//! Error types for `Swatchbook`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `Swatchbook` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Argument Errors ====================
    /// A required argument was empty or not recognized.
    #[error("invalid argument '{name}': {message}")]
    InvalidArgument {
        /// The name of the offending argument.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// An index was outside the valid bounds for the operation.
    #[error("index {index} out of range for collection of length {len}")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// The collection length at the time of the call.
        len: usize,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    // ==================== Palette File Errors ====================
    /// The palette file does not exist.
    #[error("cannot find file '{}'", path.display())]
    FileNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// No registered serializer can handle the file.
    #[error("cannot find a palette serializer for '{}'", path.display())]
    UnsupportedFormat {
        /// The path that could not be resolved.
        path: PathBuf,
    },

    /// The palette data is malformed for its format.
    #[error("invalid {format} palette: {message}")]
    InvalidPalette {
        /// The format being decoded.
        format: &'static str,
        /// Description of what is invalid.
        message: String,
    },

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for [`Error::InvalidPalette`].
    pub(crate) fn invalid_palette(format: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidPalette {
            format,
            message: message.into(),
        }
    }
}

/// A specialized Result type for `Swatchbook` operations.
pub type Result<T> = std::result::Result<T, Error>;
