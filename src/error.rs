//! Error types for the converter
//!
//! Provides unified error handling using thiserror.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

// == Format Error Enum ==
/// A record or payload that cannot be transformed.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Line has no `:` between size token and payload
    #[error("missing ':' separator")]
    MissingSeparator,

    /// Payload contains something other than '0' or '1'
    #[error("invalid binary digit {found:?} at position {position}")]
    InvalidBinaryDigit { found: char, position: usize },

    /// Line bytes are not valid UTF-8
    #[error("invalid UTF-8 in record: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// Payload is not valid even-length hexadecimal
    #[error("invalid hex payload: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

// == Convert Error Enum ==
/// Unified error type for a conversion run.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Bad or inconsistent command line arguments
    #[error("Usage error: {0}")]
    Usage(String),

    /// Input or output file could not be opened
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from the input failed mid-stream
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or flushing the output failed
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A line could not be transformed
    #[error("Malformed record on line {line}: {source}")]
    Format {
        line: usize,
        #[source]
        source: FormatError,
    },
}

impl ConvertError {
    // == Exit Code ==
    /// Process exit status for this failure.
    ///
    /// - `2` usage
    /// - `3` open, read or write failure
    /// - `4` malformed input
    pub fn exit_code(&self) -> u8 {
        match self {
            ConvertError::Usage(_) => 2,
            ConvertError::Open { .. } | ConvertError::Read { .. } | ConvertError::Write { .. } => 3,
            ConvertError::Format { .. } => 4,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the converter.
pub type Result<T> = std::result::Result<T, ConvertError>;
