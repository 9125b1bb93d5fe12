//! Hash table error definitions

use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

/// Hash table error types
#[derive(Debug)]
pub enum TableError {
    /// Operation invoked without a constructed table
    InvalidTable,
    /// Allocating an entry, a key/value copy or a bucket array failed
    OutOfMemory,
    /// Table configuration rejected by validation
    InvalidConfig(String),
    /// I/O error while loading or saving a configuration
    IoError(std::io::Error),
    /// Configuration could not be parsed or serialized
    ParseError(String),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidTable => write!(f, "Invalid table"),
            TableError::OutOfMemory => write!(f, "Out of memory"),
            TableError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            TableError::IoError(err) => write!(f, "I/O error: {}", err),
            TableError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl Error for TableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TableError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::IoError(err)
    }
}

impl From<TryReserveError> for TableError {
    fn from(_: TryReserveError) -> Self {
        TableError::OutOfMemory
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::ParseError(err.to_string())
    }
}

/// Result type for hash table operations
pub type TableResult<T> = Result<T, TableError>;
