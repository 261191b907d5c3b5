//! Error types for the catalog crate.
//!
//! Loading is all-or-nothing: any of these errors aborts the load and no
//! partial catalog is ever returned.

use thiserror::Error;

/// Errors that can occur while loading and validating the camp dataset
///
/// Rust concept: The `#[derive(Error)]` macro from thiserror implements
/// `std::error::Error` and `Display` from the `#[error(...)]` attributes
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Data file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A payload was not valid JSON or did not have the expected shape
    #[error("Malformed JSON in {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record was structurally valid JSON but unusable
    ///
    /// `record` is the position of the camp within the `camps` array
    #[error("Parse error at record {record} in {file}: {reason}")]
    ParseError {
        file: String,
        record: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two camps share the same identifier
    #[error("Duplicate camp id: {id}")]
    DuplicateId { id: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
