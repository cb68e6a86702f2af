//! Error types for the catalog crate.
//!
//! The dataset is trusted to be well-formed, so the only failures are the
//! ones that stop us from reading or indexing it at all.

use crate::types::CourseId;
use thiserror::Error;

/// Errors that can occur while loading the course data file
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Data file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not a JSON array of course records
    #[error("Parse error in {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// Two records share a primary key, so the id index can't be built
    #[error("Duplicate course id {id}")]
    DuplicateId { id: CourseId },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
