//! Error types for the storefront crate.

use catalog::CourseId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Detail page requested for an id that isn't in the catalog
    #[error("Course {0} not found")]
    CourseNotFound(CourseId),

    /// Preference file could not be read or written
    #[error("Preference file {path:?}: {reason}")]
    Preferences { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
