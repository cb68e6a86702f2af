//! Parser for the course data file.
//!
//! The data file is a JSON array of course objects:
//!
//! ```json
//! [
//!   { "id": 1, "title": "Complete Web Development Bootcamp",
//!     "category": "Programming", "price": 89.99, "rating": 4.8,
//!     "instructor": "Sarah Johnson", "description": "...",
//!     "image": "/images/web-dev.jpg", "duration": "42 hours",
//!     "students": 15420 }
//! ]
//! ```

use crate::error::{CatalogError, Result};
use crate::types::Course;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read and parse a course data file
pub fn parse_courses(path: &Path) -> Result<Vec<Course>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::IoError(e),
    })?;

    let file = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_courses_str(&content, &file)
}

/// Parse course records from an in-memory JSON string
///
/// `file` is only used to label errors.
pub fn parse_courses_str(content: &str, file: &str) -> Result<Vec<Course>> {
    serde_json::from_str(content).map_err(|e| CatalogError::ParseError {
        file: file.to_string(),
        reason: e.to_string(),
    })
}
