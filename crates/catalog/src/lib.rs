//! # Catalog Crate
//!
//! Loads the course data file into a read-only, indexed `Catalog`.
//!
//! ## Main Components
//!
//! - **types**: `Course`, `CategoryStats`, `Catalog`
//! - **parser**: Parse the JSON data file into `Course` records
//! - **index**: Build the id/category indices and category statistics
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/courses.json"))?;
//!
//! let course = catalog.get_course(1).unwrap();
//! let design = catalog.get_courses_by_category("Design");
//! println!("{} has {} siblings", course.title, design.len());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{Catalog, CategoryStats, Course, CourseId};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_course(id: CourseId) -> Course {
        Course {
            id,
            title: "Digital Marketing Strategy".to_string(),
            category: "Marketing".to_string(),
            price: 59.99,
            rating: 4.6,
            instructor: "Michael Brown".to_string(),
            description: "Grow an audience.".to_string(),
            image: "/images/marketing.jpg".to_string(),
            video_preview: None,
            duration: "18 hours".to_string(),
            students: 7200,
        }
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.categories().is_empty());
    }

    #[test]
    fn test_insert_course() {
        let mut catalog = Catalog::new();
        catalog.insert_course(sample_course(3)).unwrap();

        let retrieved = catalog.get_course(3).unwrap();
        assert_eq!(retrieved.id, 3);
        assert_eq!(retrieved.instructor, "Michael Brown");
        assert_eq!(catalog.get_courses_by_category("Marketing"), [3]);
    }

    #[test]
    fn test_empty_queries() {
        let catalog = Catalog::new();

        assert!(catalog.get_course(999).is_none());
        assert!(catalog.get_courses_by_category("Design").is_empty());
        assert!(catalog.get_category_stats("Design").is_none());
    }
}
