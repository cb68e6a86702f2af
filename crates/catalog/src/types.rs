//! Core domain types for the course catalog.
//!
//! A `Course` is an immutable record read from the data file. The `Catalog`
//! owns every course for the lifetime of the process and hands out shared
//! references; nothing mutates a course after load.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a course (primary key in the data file)
pub type CourseId = u32;

// =============================================================================
// Course
// =============================================================================

/// One purchasable learning unit in the catalog.
///
/// Field names follow the data file, which uses camelCase keys
/// (`videoPreview`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub category: String,
    /// Price in dollars, non-negative
    pub price: f64,
    /// Average rating in [0, 5]
    pub rating: f64,
    pub instructor: String,
    pub description: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_preview: Option<String>,
    /// Free-form length label such as "12 hours"
    pub duration: String,
    pub students: u32,
}

// =============================================================================
// Statistics Types
// =============================================================================

/// Precomputed statistics for one category
///
/// Computed once after load, used for the category overview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub course_count: u32,
    pub avg_rating: f64,
    pub total_students: u64,
    pub min_price: f64,
    pub max_price: f64,
}

// =============================================================================
// Catalog - read-only course store
// =============================================================================

/// Holds every course plus the indices used for lookups.
///
/// `courses` keeps file order; that order is the input order of every
/// query, so stable sorts fall back to it on ties.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) courses: Vec<Course>,

    /// Position of each course in `courses`
    pub(crate) id_index: HashMap<CourseId, usize>,

    /// Course ids per category, in file order
    pub(crate) category_index: HashMap<String, Vec<CourseId>>,
    /// Distinct categories in order of first appearance
    pub(crate) category_order: Vec<String>,

    pub(crate) category_stats: HashMap<String, CategoryStats>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            id_index: HashMap::new(),
            category_index: HashMap::new(),
            category_order: Vec::new(),
            category_stats: HashMap::new(),
        }
    }

    /// All courses, in file order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Get a course by ID
    pub fn get_course(&self, id: CourseId) -> Option<&Course> {
        self.id_index.get(&id).map(|&pos| &self.courses[pos])
    }

    /// Ids of all courses in a category (exact, case-sensitive match)
    ///
    /// Returns an empty slice for unknown categories
    pub fn get_courses_by_category(&self, category: &str) -> &[CourseId] {
        self.category_index
            .get(category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Distinct category names in order of first appearance
    pub fn categories(&self) -> &[String] {
        &self.category_order
    }

    /// Get precomputed statistics for a category
    pub fn get_category_stats(&self, category: &str) -> Option<&CategoryStats> {
        self.category_stats.get(category)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
