//! Filter to keep only courses in the selected categories.
//!
//! Matching is exact and case-sensitive against the stored category.
//! Turning a route segment like `design` into `Design` is the caller's job.

use crate::traits::Filter;
use catalog::Course;
use std::collections::BTreeSet;

/// Keeps courses whose category is in the selected set.
///
/// ## Algorithm
/// An empty selection means "no restriction", so every course passes.
/// Otherwise a course passes iff its category is a member of the set.
pub struct CategoryFilter {
    categories: BTreeSet<String>,
}

impl CategoryFilter {
    /// Create a new CategoryFilter.
    ///
    /// # Arguments
    /// * `categories` - Selected category names; empty disables the filter
    pub fn new(categories: BTreeSet<String>) -> Self {
        Self { categories }
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn matches(&self, course: &Course) -> bool {
        self.categories.is_empty() || self.categories.contains(&course.category)
    }

    fn apply<'a>(&self, courses: Vec<&'a Course>) -> Vec<&'a Course> {
        if self.categories.is_empty() {
            return courses;
        }
        courses
            .into_iter()
            .filter(|course| self.categories.contains(&course.category))
            .collect()
    }
}
