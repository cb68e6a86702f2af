//! Filter to ensure a minimum rating.
//!
//! Backs the "N+ stars" slider. A threshold of 0 lets every course through.

use crate::traits::Filter;
use catalog::Course;

/// Removes courses rated below a threshold.
///
/// ## Algorithm
/// Keep a course iff `course.rating >= min_rating`.
pub struct MinimumRatingFilter {
    min_rating: f64,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Inclusive lower bound, 0 to 5 in half-star steps in the UI
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn matches(&self, course: &Course) -> bool {
        course.rating >= self.min_rating
    }
}
