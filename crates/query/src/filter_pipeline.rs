//! Composes course filters into one pass over the catalog.

use crate::filters::{CategoryFilter, MinimumRatingFilter, PriceRangeFilter};
use crate::traits::Filter;
use crate::types::FilterSpec;
use catalog::Course;
use tracing::debug;

/// Ordered list of filters; a course must pass all of them.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(CategoryFilter::new(categories))
///     .add_filter(PriceRangeFilter::new(PriceRange::new(0.0, 150.0)))
///     .add_filter(MinimumRatingFilter::new(4.0));
///
/// let filtered = pipeline.apply(catalog.courses().iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Pipeline with no filters, which keeps everything
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard category, price and rating pipeline for a spec
    pub fn from_spec(spec: &FilterSpec) -> Self {
        Self::new()
            .add_filter(CategoryFilter::new(spec.categories.clone()))
            .add_filter(PriceRangeFilter::new(spec.price_range))
            .add_filter(MinimumRatingFilter::new(spec.min_rating))
    }

    /// Append a filter; filters run in the order added
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Whether a single course passes every filter
    pub fn matches(&self, course: &Course) -> bool {
        self.filters.iter().all(|filter| filter.matches(course))
    }

    /// Apply all filters in sequence to the courses.
    ///
    /// Every filter keeps relative order, so the result is a stable
    /// subsequence of the input.
    pub fn apply<'a>(&self, courses: Vec<&'a Course>) -> Vec<&'a Course> {
        let mut current = courses;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current);
            debug!(
                "Filter {}: {} -> {} courses",
                filter.name(),
                before,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::MinimumRatingFilter;
    use crate::test_support::course;

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        let courses = vec![course(1, "A", 10.0, 1.0), course(2, "B", 300.0, 5.0)];

        let filtered = pipeline.apply(courses.iter().collect());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(MinimumRatingFilter::new(4.0));
        let courses = vec![course(1, "A", 10.0, 3.5), course(2, "B", 10.0, 4.5)];

        let filtered = pipeline.apply(courses.iter().collect());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn test_pipeline_from_spec_matches_each_clause() {
        let spec = FilterSpec::default()
            .with_categories(["A"])
            .with_price_range(10.0, 100.0)
            .with_min_rating(4.0);
        let pipeline = FilterPipeline::from_spec(&spec);

        assert!(pipeline.matches(&course(1, "A", 10.0, 4.0)));
        assert!(pipeline.matches(&course(2, "A", 100.0, 5.0)));
        assert!(!pipeline.matches(&course(3, "B", 50.0, 4.5)));
        assert!(!pipeline.matches(&course(4, "A", 100.5, 4.5)));
        assert!(!pipeline.matches(&course(5, "A", 50.0, 3.99)));
    }
}
