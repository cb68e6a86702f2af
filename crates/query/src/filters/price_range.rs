//! Filter on the price slider's inclusive bounds.

use crate::traits::Filter;
use crate::types::PriceRange;
use catalog::Course;

/// Keeps courses priced within `[min, max]`, both ends inclusive.
///
/// An inverted range is not corrected; it keeps nothing.
pub struct PriceRangeFilter {
    range: PriceRange,
}

impl PriceRangeFilter {
    pub fn new(range: PriceRange) -> Self {
        Self { range }
    }
}

impl Filter for PriceRangeFilter {
    fn name(&self) -> &str {
        "PriceRangeFilter"
    }

    fn matches(&self, course: &Course) -> bool {
        self.range.contains(course.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::course;

    #[test]
    fn test_price_range_filter_bounds_inclusive() {
        let courses = vec![
            course(1, "A", 9.99, 4.0),
            course(2, "A", 10.0, 4.0),
            course(3, "A", 50.0, 4.0),
            course(4, "A", 50.01, 4.0),
        ];
        let refs: Vec<&Course> = courses.iter().collect();

        let filter = PriceRangeFilter::new(PriceRange::new(10.0, 50.0));
        let ids: Vec<_> = filter.apply(refs).iter().map(|c| c.id).collect();

        assert_eq!(ids, [2, 3]);
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let courses = vec![course(1, "A", 75.0, 4.0), course(2, "A", 100.0, 4.0)];
        let refs: Vec<&Course> = courses.iter().collect();

        let filter = PriceRangeFilter::new(PriceRange::new(150.0, 50.0));
        assert!(filter.apply(refs).is_empty());
    }
}
