//! Ordering of filtered courses.
//!
//! Ties are always broken by input position, in both directions: descending
//! reverses the key comparison only, never the tie-break. Each course is
//! tagged with its position before sorting so the result does not depend on
//! which sort algorithm runs underneath.

use crate::types::{SortField, SortOrder, SortSpec};
use catalog::Course;
use std::cmp::Ordering;

/// Compare two courses on a single field, ascending.
///
/// Titles compare lower-cased; numeric fields use a total order so the
/// comparison is defined for every value.
pub fn compare_by_field(field: SortField, a: &Course, b: &Course) -> Ordering {
    match field {
        SortField::Rating => a.rating.total_cmp(&b.rating),
        SortField::Price => a.price.total_cmp(&b.price),
        SortField::Students => a.students.cmp(&b.students),
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    }
}

/// Sort courses by `spec`, keeping input order among equal keys.
pub fn sort_courses<'a>(courses: Vec<&'a Course>, spec: SortSpec) -> Vec<&'a Course> {
    let mut tagged: Vec<(usize, &'a Course)> = courses.into_iter().enumerate().collect();

    tagged.sort_unstable_by(|(pos_a, a), (pos_b, b)| {
        let by_key = compare_by_field(spec.field, a, b);
        let by_key = match spec.order {
            SortOrder::Ascending => by_key,
            SortOrder::Descending => by_key.reverse(),
        };
        by_key.then_with(|| pos_a.cmp(pos_b))
    });

    tagged.into_iter().map(|(_, course)| course).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{course, titled};

    fn ids(courses: &[&Course]) -> Vec<u32> {
        courses.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_sort_by_price_ascending() {
        let courses = vec![
            course(1, "A", 75.0, 4.0),
            course(2, "A", 10.0, 4.0),
            course(3, "A", 200.0, 4.0),
        ];
        let sorted = sort_courses(courses.iter().collect(), SortSpec::ascending(SortField::Price));
        assert_eq!(ids(&sorted), [2, 1, 3]);
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let courses = vec![
            titled(1, "python basics"),
            titled(2, "Advanced CSS"),
            titled(3, "Branding 101"),
        ];
        let sorted = sort_courses(courses.iter().collect(), SortSpec::ascending(SortField::Title));
        assert_eq!(ids(&sorted), [2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let courses = vec![
            course(1, "A", 10.0, 4.5),
            course(2, "A", 10.0, 5.0),
            course(3, "A", 10.0, 4.5),
            course(4, "A", 10.0, 5.0),
        ];

        let desc = sort_courses(courses.iter().collect(), SortSpec::descending(SortField::Rating));
        assert_eq!(ids(&desc), [2, 4, 1, 3]);

        let asc = sort_courses(courses.iter().collect(), SortSpec::ascending(SortField::Rating));
        assert_eq!(ids(&asc), [1, 3, 2, 4]);
    }

    #[test]
    fn test_sort_by_students_descending() {
        let mut low = course(1, "A", 10.0, 4.0);
        low.students = 10;
        let mut high = course(2, "A", 10.0, 4.0);
        high.students = 50_000;

        let courses = vec![low, high];
        let sorted = sort_courses(courses.iter().collect(), SortSpec::descending(SortField::Students));
        assert_eq!(ids(&sorted), [2, 1]);
    }
}
