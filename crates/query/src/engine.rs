//! The course query engine: filter, then sort, then paginate.
//!
//! `apply` is a pure function of its arguments. It never fails, keeps no
//! state between calls, and returns the same output for the same input.

use crate::filter_pipeline::FilterPipeline;
use crate::paginate::{page_bounds, total_pages, visible_pages};
use crate::sort::sort_courses;
use crate::types::{CourseQuery, FilterSpec, PageSpec, SortSpec};
use catalog::Course;
use tracing::debug;

/// One page of query results plus paging metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<'a> {
    /// Courses on the requested page, in sorted order
    pub items: Vec<&'a Course>,
    /// Courses passing the filter, independent of sort and page
    pub total_matched: usize,
    pub total_pages: usize,
    /// The page that was requested, echoed back for rendering
    pub page: PageSpec,
}

impl<'a> QueryResult<'a> {
    /// Build a result from the full filtered-and-ordered list
    pub fn from_ordered(ordered: Vec<&'a Course>, page: PageSpec) -> Self {
        let total_matched = ordered.len();
        let (start, end) = page_bounds(total_matched, page);
        let items = ordered[start..end].to_vec();

        Self {
            items,
            total_matched,
            total_pages: total_pages(total_matched, page.page_size),
            page,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 1-based `(first, last)` item numbers on this page, for
    /// "Showing X to Y of Z". `None` when the page is empty.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let (start, end) = page_bounds(self.total_matched, self.page);
        Some((start + 1, end))
    }

    /// Page buttons to show around the current page
    pub fn visible_pages(&self) -> Vec<usize> {
        visible_pages(self.page.page_index, self.total_pages)
    }
}

/// Courses passing `filter`, in input order
pub fn filter_courses<'a>(courses: &'a [Course], filter: &FilterSpec) -> Vec<&'a Course> {
    FilterPipeline::from_spec(filter).apply(courses.iter().collect())
}

/// Run a query over `courses`.
///
/// # Arguments
/// * `courses` - The full course list, in catalog order
/// * `filter` - Category, price and rating constraints
/// * `sort` - Field and direction; ties keep catalog order
/// * `page` - Requested window, not validated against the result size
///
/// # Returns
/// The requested page of the filtered, sorted courses with
/// `total_matched` and `total_pages`
pub fn apply<'a>(
    courses: &'a [Course],
    filter: &FilterSpec,
    sort: SortSpec,
    page: PageSpec,
) -> QueryResult<'a> {
    let filtered = filter_courses(courses, filter);
    let sorted = sort_courses(filtered, sort);
    let result = QueryResult::from_ordered(sorted, page);

    debug!(
        "Query {} page {}/{}: {} of {} courses matched",
        sort,
        page.page_index,
        result.total_pages,
        result.total_matched,
        courses.len()
    );
    result
}

/// Number of filter dimensions currently narrowing results
pub fn active_filter_count(filter: &FilterSpec) -> usize {
    filter.active_filter_count()
}

impl CourseQuery {
    /// Run this query over `courses`; see [`apply`]
    pub fn run<'a>(&self, courses: &'a [Course]) -> QueryResult<'a> {
        apply(courses, &self.filter, self.sort, self.page)
    }
}
