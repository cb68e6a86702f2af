//! # Storefront
//!
//! Everything a page of the catalog site needs, built on the query engine:
//! 1. Browse listing (filters, sort, pagination, or a shuffled order)
//! 2. Category pages reached by route segment
//! 3. Course detail with related courses
//! 4. Featured courses for the landing page
//! 5. Title and instructor search
//!
//! The catalog is shared behind an `Arc`, so a `Storefront` is cheap to
//! clone into concurrent request handlers.

use std::sync::Arc;
use std::time::Instant;

use catalog::{Catalog, Course, CourseId};
use query::{
    CourseQuery, FilterSpec, PageSpec, QueryResult, SortSpec, active_filter_count,
    filter_courses,
};
use tracing::{debug, info, instrument};

use crate::category::{category_description, resolve_category};
use crate::error::{Result, StorefrontError};

pub const DEFAULT_FEATURED_LIMIT: usize = 6;
pub const RELATED_COURSE_LIMIT: usize = 3;

/// Browse page: one page of results plus the counts shown around it
#[derive(Debug, Clone, PartialEq)]
pub struct CourseListing<'a> {
    pub result: QueryResult<'a>,
    /// Size of the whole catalog, for "N of M courses"
    pub catalog_size: usize,
    pub active_filters: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPage<'a> {
    /// Stored category label, e.g. `Personal Development`
    pub category: String,
    pub description: &'static str,
    pub result: QueryResult<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseDetail<'a> {
    pub course: &'a Course,
    /// Same category, excluding the course itself, catalog order
    pub related: Vec<&'a Course>,
}

/// How a search term matched a course
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    ExactTitle,
    Title,
    Instructor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub course: &'a Course,
    pub matched: MatchKind,
}

#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Arc<Catalog>,
}

impl Storefront {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run a browse query against the whole catalog
    #[instrument(skip(self, query), fields(sort = %query.sort))]
    pub fn browse(&self, query: &CourseQuery) -> CourseListing<'_> {
        let start_time = Instant::now();
        let result = query.run(self.catalog.courses());

        info!(
            "Browse page {}/{}: {} of {} courses in {:.2?}",
            query.page.page_index,
            result.total_pages,
            result.total_matched,
            self.catalog.len(),
            start_time.elapsed()
        );

        CourseListing {
            result,
            catalog_size: self.catalog.len(),
            active_filters: active_filter_count(&query.filter),
        }
    }

    /// Browse with the filtered courses in random order.
    ///
    /// Callers reset to page 1 after shuffling; the page passed here is
    /// used as given.
    pub fn browse_shuffled(&self, filter: &FilterSpec, page: PageSpec) -> CourseListing<'_> {
        let result = query::shuffle(self.catalog.courses(), filter, page);
        info!("Shuffled {} matching courses", result.total_matched);

        CourseListing {
            result,
            catalog_size: self.catalog.len(),
            active_filters: active_filter_count(filter),
        }
    }

    /// Category page for a route segment like `design`.
    ///
    /// An unknown category is not an error: the page is simply empty and
    /// carries the generic description.
    #[instrument(skip(self))]
    pub fn category_page(&self, route_param: &str, page: PageSpec) -> CategoryPage<'_> {
        let category = resolve_category(route_param, self.catalog.categories());
        let filter = FilterSpec::default().with_categories([category.as_str()]);
        let matched = filter_courses(self.catalog.courses(), &filter);
        let result = QueryResult::from_ordered(matched, page);

        debug!("Category {} has {} courses", category, result.total_matched);

        CategoryPage {
            description: category_description(&category),
            category,
            result,
        }
    }

    /// A course and up to three others from the same category
    #[instrument(skip(self))]
    pub fn course_detail(&self, id: CourseId) -> Result<CourseDetail<'_>> {
        let course = self
            .catalog
            .get_course(id)
            .ok_or(StorefrontError::CourseNotFound(id))?;

        let related: Vec<&Course> = self
            .catalog
            .get_courses_by_category(&course.category)
            .iter()
            .filter(|&&other| other != id)
            .filter_map(|&other| self.catalog.get_course(other))
            .take(RELATED_COURSE_LIMIT)
            .collect();

        debug!("Course {} has {} related courses", id, related.len());
        Ok(CourseDetail { course, related })
    }

    /// Highest-rated courses, ties in catalog order
    pub fn featured(&self, limit: usize) -> Vec<&Course> {
        query::apply(
            self.catalog.courses(),
            &FilterSpec::default(),
            SortSpec::default(),
            PageSpec::first(limit),
        )
        .items
    }

    /// Case-insensitive search over titles and instructors.
    ///
    /// Exact title matches come first, then everything else by rating
    /// descending. Equal keys keep catalog order.
    #[instrument(skip(self))]
    pub fn search(&self, term: &str, limit: usize) -> Vec<SearchHit<'_>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit<'_>> = self
            .catalog
            .courses()
            .iter()
            .filter_map(|course| {
                let title = course.title.to_lowercase();
                let matched = if title == needle {
                    MatchKind::ExactTitle
                } else if title.contains(&needle) {
                    MatchKind::Title
                } else if course.instructor.to_lowercase().contains(&needle) {
                    MatchKind::Instructor
                } else {
                    return None;
                };
                Some(SearchHit { course, matched })
            })
            .collect();

        hits.sort_by(|a, b| {
            let a_exact = a.matched == MatchKind::ExactTitle;
            let b_exact = b.matched == MatchKind::ExactTitle;
            b_exact
                .cmp(&a_exact)
                .then_with(|| b.course.rating.total_cmp(&a.course.rating))
        });
        hits.truncate(limit);

        info!("Search {:?} returned {} hits", term, hits.len());
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use query::{SortField, SortOrder};

    fn course(id: CourseId, title: &str, category: &str, rating: f64, instructor: &str) -> Course {
        Course {
            id,
            title: title.to_string(),
            category: category.to_string(),
            price: 10.0 * f64::from(id),
            rating,
            instructor: instructor.to_string(),
            description: format!("About {title}"),
            image: format!("/images/{id}.jpg"),
            video_preview: None,
            duration: "8 hours".to_string(),
            students: 1200,
        }
    }

    fn build_test_storefront() -> Storefront {
        let catalog = Catalog::from_courses(vec![
            course(1, "Rust Fundamentals", "Programming", 4.7, "Sarah Johnson"),
            course(2, "UI Design Basics", "Design", 4.5, "Mike Chen"),
            course(3, "Advanced Rust", "Programming", 4.9, "Sarah Johnson"),
            course(4, "Web APIs", "Programming", 4.7, "David Park"),
            course(5, "Rust", "Programming", 4.1, "Emma Wilson"),
            course(6, "Brand Strategy", "Marketing", 4.3, "Lisa Rust"),
            course(7, "Python for Data", "Programming", 4.6, "David Park"),
            course(8, "Deep Work Habits", "Personal Development", 4.4, "James Wilson"),
        ])
        .unwrap();
        Storefront::new(Arc::new(catalog))
    }

    fn ids(courses: &[&Course]) -> Vec<CourseId> {
        courses.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_browse_reports_counts() {
        let storefront = build_test_storefront();
        let query = CourseQuery {
            filter: FilterSpec::default()
                .with_categories(["Programming"])
                .with_min_rating(4.5),
            sort: SortSpec::new(SortField::Price, SortOrder::Descending),
            page: PageSpec::new(1, 2),
        };

        let listing = storefront.browse(&query);

        assert_eq!(listing.catalog_size, 8);
        assert_eq!(listing.active_filters, 2);
        assert_eq!(listing.result.total_matched, 4);
        assert_eq!(listing.result.total_pages, 2);
        assert_eq!(ids(&listing.result.items), [7, 4]);
    }

    #[test]
    fn test_browse_shuffled_keeps_filtered_set() {
        let storefront = build_test_storefront();
        let filter = FilterSpec::default().with_categories(["Programming"]);

        let listing = storefront.browse_shuffled(&filter, PageSpec::first(12));

        let mut shuffled = ids(&listing.result.items);
        shuffled.sort_unstable();
        assert_eq!(shuffled, [1, 3, 4, 5, 7]);
        assert_eq!(listing.active_filters, 1);
    }

    #[test]
    fn test_category_page_normalises_route() {
        let storefront = build_test_storefront();

        let page = storefront.category_page("programming", PageSpec::first(12));

        assert_eq!(page.category, "Programming");
        assert!(page.description.starts_with("Master coding"));
        assert_eq!(ids(&page.result.items), [1, 3, 4, 5, 7]);
    }

    #[test]
    fn test_category_page_multi_word_category() {
        let storefront = build_test_storefront();

        let page = storefront.category_page("personal development", PageSpec::first(12));

        assert_eq!(page.category, "Personal Development");
        assert_eq!(ids(&page.result.items), [8]);
    }

    #[test]
    fn test_category_page_unknown_is_empty() {
        let storefront = build_test_storefront();

        let page = storefront.category_page("cooking", PageSpec::first(12));

        assert_eq!(page.category, "Cooking");
        assert_eq!(page.description, "Explore courses in this exciting category.");
        assert!(page.result.is_empty());
        assert_eq!(page.result.total_pages, 0);
    }

    #[test]
    fn test_course_detail_related() {
        let storefront = build_test_storefront();

        let detail = storefront.course_detail(3).unwrap();

        assert_eq!(detail.course.title, "Advanced Rust");
        // Same category, self excluded, capped at three
        assert_eq!(ids(&detail.related), [1, 4, 5]);
    }

    #[test]
    fn test_course_detail_no_related() {
        let storefront = build_test_storefront();
        let detail = storefront.course_detail(2).unwrap();
        assert!(detail.related.is_empty());
    }

    #[test]
    fn test_course_detail_not_found() {
        let storefront = build_test_storefront();
        let err = storefront.course_detail(99).unwrap_err();
        assert!(matches!(err, StorefrontError::CourseNotFound(99)));
    }

    #[test]
    fn test_featured_by_rating() {
        let storefront = build_test_storefront();

        // 1 and 4 tie at 4.7 and stay in catalog order
        assert_eq!(ids(&storefront.featured(3)), [3, 1, 4]);
        assert_eq!(storefront.featured(DEFAULT_FEATURED_LIMIT).len(), 6);
        assert!(storefront.featured(0).is_empty());
    }

    #[test]
    fn test_search_ranking() {
        let storefront = build_test_storefront();

        let hits = storefront.search("rust", 10);
        let hit_ids: Vec<CourseId> = hits.iter().map(|h| h.course.id).collect();

        // Exact title first, then rating desc across title and instructor matches
        assert_eq!(hit_ids, [5, 3, 1, 6]);
        assert_eq!(hits[0].matched, MatchKind::ExactTitle);
        assert_eq!(hits[3].matched, MatchKind::Instructor);
    }

    #[test]
    fn test_search_instructor_and_limit() {
        let storefront = build_test_storefront();

        let hits = storefront.search("DAVID park", 1);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].course.id, 4);
    }

    #[test]
    fn test_search_empty_term() {
        let storefront = build_test_storefront();
        assert!(storefront.search("   ", 10).is_empty());
    }
}
