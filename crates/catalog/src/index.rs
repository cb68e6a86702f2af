//! Catalog building and indexing logic.
//!
//! Courses are parsed once, then indexed by id and by category, and
//! per-category statistics are computed. After that the catalog is only
//! ever read.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load the course data file and build all indices
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading course catalog from {:?}", path);

        let courses = parser::parse_courses(path)?;
        let catalog = Self::from_courses(courses)?;

        info!(
            "Loaded {} courses across {} categories",
            catalog.len(),
            catalog.categories().len()
        );
        Ok(catalog)
    }

    /// Build a catalog from already-parsed courses, keeping their order
    pub fn from_courses(courses: Vec<Course>) -> Result<Self> {
        let mut catalog = Catalog::new();
        for course in courses {
            catalog.insert_course(course)?;
        }
        catalog.compute_category_stats();
        Ok(catalog)
    }

    /// Append a course and update the id and category indices
    ///
    /// Category statistics are not refreshed here; call
    /// `compute_category_stats` once all courses are in.
    pub fn insert_course(&mut self, course: Course) -> Result<()> {
        if self.id_index.contains_key(&course.id) {
            return Err(CatalogError::DuplicateId { id: course.id });
        }

        let position = self.courses.len();
        self.id_index.insert(course.id, position);

        let ids = self
            .category_index
            .entry(course.category.clone())
            .or_insert_with(|| {
                self.category_order.push(course.category.clone());
                Vec::new()
            });
        ids.push(course.id);

        self.courses.push(course);
        Ok(())
    }

    /// Compute aggregate statistics for every category
    ///
    /// Folds courses into per-thread maps and merges them, the same shape
    /// as any other rayon aggregation over the catalog.
    pub fn compute_category_stats(&mut self) {
        let totals: HashMap<&str, StatsAccumulator> = self
            .courses
            .par_iter()
            .fold(HashMap::new, |mut local: HashMap<&str, StatsAccumulator>, course| {
                local
                    .entry(course.category.as_str())
                    .or_default()
                    .add(course);
                local
            })
            .reduce(HashMap::new, |mut acc, local| {
                for (category, stats) in local {
                    acc.entry(category).or_default().merge(stats);
                }
                acc
            });

        let stats = totals
            .into_iter()
            .map(|(category, acc)| (category.to_string(), acc.finish()))
            .collect();
        self.category_stats = stats;
    }
}

/// Running sums for one category
#[derive(Debug, Default, Clone, Copy)]
struct StatsAccumulator {
    count: u32,
    rating_sum: f64,
    students: u64,
    min_price: Option<f64>,
    max_price: Option<f64>,
}

impl StatsAccumulator {
    fn add(&mut self, course: &Course) {
        self.count += 1;
        self.rating_sum += course.rating;
        self.students += u64::from(course.students);
        self.min_price = Some(self.min_price.map_or(course.price, |p| p.min(course.price)));
        self.max_price = Some(self.max_price.map_or(course.price, |p| p.max(course.price)));
    }

    fn merge(&mut self, other: StatsAccumulator) {
        self.count += other.count;
        self.rating_sum += other.rating_sum;
        self.students += other.students;
        self.min_price = match (self.min_price, other.min_price) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max_price = match (self.max_price, other.max_price) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
    }

    fn finish(self) -> CategoryStats {
        let avg_rating = if self.count > 0 {
            self.rating_sum / f64::from(self.count)
        } else {
            0.0
        };
        CategoryStats {
            course_count: self.count,
            avg_rating,
            total_students: self.students,
            min_price: self.min_price.unwrap_or(0.0),
            max_price: self.max_price.unwrap_or(0.0),
        }
    }
}
