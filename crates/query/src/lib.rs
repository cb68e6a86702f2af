//! Query engine for the course catalog.
//!
//! This crate provides:
//! - `FilterSpec`, `SortSpec` and `PageSpec` describing a query
//! - Filter trait and implementations for each filter dimension
//! - FilterPipeline for composing filters
//! - `apply`, the deterministic filter → sort → paginate engine
//! - `shuffle`, a separate randomized ordering of the filtered set
//!
//! ## Architecture
//! A query runs in three stages, each pure:
//! 1. Filters drop courses outside the category, price and rating bounds
//! 2. Survivors are sorted by the chosen field, ties kept in catalog order
//! 3. The requested page is cut out, with totals for the page controls
//!
//! ## Example Usage
//! ```ignore
//! use query::{apply, FilterSpec, PageSpec, SortSpec, SortField};
//!
//! let filter = FilterSpec::default()
//!     .with_categories(["Programming", "Design"])
//!     .with_min_rating(4.5);
//!
//! let result = apply(
//!     catalog.courses(),
//!     &filter,
//!     SortSpec::ascending(SortField::Price),
//!     PageSpec::first(12),
//! );
//! println!("{} courses, page 1 of {}", result.total_matched, result.total_pages);
//! ```

pub mod error;
pub mod types;
pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod sort;
pub mod paginate;
pub mod engine;
pub mod shuffle;

// Re-export main types
pub use engine::{QueryResult, active_filter_count, apply, filter_courses};
pub use error::QueryError;
pub use filter_pipeline::FilterPipeline;
pub use shuffle::{shuffle, shuffle_with};
pub use traits::Filter;
pub use types::{
    CourseQuery, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, DEFAULT_PAGE_SIZE, FilterSpec,
    PAGE_SIZE_OPTIONS, PageSpec, PriceRange, SortField, SortOrder, SortSpec,
};
