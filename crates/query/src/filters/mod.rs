//! Filter implementations for the course query pipeline.
//!
//! One filter per dimension of `FilterSpec`; they are composed into a
//! FilterPipeline.

pub mod category;
pub mod minimum_rating;
pub mod price_range;

// Re-export for convenience
pub use category::CategoryFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use price_range::PriceRangeFilter;
