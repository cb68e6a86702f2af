//! Page-level operations for the GrowFast course catalog.
//!
//! Wraps a shared [`catalog::Catalog`] and the [`query`] engine with the
//! views the site renders: browse listings, category pages, course detail,
//! featured courses and search. Also owns the persisted theme preference
//! and the price and enrolment formatting used on course cards.

pub mod category;
pub mod error;
pub mod format;
pub mod preferences;
pub mod service;

pub use category::{category_description, normalize_category, resolve_category};
pub use error::{Result, StorefrontError};
pub use format::{format_price, format_students};
pub use preferences::{PreferenceStore, Theme};
pub use service::{
    CategoryPage, CourseDetail, CourseListing, DEFAULT_FEATURED_LIMIT, MatchKind,
    RELATED_COURSE_LIMIT, SearchHit, Storefront,
};
