//! Types describing a catalog query: filters, sort order and page window.
//!
//! `FilterSpec`, `SortSpec` and `PageSpec` are short-lived values built by
//! the caller on every interaction and passed into the engine by value or
//! reference. The engine never keeps them between calls.

use crate::error::QueryError;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Lower bound of the price slider
pub const DEFAULT_MIN_PRICE: f64 = 0.0;
/// Upper bound of the price slider
pub const DEFAULT_MAX_PRICE: f64 = 200.0;

/// Page sizes offered by the page-size selector
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [8, 12, 16, 24];
pub const DEFAULT_PAGE_SIZE: usize = 12;

// =============================================================================
// Filters
// =============================================================================

/// Inclusive price bounds.
///
/// `min > max` is kept as given and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    /// True for the slider's untouched full range
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PRICE, DEFAULT_MAX_PRICE)
    }
}

/// Constraints narrowing the visible course set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    /// Empty means no category restriction. Names must already match the
    /// stored category exactly.
    pub categories: BTreeSet<String>,
    pub price_range: PriceRange,
    /// Inclusive lower bound on rating
    pub min_rating: f64,
}

impl FilterSpec {
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Reset every dimension to its default
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Number of filter dimensions currently constraining results.
    ///
    /// Categories count once no matter how many are selected.
    pub fn active_filter_count(&self) -> usize {
        usize::from(!self.categories.is_empty())
            + usize::from(!self.price_range.is_default())
            + usize::from(self.min_rating > 0.0)
    }
}

// =============================================================================
// Sorting
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Rating,
    Price,
    Students,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Ordering field and direction. Defaults to rating, high to low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    pub fn ascending(field: SortField) -> Self {
        Self::new(field, SortOrder::Ascending)
    }

    pub fn descending(field: SortField) -> Self {
        Self::new(field, SortOrder::Descending)
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::descending(SortField::Rating)
    }
}

impl FromStr for SortField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(SortField::Rating),
            "price" => Ok(SortField::Price),
            "students" => Ok(SortField::Students),
            "title" => Ok(SortField::Title),
            _ => Err(QueryError::InvalidSortField(s.to_string())),
        }
    }
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(QueryError::InvalidSortOrder(s.to_string())),
        }
    }
}

/// Parses dropdown values such as `price-asc` or `students-desc`
impl FromStr for SortSpec {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, order) = s
            .split_once('-')
            .ok_or_else(|| QueryError::InvalidSort(s.to_string()))?;
        Ok(Self::new(field.parse()?, order.parse()?))
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortField::Rating => "rating",
            SortField::Price => "price",
            SortField::Students => "students",
            SortField::Title => "title",
        };
        f.write_str(name)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => f.write_str("asc"),
            SortOrder::Descending => f.write_str("desc"),
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.field, self.order)
    }
}

// =============================================================================
// Paging
// =============================================================================

/// Requested window into the sorted results.
///
/// Neither field is validated: a page past the end, page 0, or a page size
/// of 0 all produce an empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSpec {
    /// 1-based page number
    pub page_index: usize,
    pub page_size: usize,
}

impl PageSpec {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// First page at the given size
    pub fn first(page_size: usize) -> Self {
        Self::new(1, page_size)
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

/// Filter, sort and page bundled together
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CourseQuery {
    pub filter: FilterSpec,
    pub sort: SortSpec,
    pub page: PageSpec,
}
