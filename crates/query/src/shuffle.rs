//! Random display order for the "shuffle" button.
//!
//! Kept apart from [`crate::engine::apply`]: this is the only
//! non-deterministic operation in the crate. Two calls with the same
//! arguments generally return different pages. Filtering and pagination
//! behave exactly as in `apply`; only the ordering step differs.

use crate::engine::{QueryResult, filter_courses};
use crate::types::{FilterSpec, PageSpec};
use catalog::Course;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Filter, randomly permute the survivors, then paginate.
///
/// Uses the thread-local RNG, so the order is not reproducible.
pub fn shuffle<'a>(courses: &'a [Course], filter: &FilterSpec, page: PageSpec) -> QueryResult<'a> {
    shuffle_with(courses, filter, page, &mut rand::rng())
}

/// Same as [`shuffle`] with a caller-supplied RNG.
pub fn shuffle_with<'a, R>(
    courses: &'a [Course],
    filter: &FilterSpec,
    page: PageSpec,
    rng: &mut R,
) -> QueryResult<'a>
where
    R: Rng + ?Sized,
{
    let mut survivors = filter_courses(courses, filter);
    survivors.shuffle(rng);
    debug!("Shuffled {} matching courses", survivors.len());

    QueryResult::from_ordered(survivors, page)
}
