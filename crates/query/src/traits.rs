//! The `Filter` trait implemented by each filter dimension.

use catalog::Course;

/// A predicate over courses that can be chained in a [`FilterPipeline`].
///
/// Implementations are `Send + Sync` and hold no per-query state, so one
/// pipeline can serve concurrent queries. `apply` must keep the relative
/// order of the courses it retains.
///
/// [`FilterPipeline`]: crate::FilterPipeline
pub trait Filter: Send + Sync {
    /// Short label used in debug logs
    fn name(&self) -> &str;

    /// Whether a single course passes this filter
    fn matches(&self, course: &Course) -> bool;

    /// Keep the courses that pass, in their original order
    fn apply<'a>(&self, courses: Vec<&'a Course>) -> Vec<&'a Course> {
        courses
            .into_iter()
            .filter(|course| self.matches(course))
            .collect()
    }
}
