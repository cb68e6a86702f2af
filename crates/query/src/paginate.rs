//! Windowing of sorted results into pages.

use crate::types::PageSpec;

/// Most page buttons shown at once by the pagination control
pub const MAX_VISIBLE_PAGES: usize = 5;

/// `ceil(total / page_size)`, or 0 when there is nothing to page
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Half-open index range of `page` within `total` items.
///
/// Clipped to `total`; an out-of-range page (including page 0) yields an
/// empty range.
pub fn page_bounds(total: usize, page: PageSpec) -> (usize, usize) {
    if page.page_index == 0 || page.page_size == 0 {
        return (0, 0);
    }
    let start = (page.page_index - 1)
        .saturating_mul(page.page_size)
        .min(total);
    let end = start.saturating_add(page.page_size).min(total);
    (start, end)
}

/// The items of `page` as a sub-slice of `items`
pub fn paginate<T>(items: &[T], page: PageSpec) -> &[T] {
    let (start, end) = page_bounds(items.len(), page);
    &items[start..end]
}

/// Page numbers to render as buttons around `current`.
///
/// All pages when there are at most five, otherwise a window of five that
/// starts two before `current` and slides left near the last page. A
/// `current` outside `1..=total` is pinned to the nearest end.
pub fn visible_pages(current: usize, total: usize) -> Vec<usize> {
    if total <= MAX_VISIBLE_PAGES {
        return (1..=total).collect();
    }
    let current = current.clamp(1, total);
    let mut start = current.saturating_sub(2).max(1);
    let end = start.saturating_add(MAX_VISIBLE_PAGES - 1).min(total);
    if end.saturating_sub(start) < MAX_VISIBLE_PAGES - 1 {
        start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
    }
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(5, 2), 3);
        assert_eq!(total_pages(24, 12), 2);
        assert_eq!(total_pages(25, 12), 3);
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn test_paginate_clips_last_page() {
        let items: Vec<u32> = (1..=5).collect();
        assert_eq!(paginate(&items, PageSpec::new(1, 2)), [1, 2]);
        assert_eq!(paginate(&items, PageSpec::new(3, 2)), [5]);
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(paginate(&items, PageSpec::new(4, 2)).is_empty());
        assert!(paginate(&items, PageSpec::new(0, 2)).is_empty());
        assert!(paginate(&items, PageSpec::new(usize::MAX, 2)).is_empty());
        assert!(paginate(&items, PageSpec::new(1, 0)).is_empty());
    }

    #[test]
    fn test_visible_pages() {
        assert_eq!(visible_pages(1, 3), [1, 2, 3]);
        assert_eq!(visible_pages(1, 10), [1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(6, 10), [4, 5, 6, 7, 8]);
        assert_eq!(visible_pages(10, 10), [6, 7, 8, 9, 10]);
        assert_eq!(visible_pages(9, 10), [6, 7, 8, 9, 10]);
        assert!(visible_pages(1, 0).is_empty());
    }

    #[test]
    fn test_visible_pages_out_of_range_current() {
        assert_eq!(visible_pages(20, 10), [6, 7, 8, 9, 10]);
        assert_eq!(visible_pages(usize::MAX, 10), [6, 7, 8, 9, 10]);
        assert_eq!(visible_pages(0, 10), [1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(usize::MAX, usize::MAX).len(), MAX_VISIBLE_PAGES);
    }
}
