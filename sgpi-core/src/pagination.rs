//! Fixed-size pages over a filtered view.

use std::ops::RangeInclusive;

/// Records shown per page in every listing.
pub const PAGE_SIZE: usize = 20;

/// Most page numbers shown at once in the navigation controls.
pub const WINDOW_SIZE: usize = 5;

/// Splits sequences into pages of a size fixed for the paginator's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Paginator::new(PAGE_SIZE)
    }
}

impl Paginator {
    /// A zero page size is treated as one.
    pub fn new(page_size: usize) -> Self {
        Paginator {
            page_size: page_size.max(1),
        }
    }

    /// Number of pages for `len` items; never less than one.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// Clamp a requested page number into `1..=total_pages`.
    pub fn clamp(&self, page: usize, len: usize) -> usize {
        page.clamp(1, self.total_pages(len))
    }

    /// Slice `items` for 1-based `current`. Out-of-range pages are empty.
    pub fn page<'a, T>(&self, items: &'a [T], current: usize) -> &'a [T] {
        let start = current.saturating_sub(1).saturating_mul(self.page_size);
        if current == 0 || start >= items.len() {
            return &items[..0];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// 1-based positions of the first and last item on `current`, for a
    /// "Showing a - b of n" line. `None` when the page is empty.
    pub fn showing(&self, len: usize, current: usize) -> Option<(usize, usize)> {
        let first = current
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .saturating_add(1);
        if current == 0 || first > len {
            return None;
        }
        Some((first, current.saturating_mul(self.page_size).min(len)))
    }
}

/// Up to [`WINDOW_SIZE`] consecutive page numbers centred on `current`,
/// shifted to stay within `1..=total_pages`.
pub fn window(current: usize, total_pages: usize) -> RangeInclusive<usize> {
    let total = total_pages.max(1);
    let span = WINDOW_SIZE.min(total);
    let half = WINDOW_SIZE / 2;

    let start = current
        .saturating_sub(half)
        .clamp(1, total - span + 1);
    start..=start + span - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn forty_five_items_make_three_pages() {
        let items: Vec<usize> = (0..45).collect();
        let paginator = Paginator::new(20);

        assert_eq!(paginator.total_pages(items.len()), 3);
        assert_eq!(paginator.page(&items, 1).len(), 20);
        assert_eq!(paginator.page(&items, 3), &[40, 41, 42, 43, 44]);
        assert!(paginator.page(&items, 4).is_empty());
        assert!(paginator.page(&items, 0).is_empty());
    }

    #[test]
    fn empty_sequence_still_has_one_page() {
        let paginator = Paginator::default();
        assert_eq!(paginator.total_pages(0), 1);
        assert_eq!(paginator.clamp(7, 0), 1);
        assert_eq!(paginator.showing(0, 1), None);
    }

    #[test]
    fn clamp_bounds_requested_page() {
        let paginator = Paginator::new(20);
        assert_eq!(paginator.clamp(0, 45), 1);
        assert_eq!(paginator.clamp(2, 45), 2);
        assert_eq!(paginator.clamp(9, 45), 3);
    }

    #[test]
    fn showing_range_covers_partial_last_page() {
        let paginator = Paginator::new(20);
        assert_eq!(paginator.showing(45, 1), Some((1, 20)));
        assert_eq!(paginator.showing(45, 3), Some((41, 45)));
        assert_eq!(paginator.showing(45, 4), None);
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        let items: Vec<usize> = (0..45).collect();
        let paginator = Paginator::new(20);
        assert_eq!(paginator.showing(45, usize::MAX), None);
        assert!(paginator.page(&items, usize::MAX).is_empty());
    }

    #[test]
    fn window_clamps_at_the_end() {
        assert_eq!(window(8, 10), 6..=10);
        assert_eq!(window(10, 10), 6..=10);
    }

    #[test]
    fn window_clamps_at_the_start() {
        assert_eq!(window(1, 10), 1..=5);
        assert_eq!(window(2, 10), 1..=5);
    }

    #[test]
    fn window_centres_in_the_middle() {
        assert_eq!(window(5, 10), 3..=7);
    }

    #[test]
    fn window_shrinks_to_total() {
        assert_eq!(window(1, 3), 1..=3);
        assert_eq!(window(2, 1), 1..=1);
        assert_eq!(window(1, 0), 1..=1);
    }

    proptest! {
        #[test]
        fn pages_partition_the_sequence(len in 0usize..200, size in 1usize..30) {
            let items: Vec<usize> = (0..len).collect();
            let paginator = Paginator::new(size);
            let total = paginator.total_pages(len);

            let joined: Vec<usize> = (1..=total)
                .flat_map(|p| paginator.page(&items, p).to_vec())
                .collect();
            prop_assert_eq!(joined, items);
        }

        #[test]
        fn window_is_in_bounds_and_holds_current(total in 1usize..60, current in 1usize..60) {
            let current = current.min(total);
            let range = window(current, total);

            prop_assert!(*range.start() >= 1);
            prop_assert!(*range.end() <= total);
            prop_assert!(range.contains(&current));
            prop_assert_eq!(range.count(), total.min(WINDOW_SIZE));
        }
    }
}
