//! Pagination stage.

use crate::config::DEFAULT_PAGE_SIZE;

/// One page of a list, with the index it actually landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice<'a, R> {
    /// Items on this page.
    pub items: &'a [R],
    /// Total number of pages, never less than 1.
    pub page_count: usize,
    /// Requested index clamped to `0..page_count`.
    ///
    /// Callers must adopt this as their current page index.
    pub clamped_index: usize,
}

/// Number of pages needed for `len` items, never less than 1.
///
/// A page size of zero is replaced by [`DEFAULT_PAGE_SIZE`].
pub fn page_count(len: usize, page_size: usize) -> usize {
    let page_size = effective_page_size(page_size);
    len.div_ceil(page_size).max(1)
}

/// Slice out the requested page.
///
/// Out-of-range indices are clamped to the last page rather than rejected.
pub fn paginate<R>(items: &[R], page_index: usize, page_size: usize) -> PageSlice<'_, R> {
    let page_size = effective_page_size(page_size);
    let page_count = page_count(items.len(), page_size);
    let clamped_index = page_index.min(page_count - 1);
    let start = (clamped_index * page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    PageSlice {
        items: &items[start..end],
        page_count,
        clamped_index,
    }
}

fn effective_page_size(page_size: usize) -> usize {
    if page_size == 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    }
}
