//! Page cursor arithmetic for the management list.

use std::ops::Range;

/// Records per page on the management screen.
pub const PAGE_SIZE: usize = 5;

/// A 1-based page cursor over a list whose length is supplied per call.
///
/// The cursor never divides by the item count, so an empty list (zero pages)
/// is handled like any other: `next` and `previous` are no-ops and the visible
/// range is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    page_size: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Paginator {
    /// A cursor on page 1. A zero `page_size` is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// `ceil(count / page_size)`; 0 for an empty list.
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size)
    }

    /// The page actually shown: the cursor clamped to `1..=total_pages`.
    pub fn effective_page(&self, count: usize) -> usize {
        self.page.min(self.total_pages(count)).max(1)
    }

    pub fn has_next(&self, count: usize) -> bool {
        self.page < self.total_pages(count)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Advances one page unless already on the last one. Returns whether it moved.
    pub fn next(&mut self, count: usize) -> bool {
        if self.has_next(count) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Goes back one page unless on page 1. Returns whether it moved.
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Pulls the cursor back onto an existing page after the list shrank.
    pub fn clamp(&mut self, count: usize) {
        self.page = self.effective_page(count);
    }

    /// Index range of the visible items among `count` filtered items.
    pub fn range(&self, count: usize) -> Range<usize> {
        let start = (self.effective_page(count) - 1) * self.page_size;
        let start = start.min(count);
        let end = (start + self.page_size).min(count);
        start..end
    }
}
