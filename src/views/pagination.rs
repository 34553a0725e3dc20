use std::num::NonZeroUsize;

/// Projects shown per page.
pub const PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

/// Client-side pagination over an already fetched list.
///
/// Pages are 1-based. Navigation never leaves `[1, page_count]`; an empty
/// list has zero pages and stays on page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: NonZeroUsize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// `ceil(total / page_size)`.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.get())
    }

    /// The slice of `items` on the current page.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let size = self.page_size.get();
        let start = self.page.saturating_sub(1).saturating_mul(size);
        let end = start.saturating_add(size).min(items.len());
        items.get(start..end).unwrap_or_default()
    }

    pub fn next(&mut self, total: usize) {
        self.page = self.page.saturating_add(1).min(self.page_count(total)).max(1);
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Jump to `page`, clamped into range.
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.page = page.min(self.page_count(total)).max(1);
    }

    /// Pull the current page back into range after the list changed size.
    pub fn clamp(&mut self, total: usize) {
        self.go_to(self.page, total);
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
