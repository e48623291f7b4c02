/// A window into an ordered sequence of events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'s, T> {
    pub items: &'s [T],
    /// Zero based index of this page
    pub index: usize,
    pub total_pages: usize,
    /// Offset of the first item of this page in the whole sequence
    pub start: usize,
}

impl<'s, T> Page<'s, T> {
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total_pages
    }
}

/// Number of pages needed for `len` items, there is always at least one page.
/// A page size of zero is treated as one.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Clamps a requested page index into the valid range
pub fn clamp_page(requested: usize, len: usize, page_size: usize) -> usize {
    requested.min(page_count(len, page_size) - 1)
}

pub fn paginate<T>(items: &[T], page_size: usize, requested: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = page_count(items.len(), page_size);
    let index = requested.min(total_pages - 1);

    let start = (index * page_size).min(items.len());
    let end = (start + page_size).min(items.len());

    Page {
        items: &items[start..end],
        index,
        total_pages,
        start,
    }
}

/// Index of the page after `current`, stays on the last page
pub fn next_page(current: usize, len: usize, page_size: usize) -> usize {
    clamp_page(current.saturating_add(1), len, page_size)
}

/// Index of the page before `current`, stays on the first page
pub fn previous_page(current: usize, len: usize, page_size: usize) -> usize {
    clamp_page(current.saturating_sub(1), len, page_size)
}
