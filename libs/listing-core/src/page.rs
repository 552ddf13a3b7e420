use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Requested 1-based page, as given (not clamped).
    pub page: i64,
    pub page_size: usize,
    pub total_pages: usize,
    /// Number of items across all pages.
    pub total_items: usize,
}

impl PageInfo {
    pub fn has_next(&self) -> bool {
        self.page >= 1 && (self.page as u64) < self.total_pages as u64
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1 && (self.page as u64) <= self.total_pages as u64
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
}

impl<T> Page<T> {
    /// Create a new page with items and page info
    pub fn new(items: Vec<T>, page_info: PageInfo) -> Self {
        Self { items, page_info }
    }

    /// Map items while preserving page_info
    pub fn map_items<U>(self, mut f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(&mut f).collect(),
            page_info: self.page_info,
        }
    }
}

/// `ceil(len / page_size)`; a page size of 0 counts as 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Slice out the 1-based `page` of `items`.
///
/// Pages below 1 or past the end produce an empty page, never an error.
pub fn paginate<T>(items: Vec<T>, page: i64, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let page_info = PageInfo {
        page,
        page_size,
        total_pages: total_pages(total_items, page_size),
        total_items,
    };

    let start = page
        .checked_sub(1)
        .and_then(|p| usize::try_from(p).ok())
        .and_then(|p| p.checked_mul(page_size));

    let items = match start {
        Some(start) if start < total_items => items
            .into_iter()
            .skip(start)
            .take(page_size)
            .collect(),
        _ => Vec::new(),
    };

    Page { items, page_info }
}
