//! Page windows over a filtered result set.
//!
//! An empty result set still has one (empty) page, so `total_pages >= 1` always
//! holds and a requested page can be clamped into `1..=total_pages`.

use serde::Serialize;

/// Number of pages needed for `len` items; never less than 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// One page of results plus where it sits in the whole set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page actually shown, after clamping.
    pub page: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
    #[serde(rename = "totalItems")]
    pub total_items: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Slice out page `page` (clamped into range) of `items`. A `page_size` of 0 is treated as 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total = total_pages(items.len(), page_size);
    let page = page.clamp(1, total);
    let start = ((page - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    Page {
        items: items[start..end].to_vec(),
        page,
        total_pages: total,
        total_items: items.len(),
        page_size,
    }
}
