//! Page slicing of ranked result lists.

use serde::Serialize;

/// One page of an ordered list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// The page actually returned, after clamping (1-based).
    pub page: usize,
    pub page_size: usize,
    /// Number of pages, 0 for an empty list.
    pub total_pages: usize,
    /// Number of items across all pages.
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Transform the items, keeping the page metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }
}

/// Number of pages needed for `total_items` items.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// Slice page `page` (1-based) of `items`.
///
/// The page is clamped to `[1, total_pages]`, so page 0 yields the first
/// page and a page past the end yields the last one. A `page_size` of 0 is
/// treated as 1.
///
/// # Examples
///
/// ```
/// use curio::ranking::paginate;
///
/// let items: Vec<u32> = (0..125).collect();
/// let page = paginate(&items, 3, 50);
/// assert_eq!(page.items.len(), 25);
/// assert_eq!(page.total_pages, 3);
/// assert_eq!(paginate(&items, 4, 50).page, 3);
/// ```
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let page = page.clamp(1, total_pages.max(1));

    let start = ((page - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());

    Page {
        items: items[start..end].to_vec(),
        page,
        page_size,
        total_pages,
        total_items: items.len(),
    }
}
