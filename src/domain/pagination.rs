//! Pagination request and response shapes.

use serde::Serialize;

/// Items per page when the caller does not ask for a specific size.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 12;

/// A page request applied to a listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: usize,
    pub per_page: usize,
}

/// Pagination metadata returned alongside a page of results.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub limit: usize,
    /// Total rows matching the predicate, across all pages.
    pub total: usize,
    /// `ceil(total / limit)`.
    pub pages: usize,
}

/// A page of results plus its pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

impl<T> Paginated<T> {
    /// Assemble a page, deriving the page count from `total` and `limit`.
    pub fn new(data: Vec<T>, page: usize, limit: usize, total: usize) -> Self {
        let pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            data,
            pagination: PageInfo {
                page,
                limit,
                total,
                pages,
            },
        }
    }

    /// An empty page with zeroed totals, used by fail-open read paths.
    pub fn empty(page: usize, limit: usize) -> Self {
        Self::new(Vec::new(), page, limit, 0)
    }
}
