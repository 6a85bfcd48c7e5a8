//! Pagination utilities for service layer
//!
//! Provides a simple `Pagination` struct and helpers to normalize inputs,
//! plus the `PagedResult` envelope returned by listing queries.

use serde::Serialize;

/// Pagination parameters
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    pub const MAX_PER_PAGE: u32 = 100;

    /// Clamp to sane defaults and convert to `u64`
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, Self::MAX_PER_PAGE);
        ((page - 1) as u64, per_page as u64)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: 20 } }
}

/// Sort order requested by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `desc` in any case selects descending; anything else is ascending.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("desc") { Self::Desc } else { Self::Asc }
    }

    pub fn reverse(self) -> Self {
        match self { Self::Asc => Self::Desc, Self::Desc => Self::Asc }
    }

    pub fn as_order(self) -> sea_orm::Order {
        match self { Self::Asc => sea_orm::Order::Asc, Self::Desc => sea_orm::Order::Desc }
    }
}

/// One page of a filtered listing.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    /// effective 1-based page
    pub page: u32,
    /// effective page size
    pub page_size: u32,
    /// rows matching the filter, independent of paging
    pub total: u64,
    pub total_pages: u64,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, page_idx: u64, per_page: u64, total: u64) -> Self {
        Self {
            items,
            page: (page_idx + 1) as u32,
            page_size: per_page as u32,
            total,
            total_pages: total.div_ceil(per_page.max(1)),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedResult<U> {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            total_pages: self.total_pages,
        }
    }
}
