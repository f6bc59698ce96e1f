use serde::Serialize;

use super::request::PaginationRequest;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaginationResponse<T> {
    pub(crate) page: i64,
    pub(crate) items: Vec<T>,
    pub(crate) per_page: i64,
    pub(crate) prev_page: i64,
    pub(crate) next_page: i64,
    pub(crate) total_page: i64,
    pub(crate) total_items: i64,
}

impl<T> PaginationResponse<T> {
    pub(crate) fn new(request: &PaginationRequest, items: Vec<T>, total_items: i64) -> Self {
        let page = request.page();
        let per_page = request.per_page();
        let total_page = total_pages(total_items, per_page);

        Self {
            page,
            items,
            per_page,
            prev_page: prev_page(page),
            next_page: next_page(page, total_page),
            total_page,
            total_items,
        }
    }

    /// Converts every item while keeping the page metadata.
    pub(crate) fn map_items<U>(self, f: impl FnMut(T) -> U) -> PaginationResponse<U> {
        PaginationResponse {
            page: self.page,
            items: self.items.into_iter().map(f).collect(),
            per_page: self.per_page,
            prev_page: self.prev_page,
            next_page: self.next_page,
            total_page: self.total_page,
            total_items: self.total_items,
        }
    }
}

/// Ceiling of `total_items / per_page`. `per_page` must be positive.
pub(crate) fn total_pages(total_items: i64, per_page: i64) -> i64 {
    let total_items = total_items.max(0);
    total_items / per_page + i64::from(total_items % per_page != 0)
}

/// The first page is its own previous page.
pub(crate) fn prev_page(page: i64) -> i64 {
    if page >= 2 {
        page - 1
    } else {
        page
    }
}

/// Stays on `page` once it reaches or passes the last page.
pub(crate) fn next_page(page: i64, total_page: i64) -> i64 {
    if page >= total_page {
        page
    } else {
        page + 1
    }
}
