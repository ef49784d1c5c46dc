use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Default page size of the registration and ranking tables. Exports cover
/// the full set regardless, so pages only need to suit on-screen reading.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// A city race tops out in the low thousands of registrations; one request
/// may not ask for more than this many rows at once.
pub const MAX_PAGE_SIZE: u32 = 200;

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct PaginationParams {
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn first_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.page < 1 {
            return Err("page must be >= 1".to_string());
        }
        if self.page_size < 1 || self.page_size > MAX_PAGE_SIZE {
            return Err(format!("page_size must be between 1 and {MAX_PAGE_SIZE}"));
        }
        Ok(())
    }

    pub fn bounds(&self) -> PageBounds {
        PageBounds {
            offset: (self.page as i64 - 1) * self.page_size as i64,
            limit: self.page_size as i64,
        }
    }
}

/// An offset/limit window over an ordered result set.
#[derive(Debug, Clone, Copy)]
pub struct PageBounds {
    pub offset: i64,
    pub limit: i64,
}

/// Navigation state for one page of an ordered result set.
///
/// `start_item`/`end_item` are zero-based (inclusive/exclusive) positions
/// into the full set; a "X a Y de Z" label renders as
/// `start_item + 1 a end_item de total_items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageWindow {
    pub page: u32,
    pub last_page: u32,
    pub start_item: i64,
    pub end_item: i64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageWindow {
    /// Clamps the requested page into the valid range before deriving any
    /// number, so an empty set or an out-of-range request never underflows
    /// or divides by zero.
    pub fn compute(page: u32, page_size: u32, total_items: i64) -> Self {
        let size = page_size.max(1) as i64;
        let total = total_items.max(0);
        let last_page = ((total as u64).div_ceil(size as u64)).max(1) as u32;
        let page = page.clamp(1, last_page);

        let start = (page as i64 - 1) * size;
        let start_item = start.min(total);
        let end_item = (start + size).min(total);

        Self {
            page,
            last_page,
            start_item,
            end_item,
            has_previous: page > 1,
            has_next: page < last_page,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
    pub start_item: i64,
    pub end_item: i64,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PaginationMeta {
    pub fn new(page: u32, page_size: u32, total_items: i64) -> Self {
        let window = PageWindow::compute(page, page_size, total_items);
        Self {
            page: window.page,
            page_size,
            total_items,
            total_pages: window.last_page,
            start_item: window.start_item,
            end_item: window.end_item,
            has_previous: window.has_previous,
            has_next: window.has_next,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: u32, page_size: u32, total_items: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(page, page_size, total_items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_for_middle_page() {
        let window = PageWindow::compute(2, 10, 25);
        assert_eq!(window.page, 2);
        assert_eq!(window.last_page, 3);
        assert_eq!(window.start_item, 10);
        assert_eq!(window.end_item, 20);
        assert!(window.has_previous);
        assert!(window.has_next);
    }

    #[test]
    fn window_for_last_partial_page() {
        let window = PageWindow::compute(3, 10, 25);
        assert_eq!(window.start_item, 20);
        assert_eq!(window.end_item, 25);
        assert!(window.has_previous);
        assert!(!window.has_next);
    }

    #[test]
    fn empty_set_still_has_one_page() {
        let window = PageWindow::compute(1, 10, 0);
        assert_eq!(window.page, 1);
        assert_eq!(window.last_page, 1);
        assert_eq!(window.start_item, 0);
        assert_eq!(window.end_item, 0);
        assert!(!window.has_previous);
        assert!(!window.has_next);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let window = PageWindow::compute(9, 10, 25);
        assert_eq!(window.page, 3);
        assert_eq!(window.start_item, 20);
        assert_eq!(window.end_item, 25);
    }

    #[test]
    fn zero_page_size_is_clamped_to_one() {
        let window = PageWindow::compute(1, 0, 5);
        assert_eq!(window.last_page, 5);
        assert_eq!(window.end_item, 1);
    }

    #[test]
    fn pagination_params_bounds() {
        let params = PaginationParams {
            page: 3,
            page_size: 20,
        };
        let bounds = params.bounds();
        assert_eq!(bounds.offset, 40);
        assert_eq!(bounds.limit, 20);
    }

    #[test]
    fn pagination_params_rejects_oversized_page() {
        let params = PaginationParams {
            page: 1,
            page_size: 500,
        };
        assert!(params.validate().is_err());
    }
}
