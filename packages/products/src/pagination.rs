// ABOUTME: Pagination utilities for list endpoints
// ABOUTME: Provides standardized query parameters and response wrappers

use serde::{Deserialize, Serialize};

use crate::storage::PageWindow;

/// Default page size for paginated queries
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size to prevent performance issues
pub const MAX_PAGE_SIZE: i64 = 100;

/// Minimum page number (1-indexed)
pub const MIN_PAGE: i64 = 1;

/// Query parameters for pagination
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-indexed, defaults to 1)
    #[serde(default = "default_page")]
    pub page: i64,

    /// Number of items per page (defaults to DEFAULT_PAGE_SIZE, max MAX_PAGE_SIZE)
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    MIN_PAGE
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    /// Create pagination params with custom values
    pub fn with_page_and_limit(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    /// Get the current page number
    pub fn page(&self) -> i64 {
        self.page.max(MIN_PAGE)
    }

    /// Get the clamped page size
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, MAX_PAGE_SIZE)
    }

    /// Validate and normalize into a SQL-ready window
    pub fn window(&self) -> PageWindow {
        let limit = self.limit();
        let offset = (self.page() - 1) * limit;
        PageWindow { limit, offset }
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: MIN_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Metadata about pagination state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginationMeta {
    /// Current page number (1-indexed)
    pub page: i64,

    /// Items per page
    pub limit: i64,

    /// Total number of items across all pages
    pub total: i64,

    /// Total number of pages
    pub pages: i64,
}

impl PaginationMeta {
    /// Create pagination metadata from params and total count
    pub fn new(params: &PaginationParams, total: i64) -> Self {
        let page = params.page();
        let limit = params.limit();
        let pages = if limit > 0 {
            (total + limit - 1) / limit
        } else {
            0
        };

        Self {
            page,
            limit,
            total,
            pages,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct PaginatedResponse<T> {
    /// The data items for the current page
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(data: Vec<T>, params: &PaginationParams, total: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(params, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pagination_params() {
        let params = PaginationParams::default();
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), DEFAULT_PAGE_SIZE);
        assert_eq!(params.window().offset, 0);
    }

    #[test]
    fn test_pagination_params_validation() {
        // Test negative page
        let params = PaginationParams::with_page_and_limit(-5, 10);
        assert_eq!(params.page(), 1);
        assert_eq!(params.window().offset, 0);

        // Test oversized limit
        let params = PaginationParams::with_page_and_limit(1, 500);
        assert_eq!(params.limit(), MAX_PAGE_SIZE);

        // Test negative limit
        let params = PaginationParams::with_page_and_limit(1, -5);
        assert_eq!(params.limit(), 1);
    }

    #[test]
    fn test_pagination_offset_calculation() {
        let params = PaginationParams::with_page_and_limit(2, 10);
        assert_eq!(params.window().offset, 10);

        let params = PaginationParams::with_page_and_limit(3, 10);
        assert_eq!(params.window().offset, 20);
    }

    #[test]
    fn test_pagination_meta_rounds_pages_up() {
        let params = PaginationParams::with_page_and_limit(1, 10);
        let meta = PaginationMeta::new(&params, 25);

        assert_eq!(meta.page, 1);
        assert_eq!(meta.limit, 10);
        assert_eq!(meta.total, 25);
        assert_eq!(meta.pages, 3);
    }

    #[test]
    fn test_pagination_meta_empty() {
        let params = PaginationParams::default();
        let meta = PaginationMeta::new(&params, 0);
        assert_eq!(meta.pages, 0);
    }

    #[test]
    fn test_three_items_limit_one_is_three_pages() {
        let params = PaginationParams::with_page_and_limit(2, 1);
        let meta = PaginationMeta::new(&params, 3);
        assert_eq!(meta.pages, 3);
        assert_eq!(params.window().offset, 1);
    }
}
