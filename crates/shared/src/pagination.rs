//! Page-number pagination types.

use serde::{Deserialize, Serialize};

/// Pagination metadata accompanying a page of results.
///
/// `current_page` follows the one-based convention used by the storage
/// pagination; callers exposing a zero-based `page` query parameter convert
/// before building a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total number of matching items across all pages.
    pub total_items: i64,
    /// Number of items on this page.
    pub item_count: i64,
    /// Configured page size.
    pub items_per_page: i64,
    /// Total number of pages for `total_items` at `items_per_page`.
    pub total_pages: i64,
    /// One-based page number of this page.
    pub current_page: i64,
}

impl PageMeta {
    /// Builds metadata for a page, deriving `total_pages` from the totals.
    pub fn new(total_items: i64, item_count: i64, items_per_page: i64, current_page: i64) -> Self {
        let total_pages = if items_per_page > 0 {
            (total_items + items_per_page - 1) / items_per_page
        } else {
            0
        };

        Self {
            total_items,
            item_count,
            items_per_page,
            total_pages,
            current_page,
        }
    }
}

/// A page of items together with its pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    /// Builds a page from the items retrieved plus the query totals.
    pub fn new(items: Vec<T>, total_items: i64, items_per_page: i64, current_page: i64) -> Self {
        let item_count = items.len() as i64;
        Self {
            items,
            meta: PageMeta::new(total_items, item_count, items_per_page, current_page),
        }
    }
}

/// Computes the row offset for a one-based page number.
pub fn offset_for(page: i64, limit: i64) -> i64 {
    (page - 1).max(0) * limit.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_meta_exact_division() {
        let meta = PageMeta::new(40, 10, 10, 1);
        assert_eq!(meta.total_pages, 4);
        assert_eq!(meta.item_count, 10);
        assert_eq!(meta.current_page, 1);
    }

    #[test]
    fn test_page_meta_partial_last_page() {
        let meta = PageMeta::new(41, 1, 10, 5);
        assert_eq!(meta.total_pages, 5);
    }

    #[test]
    fn test_page_meta_empty_result() {
        let meta = PageMeta::new(0, 0, 10, 1);
        assert_eq!(meta.total_pages, 0);
        assert_eq!(meta.item_count, 0);
    }

    #[test]
    fn test_page_meta_zero_page_size() {
        // Degenerate page size must not divide by zero
        let meta = PageMeta::new(10, 0, 0, 1);
        assert_eq!(meta.total_pages, 0);
    }

    #[test]
    fn test_page_new_counts_items() {
        let page = Page::new(vec![1, 2, 3], 7, 3, 2);
        assert_eq!(page.meta.item_count, 3);
        assert_eq!(page.meta.total_items, 7);
        assert_eq!(page.meta.total_pages, 3);
        assert_eq!(page.meta.current_page, 2);
    }

    #[test]
    fn test_offset_for_first_page() {
        assert_eq!(offset_for(1, 10), 0);
    }

    #[test]
    fn test_offset_for_later_page() {
        assert_eq!(offset_for(3, 25), 50);
    }

    #[test]
    fn test_offset_for_clamps_below_first_page() {
        assert_eq!(offset_for(0, 10), 0);
        assert_eq!(offset_for(-5, 10), 0);
    }

    #[test]
    fn test_page_meta_serializes_camel_case() {
        let meta = PageMeta::new(12, 10, 10, 1);
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("\"totalItems\":12"));
        assert!(json.contains("\"itemCount\":10"));
        assert!(json.contains("\"itemsPerPage\":10"));
        assert!(json.contains("\"totalPages\":2"));
        assert!(json.contains("\"currentPage\":1"));
    }

    #[test]
    fn test_page_serialization_roundtrip() {
        let page = Page::new(vec!["a".to_string(), "b".to_string()], 2, 10, 1);
        let json = serde_json::to_string(&page).unwrap();
        let back: Page<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.items, vec!["a", "b"]);
        assert_eq!(back.meta, page.meta);
    }
}
