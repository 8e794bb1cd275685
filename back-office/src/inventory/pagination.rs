//! Page window over the searched collection
//!
//! The paginator only stores the requested page and page size. Window
//! bounds are derived from the collection length, and [`Paginator::reconcile`]
//! pulls the page back into range after the collection shrinks.

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use shared::query::PageInfo;

/// Page sizes offered by the footer selector
pub const ROWS_PER_PAGE_PRESETS: [usize; 4] = [5, 10, 20, 50];

/// Default page size
pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

/// Derived bounds of the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    pub current_page: usize,
    pub total_pages: usize,
    pub start_index: usize,
    /// `start_index + rows_per_page`, may exceed the collection length
    pub end_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginator {
    current_page: usize,
    rows_per_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            current_page: 1,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl Paginator {
    /// Start on page 1 with the given page size
    pub fn new(rows_per_page: usize) -> AppResult<Self> {
        let mut paginator = Self::default();
        paginator.set_rows_per_page(rows_per_page)?;
        Ok(paginator)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Number of pages needed for `len` items (0 when empty)
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.rows_per_page)
    }

    /// Window of the current page over `len` items
    pub fn window(&self, len: usize) -> PageWindow {
        // Pages past the end are legal until reconciled
        let start_index = self
            .current_page
            .saturating_sub(1)
            .saturating_mul(self.rows_per_page);
        PageWindow {
            current_page: self.current_page,
            total_pages: self.total_pages(len),
            start_index,
            end_index: start_index.saturating_add(self.rows_per_page),
        }
    }

    /// Slice of `items` shown on the current page
    pub fn current_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let window = self.window(items.len());
        if window.start_index >= items.len() {
            return &[];
        }
        &items[window.start_index..window.end_index.min(items.len())]
    }

    /// Footer metadata for `len` items
    pub fn page_info(&self, len: usize) -> PageInfo {
        let window = self.window(len);
        PageInfo {
            page: window.current_page,
            limit: self.rows_per_page,
            total: len,
            total_pages: window.total_pages,
            start_index: window.start_index,
            end_index: window.end_index,
        }
    }

    /// Request a page. Pages are 1-based; an out-of-range page is accepted
    /// and clamped by the next [`reconcile`](Self::reconcile).
    pub fn set_current_page(&mut self, page: usize) -> AppResult<()> {
        if page == 0 {
            return Err(AppError::out_of_range("Page numbers start at 1").with_detail("page", 0));
        }
        self.current_page = page;
        Ok(())
    }

    /// Change the page size without resetting the page
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) -> AppResult<()> {
        if rows_per_page == 0 {
            return Err(AppError::validation("Rows per page must be at least 1")
                .with_detail("field", "rowsPerPage"));
        }
        self.rows_per_page = rows_per_page;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Pull the current page back into `[1, max(total_pages, 1)]`.
    ///
    /// Returns true when the page changed. Never moves the page upward.
    pub fn reconcile(&mut self, len: usize) -> bool {
        let total_pages = self.total_pages(len);
        let corrected = if total_pages == 0 {
            1
        } else {
            self.current_page.min(total_pages)
        };
        let changed = corrected != self.current_page;
        self.current_page = corrected;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn window_of_third_page() {
        let mut p = Paginator::new(5).unwrap();
        p.set_current_page(3).unwrap();
        let w = p.window(12);
        assert_eq!(w.total_pages, 3);
        assert_eq!(w.start_index, 10);
        assert_eq!(w.end_index, 15);
        assert_eq!(p.current_items(&items(12)), &[10, 11]);
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let mut p = Paginator::new(5).unwrap();
        p.set_current_page(4).unwrap();
        assert_eq!(p.window(0).total_pages, 0);
        assert!(p.current_items::<usize>(&[]).is_empty());
        assert!(p.reconcile(0));
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn reconcile_clamps_down_never_up() {
        let mut p = Paginator::new(5).unwrap();
        p.set_current_page(3).unwrap();
        assert!(p.reconcile(4));
        assert_eq!(p.current_page(), 1);

        // Growing the collection again does not move back to page 3
        assert!(!p.reconcile(12));
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn page_size_change_keeps_page_until_reconciled() {
        let mut p = Paginator::new(5).unwrap();
        p.set_current_page(3).unwrap();
        p.set_rows_per_page(20).unwrap();
        assert_eq!(p.current_page(), 3);
        assert!(p.current_items(&items(12)).is_empty());
        p.reconcile(12);
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.current_items(&items(12)).len(), 12);
    }

    #[test]
    fn zero_values_are_rejected() {
        let mut p = Paginator::default();
        assert_eq!(
            p.set_rows_per_page(0).unwrap_err().code,
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            p.set_current_page(0).unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
        assert_eq!(p.rows_per_page(), DEFAULT_ROWS_PER_PAGE);
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn page_info_reports_display_range() {
        let mut p = Paginator::new(5).unwrap();
        p.set_current_page(3).unwrap();
        let info = p.page_info(12);
        assert_eq!(info.total, 12);
        assert_eq!(info.display_range(), (11, 12));
    }

    #[test]
    fn huge_page_before_reconcile_is_empty() {
        let mut p = Paginator::new(50).unwrap();
        p.set_current_page(usize::MAX).unwrap();

        assert!(p.current_items(&items(12)).is_empty());
        let info = p.page_info(12);
        assert_eq!(info.start_index, usize::MAX);
        assert_eq!(info.end_index, usize::MAX);
        assert_eq!(info.display_range(), (0, 0));

        assert!(p.reconcile(12));
        assert_eq!(p.current_items(&items(12)).len(), 12);
    }

    #[test]
    fn current_items_length_property() {
        for len in 0..23 {
            let mut p = Paginator::new(5).unwrap();
            for page in 1..6 {
                p.set_current_page(page).unwrap();
                p.reconcile(len);
                let w = p.window(len);
                assert!(w.current_page >= 1 && w.current_page <= w.total_pages.max(1));
                let expected = if w.start_index >= len {
                    0
                } else {
                    5.min(len - w.start_index)
                };
                assert_eq!(p.current_items(&items(len)).len(), expected);
            }
        }
    }
}
