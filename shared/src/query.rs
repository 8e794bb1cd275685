//! 分页元数据
//!
//! Footer data of a paginated list.

use serde::{Deserialize, Serialize};

/// Pagination metadata of the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// 当前页码 (从 1 开始)
    pub page: usize,
    /// 每页数量
    pub limit: usize,
    /// 总记录数 (filtered + searched)
    pub total: usize,
    /// 总页数 (0 when there is nothing to show)
    pub total_pages: usize,
    /// Offset of the first row of the page
    pub start_index: usize,
    /// `start_index + limit`, may exceed `total`
    pub end_index: usize,
}

impl PageInfo {
    /// 1-based "showing X–Y of N" bounds, end clamped to `total`.
    ///
    /// Returns `(0, 0)` for an empty list.
    pub fn display_range(&self) -> (usize, usize) {
        if self.total == 0 || self.start_index >= self.total {
            return (0, 0);
        }
        (self.start_index + 1, self.end_index.min(self.total))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
