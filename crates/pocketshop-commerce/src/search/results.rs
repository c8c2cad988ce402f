//! Incremental reveal of search results.

use crate::catalog::Product;
use serde::Serialize;

/// Rows revealed initially and on each end-of-list signal.
pub const PAGE_SIZE: usize = 10;

/// Running display count over a filtered list.
///
/// The count starts at one page and grows by a page each time the consumer
/// reaches the end of what is visible, as long as more rows exist.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DisplayWindow {
    /// Rows added per page.
    pub page_size: usize,
    /// Rows currently allowed on screen.
    pub display_count: usize,
}

impl DisplayWindow {
    /// Create a window with the given page size (at least one row).
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_size,
            display_count: page_size,
        }
    }

    /// Grow by one page if rows beyond the current count exist.
    ///
    /// Returns `true` when the window grew.
    pub fn load_more(&mut self, total: usize) -> bool {
        if self.display_count < total {
            self.display_count += self.page_size;
            true
        } else {
            false
        }
    }

    /// Back to a single page.
    pub fn reset(&mut self) {
        self.display_count = self.page_size;
    }

    /// Number of rows visible out of `total`.
    pub fn visible(&self, total: usize) -> usize {
        self.display_count.min(total)
    }

    /// Whether rows beyond the window exist.
    pub fn has_more(&self, total: usize) -> bool {
        self.display_count < total
    }
}

impl Default for DisplayWindow {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

/// The derived view handed to rendering collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'a> {
    /// Visible products, in catalog order.
    pub items: Vec<&'a Product>,
    /// Number of products matching the applied criteria.
    pub total_matches: usize,
    /// Whether more matches exist beyond the visible rows.
    pub has_more: bool,
}

impl<'a> CatalogView<'a> {
    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of visible items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Header line, e.g. `12 products found`.
    pub fn summary(&self) -> String {
        format!("{} products found", self.total_matches)
    }

    /// Footer shown while more rows can be revealed.
    pub fn footer(&self) -> Option<&'static str> {
        self.has_more.then_some("Loading more...")
    }
}
