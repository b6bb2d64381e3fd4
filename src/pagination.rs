// src/pagination.rs
// =============================================================================
// Page bookkeeping for the repository list.
//
// PaginationState is a small Copy value. Every operation takes the state by
// value and hands back a new one, so nothing here touches the network or the
// screen; the session controller decides when to store the result.
//
// Rules:
// - Pages are 1-based
// - total_pages() = ceil(total / page_size), and 0 when there is nothing
// - current page stays within 1..=total_pages() (or 1 when total is 0)
// - page size stays within MIN_PAGE_SIZE..=MAX_PAGE_SIZE
// =============================================================================

use serde::Serialize;

use crate::error::{Result, ViewerError};

pub const MIN_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: u32,
    page_size: u32,
    total_items: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_items: 0,
        }
    }
}

/// Everything a pagination toolbar needs to draw itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationView {
    pub current_page: u32,
    pub page_size: u32,
    pub total_items: u32,
    pub total_pages: u32,
    pub has_previous: bool,
    pub has_next: bool,
    /// One entry per page button, 1..=total_pages
    pub pages: Vec<u32>,
}

impl PaginationState {
    /// Starts empty with the given page size.
    ///
    /// Fails with `InvalidPageSize` when `page_size` is out of bounds.
    pub fn with_page_size(page_size: u32) -> Result<Self> {
        Self::default().set_page_size(page_size)
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    /// New total (from a fresh profile), back to page 1. Page size is kept.
    pub fn reset(self, total_items: u32) -> Self {
        Self {
            current_page: 1,
            total_items,
            ..self
        }
    }

    pub fn total_pages(&self) -> u32 {
        self.total_items.div_ceil(self.page_size)
    }

    /// Moves to `page` if it is in 1..=total_pages(); otherwise returns the
    /// state unchanged.
    pub fn go_to_page(self, page: u32) -> Self {
        if (1..=self.total_pages()).contains(&page) {
            Self {
                current_page: page,
                ..self
            }
        } else {
            self
        }
    }

    pub fn next_page(self) -> Self {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    pub fn previous_page(self) -> Self {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Changes the page size and goes back to page 1.
    ///
    /// Out-of-range sizes are rejected with `InvalidPageSize`; since `self`
    /// is Copy, the caller's state is left exactly as it was.
    pub fn set_page_size(self, page_size: u32) -> Result<Self> {
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(ViewerError::InvalidPageSize(page_size));
        }

        Ok(Self {
            current_page: 1,
            page_size,
            ..self
        })
    }

    pub fn view(&self) -> PaginationView {
        let total_pages = self.total_pages();
        PaginationView {
            current_page: self.current_page,
            page_size: self.page_size,
            total_items: self.total_items(),
            total_pages,
            has_previous: self.has_previous(),
            has_next: self.has_next(),
            pages: (1..=total_pages).collect(),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why take `self` by value?
//    - PaginationState is Copy, so passing it around is just copying
//      three numbers
//    - Returning a new state means a rejected change can't leave a
//      half-updated value behind
//
// 2. What is div_ceil?
//    - Integer division rounding up: 12.div_ceil(10) == 2
//    - Same as (a + b - 1) / b, without the overflow risk near u32::MAX
// -----------------------------------------------------------------------------
