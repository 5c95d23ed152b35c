//! Ordering and pagination of comment listings.

use serde::{Deserialize, Serialize};

/// Direction in which comments are sorted by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Oldest first.
    Ascending,
    /// Newest first.
    #[default]
    Descending,
}

/// A one-based page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageWindow {
    page: u32,
    per_page: u32,
}

impl PageWindow {
    /// Creates a window. A page number of zero is treated as the first page.
    #[must_use]
    pub const fn new(page: u32, per_page: u32) -> Self {
        let first_or_later = if page == 0 { 1 } else { page };
        Self {
            page: first_or_later,
            per_page,
        }
    }

    /// Returns the one-based page number.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn per_page(self) -> u32 {
        self.per_page
    }

    /// Returns how many records precede this page.
    #[must_use]
    pub fn offset(self) -> usize {
        to_usize(self.page.saturating_sub(1)).saturating_mul(to_usize(self.per_page))
    }
}

/// Pagination defaults applied to requests that leave fields unset.
///
/// Hosts typically deserialize this from their own configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationDefaults {
    /// Sort direction.
    pub order: SortOrder,
    /// First page to return.
    pub page: u32,
    /// Page size.
    pub per_page: u32,
    /// Ceiling on the number of records returned per request.
    pub limit: u32,
}

impl Default for PaginationDefaults {
    fn default() -> Self {
        Self {
            order: SortOrder::Descending,
            page: 1,
            per_page: 10,
            limit: 10,
        }
    }
}

/// A caller's pagination request. Unset fields fall back to
/// [`PaginationDefaults`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    order: Option<SortOrder>,
    page: Option<u32>,
    per_page: Option<u32>,
    limit: Option<u32>,
}

impl Pagination {
    /// Creates a request with every field unset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sort direction.
    #[must_use]
    pub const fn with_order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Sets the page number.
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Sets the record ceiling.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Fills unset fields from `defaults`.
    #[must_use]
    pub fn normalize(&self, defaults: &PaginationDefaults) -> NormalizedPagination {
        NormalizedPagination {
            order: self.order.unwrap_or(defaults.order),
            window: PageWindow::new(
                self.page.unwrap_or(defaults.page),
                self.per_page.unwrap_or(defaults.per_page),
            ),
            limit: self.limit.unwrap_or(defaults.limit),
        }
    }
}

/// A pagination request with every field resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedPagination {
    order: SortOrder,
    window: PageWindow,
    limit: u32,
}

impl NormalizedPagination {
    /// Returns the sort direction.
    #[must_use]
    pub const fn order(&self) -> SortOrder {
        self.order
    }

    /// Returns the page window.
    #[must_use]
    pub const fn window(&self) -> PageWindow {
        self.window
    }

    /// Returns the record ceiling.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }
}

pub(crate) fn to_usize(value: u32) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}
