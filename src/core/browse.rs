//! Browse session - The filter and page state behind the product listing.
//!
//! A session remembers what the shopper has selected and builds a fresh
//! `FilterRequest` from it whenever the listing needs reloading. Changing any filter
//! sends the shopper back to the first page; changing only the page keeps the filters.

use crate::core::query::{DEFAULT_PAGE_SIZE, FilterRequest, ResultPage, SortKey};

/// Upper end of the price slider, and the maximum price a fresh session allows.
pub const DEFAULT_MAX_PRICE: f64 = 1000.0;

/// Current filter selection and page.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowseSession {
    category: Option<String>,
    min_price: f64,
    max_price: f64,
    in_stock_only: bool,
    search: String,
    sort_by: SortKey,
    page: u32,
    page_size: u32,
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl BrowseSession {
    /// Creates a session with no filters on page 1.
    ///
    /// A `page_size` of zero falls back to `DEFAULT_PAGE_SIZE`.
    #[must_use]
    pub const fn new(page_size: u32) -> Self {
        Self {
            category: None,
            min_price: 0.0,
            max_price: DEFAULT_MAX_PRICE,
            in_stock_only: false,
            search: String::new(),
            sort_by: SortKey::Featured,
            page: 1,
            page_size: if page_size == 0 {
                DEFAULT_PAGE_SIZE
            } else {
                page_size
            },
        }
    }

    /// Selects a category. Selecting the category that is already selected clears it.
    pub fn set_category(&mut self, category: &str) {
        self.category = if category.is_empty() || self.category.as_deref() == Some(category) {
            None
        } else {
            Some(category.to_string())
        };
        self.page = 1;
    }

    /// Sets the inclusive price window.
    pub fn set_price_range(&mut self, min: f64, max: f64) {
        self.min_price = min;
        self.max_price = max;
        self.page = 1;
    }

    /// Toggles the in-stock-only filter.
    pub fn set_in_stock_only(&mut self, in_stock_only: bool) {
        self.in_stock_only = in_stock_only;
        self.page = 1;
    }

    /// Sets the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Sets the sort order.
    pub fn set_sort(&mut self, sort_by: SortKey) {
        self.sort_by = sort_by;
        self.page = 1;
    }

    /// Resets every filter and returns to page 1.
    pub fn clear_filters(&mut self) {
        *self = Self::new(self.page_size);
    }

    /// Moves to another page, keeping the filters. Page 0 means page 1.
    pub fn go_to_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Current page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Currently selected category, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Whether anything the "Clear All" control would reset is set.
    ///
    /// Search text and sort order do not count.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.category.is_some()
            || self.min_price > 0.0
            || self.max_price < DEFAULT_MAX_PRICE
            || self.in_stock_only
    }

    /// Builds the request for the current state.
    #[must_use]
    pub fn request(&self) -> FilterRequest {
        FilterRequest {
            category: self.category.clone(),
            min_price: Some(self.min_price),
            max_price: Some(self.max_price),
            in_stock: self.in_stock_only,
            search: (!self.search.is_empty()).then(|| self.search.clone()),
            sort_by: self.sort_by,
            page: Some(self.page),
            limit: Some(self.page_size),
        }
    }
}

/// What the listing should show for a result page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowseView {
    /// "N products found"
    pub total_products: usize,
    /// Number of pages available
    pub total_pages: usize,
    /// Pagination controls only appear when there is more than one page
    pub show_pagination: bool,
    /// The empty-state panel replaces the grid when the page has no products
    pub show_empty_state: bool,
}

impl BrowseView {
    /// Derives display decisions from a result page.
    #[must_use]
    pub fn from_page(page: &ResultPage) -> Self {
        let show_empty_state = page.products.is_empty();
        Self {
            total_products: page.pagination.total,
            total_pages: page.pagination.pages,
            show_pagination: !show_empty_state && page.pagination.pages > 1,
            show_empty_state,
        }
    }
}
