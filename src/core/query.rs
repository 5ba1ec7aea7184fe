//! Query pipeline - Filters, sorts, and paginates the catalog for one request.
//!
//! Every request runs the same fixed sequence against a catalog snapshot:
//! category, price range, stock, and search filters, then the sort, then the page slice.
//! Nothing here can fail. Empty filters return everything, unmatched filters return an
//! empty page, and pages past the end return no products with the usual totals.

use crate::{core::catalog::CatalogStore, entities::Product};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Page size used when a request does not set one.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// How results are ordered.
///
/// Only the price and rating keys reorder results. `Featured`, `Newest` and
/// `BestDiscount` keep catalog order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Catalog order
    #[default]
    Featured,
    /// Ascending price
    PriceLowToHigh,
    /// Descending price
    PriceHighToLow,
    /// Descending rating
    Rating,
    /// Offered in the sort menu; keeps catalog order
    Newest,
    /// Offered in the sort menu; keeps catalog order
    BestDiscount,
}

impl SortKey {
    const ALL: [Self; 6] = [
        Self::Featured,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::Rating,
        Self::Newest,
        Self::BestDiscount,
    ];

    /// The value used on the wire and in the sort menu.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLowToHigh => "price-low",
            Self::PriceHighToLow => "price-high",
            Self::Rating => "rating",
            Self::Newest => "newest",
            Self::BestDiscount => "discount",
        }
    }

    /// Human-readable label for the sort menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
            Self::Rating => "Customer Rating",
            Self::Newest => "Newest Arrivals",
            Self::BestDiscount => "Best Discount",
        }
    }

    /// `(value, label)` pairs for every sort option, in menu order.
    #[must_use]
    pub fn options() -> Vec<(&'static str, &'static str)> {
        Self::ALL
            .into_iter()
            .map(|key| (key.as_str(), key.label()))
            .collect()
    }

    /// Parses a wire value. Unknown values fall back to `Featured`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .unwrap_or_else(|| {
                debug!(value, "Unknown sort key, keeping catalog order");
                Self::Featured
            })
    }

    /// Reorders matched products in place. Keys without a comparator leave the order alone.
    fn sort(self, products: &mut [&Product]) {
        match self {
            Self::PriceLowToHigh => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
            Self::PriceHighToLow => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
            Self::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            Self::Featured | Self::Newest | Self::BestDiscount => {}
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

/// Constraints and paging for a single query.
///
/// A new request is built for every interaction; `None` and empty values mean
/// "no constraint".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterRequest {
    /// Exact, case-sensitive category label
    pub category: Option<String>,
    /// Inclusive lower price bound; only applied together with `max_price`
    pub min_price: Option<f64>,
    /// Inclusive upper price bound; only applied together with `min_price`
    pub max_price: Option<f64>,
    /// Keep only in-stock products
    pub in_stock: bool,
    /// Case-insensitive substring matched against name and description
    pub search: Option<String>,
    /// Result ordering
    pub sort_by: SortKey,
    /// 1-based page number
    pub page: Option<u32>,
    /// Page size
    pub limit: Option<u32>,
}

impl FilterRequest {
    /// Restricts results to one category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restricts results to an inclusive price window.
    #[must_use]
    pub const fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.min_price = Some(min);
        self.max_price = Some(max);
        self
    }

    /// Sets the in-stock-only flag.
    #[must_use]
    pub const fn with_in_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Sets the free-text search term.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets the result ordering.
    #[must_use]
    pub const fn with_sort(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Selects a page and page size.
    #[must_use]
    pub const fn with_page(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    /// Effective page number; unset or zero means the first page.
    #[must_use]
    pub fn effective_page(&self) -> u32 {
        self.page.filter(|page| *page > 0).unwrap_or(1)
    }

    /// Effective page size; unset or zero means `DEFAULT_PAGE_SIZE`.
    #[must_use]
    pub fn effective_limit(&self) -> u32 {
        self.limit.filter(|limit| *limit > 0).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().filter(|category| !category.is_empty())
    }

    fn search_filter(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|search| !search.is_empty())
            .map(str::to_lowercase)
    }

    fn price_window(&self) -> Option<(f64, f64)> {
        match (self.min_price, self.max_price) {
            (Some(min), Some(max)) => Some((min, max)),
            (Some(min), None) => {
                warn!(min_price = min, "Ignoring minimum price without a maximum");
                None
            }
            (None, Some(max)) => {
                warn!(max_price = max, "Ignoring maximum price without a minimum");
                None
            }
            (None, None) => None,
        }
    }
}

/// Paging metadata returned alongside a page of products.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based page that was returned
    pub page: u32,
    /// Page size used
    pub limit: u32,
    /// Number of products matching the filters, across all pages
    pub total: usize,
    /// Number of pages at this page size
    pub pages: usize,
}

/// One page of query results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    /// Products on this page, in result order
    pub products: Vec<Product>,
    /// Paging metadata
    pub pagination: Pagination,
}

/// Runs one request against a catalog snapshot.
///
/// Filters apply in a fixed order (category, price window, stock, search), followed by
/// a stable sort and the page slice. The price window only applies when both bounds
/// are set; a lone bound is ignored with a warning.
#[must_use]
pub fn run_query(catalog: &CatalogStore, filter: &FilterRequest) -> ResultPage {
    let category = filter.category_filter();
    let price_window = filter.price_window();
    let search = filter.search_filter();

    let mut matched: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|product| category.is_none_or(|category| product.category.as_str() == category))
        .filter(|product| {
            price_window.is_none_or(|(min, max)| product.price >= min && product.price <= max)
        })
        .filter(|product| !filter.in_stock || product.in_stock)
        .filter(|product| {
            search
                .as_deref()
                .is_none_or(|needle| product.matches_search(needle))
        })
        .collect();

    filter.sort_by.sort(&mut matched);

    let page = filter.effective_page();
    let limit = filter.effective_limit();
    let total = matched.len();
    let pages = total.div_ceil(limit as usize);

    let start = (page as usize - 1).saturating_mul(limit as usize);
    let products: Vec<Product> = matched
        .into_iter()
        .skip(start)
        .take(limit as usize)
        .cloned()
        .collect();

    debug!(
        category = category.unwrap_or(""),
        search = search.as_deref().unwrap_or(""),
        in_stock = filter.in_stock,
        sort_by = filter.sort_by.as_str(),
        page,
        limit,
        total,
        pages,
        returned = products.len(),
        "Ran catalog query"
    );
    let ids: Vec<u32> = products.iter().map(|product| product.id).collect();
    trace!(?ids, "Page contents");

    ResultPage {
        products,
        pagination: Pagination {
            page,
            limit,
            total,
            pages,
        },
    }
}
