//! Core storefront logic - framework-agnostic catalog, query, and browse operations.
//!
//! Nothing in here renders anything; the presentation layer takes the returned data
//! and decides how to draw it.

/// Browse session state and listing display decisions
pub mod browse;
/// Immutable product catalog
pub mod catalog;
/// Display price calculations for product cards
pub mod pricing;
/// Filter, sort, and paginate pipeline
pub mod query;
/// Asynchronous product API with simulated latency
pub mod storefront;

pub use browse::{BrowseSession, BrowseView};
pub use catalog::CatalogStore;
pub use query::{FilterRequest, Pagination, ResultPage, SortKey, run_query};
pub use storefront::Storefront;
