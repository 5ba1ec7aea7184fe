//! Storefront - The asynchronous product API the listing page calls.
//!
//! Wraps a catalog snapshot and answers queries after a fixed simulated delay, the way
//! a remote product service would. Queries always resolve.

use crate::{
    config::Settings,
    core::{
        browse::BrowseSession,
        catalog::CatalogStore,
        query::{FilterRequest, ResultPage, run_query},
    },
    entities::Category,
};
use std::time::Duration;
use tracing::{info, instrument};

/// Product API over one immutable catalog.
#[derive(Clone, Debug)]
pub struct Storefront {
    catalog: CatalogStore,
    latency: Duration,
    page_size: u32,
}

impl Storefront {
    /// Creates a storefront over an existing catalog.
    #[must_use]
    pub const fn new(catalog: CatalogStore, latency: Duration, page_size: u32) -> Self {
        Self {
            catalog,
            latency,
            page_size,
        }
    }

    /// Generates a catalog and storefront from settings.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let catalog = CatalogStore::generate(settings.catalog.size, settings.catalog.seed);
        info!(
            products = catalog.len(),
            latency_ms = settings.query.latency_ms,
            "Storefront ready"
        );
        Self::new(
            catalog,
            settings.query.latency(),
            settings.query.page_size,
        )
    }

    /// Fetches one page of products after the simulated delay.
    #[instrument(skip_all, fields(page = filter.effective_page()))]
    pub async fn query(&self, filter: FilterRequest) -> ResultPage {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        run_query(&self.catalog, &filter)
    }

    /// The catalog snapshot served by this storefront.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Product count per category for the sidebar.
    #[must_use]
    pub fn category_facets(&self) -> Vec<(Category, usize)> {
        self.catalog.category_counts()
    }

    /// Starts a browse session using the configured page size.
    #[must_use]
    pub const fn browse(&self) -> BrowseSession {
        BrowseSession::new(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::DEFAULT_PAGE_SIZE;
    use crate::test_utils::{fixture_store, init_test_tracing};
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_query_waits_for_latency() {
        init_test_tracing();
        let storefront = Storefront::new(fixture_store(), Duration::from_millis(300), 12);

        let started = Instant::now();
        let page = storefront.query(FilterRequest::default()).await;

        assert!(started.elapsed() >= Duration::from_millis(300));
        assert_eq!(page.pagination.total, 6);
    }

    #[tokio::test]
    async fn test_zero_latency_resolves_immediately() {
        let storefront = Storefront::new(fixture_store(), Duration::ZERO, 12);
        let page = storefront
            .query(FilterRequest::default().with_category("Electronics"))
            .await;

        assert_eq!(page.pagination.total, 2);
    }

    #[tokio::test]
    async fn test_from_settings_uses_configured_catalog() {
        let mut settings = Settings::default();
        settings.catalog.size = 10;
        settings.catalog.seed = 3;
        settings.query.latency_ms = 0;

        let storefront = Storefront::from_settings(&settings);
        assert_eq!(storefront.catalog().len(), 10);

        let session = storefront.browse();
        let page = storefront.query(session.request()).await;
        assert_eq!(page.pagination.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(page.pagination.total, 10);
        assert_eq!(page.products.len(), 10);
    }

    #[test]
    fn test_category_facets() {
        let storefront = Storefront::new(fixture_store(), Duration::ZERO, 12);
        let facets = storefront.category_facets();

        assert_eq!(
            facets,
            vec![
                (Category::Electronics, 2),
                (Category::Fashion, 1),
                (Category::Home, 1),
                (Category::Books, 2),
            ]
        );
    }
}
