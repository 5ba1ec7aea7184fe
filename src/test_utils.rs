//! Shared test utilities for the storefront.
//!
//! This module provides hand-built product records and a small fixed catalog whose
//! contents every unit test can reason about exactly.

use crate::{
    core::catalog::CatalogStore,
    entities::{Category, Product},
};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")))
        .with_test_writer()
        .try_init();
}

/// Creates a product with sensible defaults.
///
/// # Defaults
/// * `name`: "Product {id}"
/// * `rating`: 4.0
/// * `reviews`: 10
/// * `in_stock`: true
/// * no discount or original price
#[must_use]
pub fn sample_product(id: u32, category: Category, price: f64) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        description: format!("Sample product {id}"),
        price,
        original_price: None,
        image: format!("https://example.test/{id}.png"),
        category,
        rating: 4.0,
        reviews: 10,
        in_stock: true,
        discount: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn fixture_product(
    id: u32,
    name: &str,
    description: &str,
    category: Category,
    price: f64,
    rating: f64,
    in_stock: bool,
    discount: Option<u8>,
) -> Product {
    Product {
        name: name.to_string(),
        description: description.to_string(),
        rating,
        in_stock,
        discount,
        original_price: discount.map(|_| price),
        ..sample_product(id, category, price)
    }
}

/// Six products covering every filter and sort case.
///
/// | id | category    | price | rating | in stock |
/// |----|-------------|-------|--------|----------|
/// | 1  | Electronics | 250   | 4.6    | yes      |
/// | 2  | Fashion     | 40    | 3.9    | yes      |
/// | 3  | Home        | 15    | 4.2    | no       |
/// | 4  | Books       | 99.5  | 4.9    | yes      |
/// | 5  | Electronics | 120   | 3.1    | yes      |
/// | 6  | Books       | 640   | 4.0    | no       |
#[must_use]
pub fn fixture_products() -> Vec<Product> {
    vec![
        fixture_product(
            1,
            "Wireless Headphones",
            "Noise cancelling over-ear headphones",
            Category::Electronics,
            250.0,
            4.6,
            true,
            Some(20),
        ),
        fixture_product(
            2,
            "Linen Shirt",
            "Relaxed fit shirt in a cotton blend",
            Category::Fashion,
            40.0,
            3.9,
            true,
            None,
        ),
        fixture_product(
            3,
            "Desk Lamp",
            "Adjustable LED light for the study",
            Category::Home,
            15.0,
            4.2,
            false,
            None,
        ),
        fixture_product(
            4,
            "Rust in Action",
            "A hands-on guide to systems programming",
            Category::Books,
            99.5,
            4.9,
            true,
            Some(10),
        ),
        fixture_product(
            5,
            "USB Charger",
            "Compact wall charger with two ports",
            Category::Electronics,
            120.0,
            3.1,
            true,
            None,
        ),
        fixture_product(
            6,
            "Collector's Atlas",
            "Leather-bound edition with folded maps",
            Category::Books,
            640.0,
            4.0,
            false,
            Some(50),
        ),
    ]
}

/// Catalog built from `fixture_products`.
///
/// # Panics
/// Panics if the fixture records stop satisfying the catalog invariants.
#[must_use]
#[allow(clippy::expect_used)]
pub fn fixture_store() -> CatalogStore {
    CatalogStore::from_products(fixture_products()).expect("fixture products form a valid catalog")
}
