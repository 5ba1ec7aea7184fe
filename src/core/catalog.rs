//! Catalog store - The immutable set of products every query reads from.
//!
//! A `CatalogStore` is built once, either by generating mock records from a seed or by
//! wrapping explicitly supplied records, and is never mutated afterwards. Cloning a store
//! is cheap and shares the same underlying records, so it can be handed to every query
//! without locking.

use crate::{
    entities::{Category, Product},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::{collections::HashSet, sync::Arc};
use tracing::{debug, info};

/// Number of products generated when no size is configured.
pub const DEFAULT_CATALOG_SIZE: u32 = 100;

/// Immutable snapshot of catalog products.
#[derive(Clone, Debug)]
pub struct CatalogStore {
    products: Arc<[Product]>,
    generated_at: DateTime<Utc>,
}

impl CatalogStore {
    /// Generates `size` mock products with ids `1..=size`.
    ///
    /// The shape of every record is fixed by its index; prices, ratings, review counts,
    /// stock and discounts are drawn from a PRNG seeded with `seed`. A seed of zero picks
    /// a fresh random seed, so values differ between runs while count and ids do not.
    #[must_use]
    pub fn generate(size: u32, seed: u64) -> Self {
        // Use a random seed when the caller provides zero.
        let seed = if seed == 0 {
            rand::thread_rng().r#gen()
        } else {
            seed
        };
        let mut rng = StdRng::seed_from_u64(seed);

        let products: Vec<Product> = (1..=size)
            .map(|id| generate_product(&mut rng, id))
            .collect();

        info!(size, seed, "Generated mock catalog");
        Self::new(products)
    }

    /// Wraps explicitly supplied records, checking every catalog invariant.
    ///
    /// Records keep the order they are given in; that order is what the "featured"
    /// sort returns.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Any record fails `Product::validate`
    /// - Two records share an id
    /// - The ids are not exactly `1..=len`
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id) {
                return Err(Error::InvalidCatalog {
                    message: format!("duplicate product id {}", product.id),
                });
            }
        }

        let expected = u32::try_from(products.len()).map_err(|_| Error::InvalidCatalog {
            message: format!("{} products exceed the id space", products.len()),
        })?;
        if let Some(missing) = (1..=expected).find(|id| !seen.contains(id)) {
            return Err(Error::InvalidCatalog {
                message: format!("product ids are not contiguous: id {missing} is missing"),
            });
        }

        debug!(size = products.len(), "Loaded catalog from supplied products");
        Ok(Self::new(products))
    }

    fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
            generated_at: Utc::now(),
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// When this snapshot was built.
    #[must_use]
    pub const fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Number of products per category, in `Category::ALL` order.
    ///
    /// Categories with no products are still listed with a count of zero.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let count = self
                    .products
                    .iter()
                    .filter(|product| product.category == category)
                    .count();
                (category, count)
            })
            .collect()
    }
}

fn generate_product(rng: &mut StdRng, id: u32) -> Product {
    let index = id - 1;
    let price = f64::from(rng.gen_range(50_u32..550));
    let rating = rng.gen_range(3.0..5.0);
    let reviews = rng.gen_range(0..200);
    let in_stock = rng.gen_bool(0.8);
    let discount = rng.gen_bool(0.5).then(|| rng.gen_range(10_u8..60));
    // `price` is the list price; a discount is taken off it at display time.
    let original_price = discount.map(|_| price);

    Product {
        id,
        name: format!("Product {id}"),
        description: format!("High-quality product {id} with amazing features"),
        price,
        original_price,
        image: format!("https://picsum.photos/seed/product{index}/400/300"),
        category: Category::ALL[index as usize % Category::ALL.len()],
        rating,
        reviews,
        in_stock,
        discount,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{init_test_tracing, sample_product};

    #[test]
    fn test_generate_produces_contiguous_ids() {
        init_test_tracing();
        let store = CatalogStore::generate(DEFAULT_CATALOG_SIZE, 0);

        assert_eq!(store.len(), 100);
        for (index, product) in store.products().iter().enumerate() {
            assert_eq!(product.id as usize, index + 1);
        }
    }

    #[test]
    fn test_generated_records_hold_invariants() {
        let store = CatalogStore::generate(DEFAULT_CATALOG_SIZE, 42);

        for product in store.products() {
            product.validate().unwrap();
            assert!((50.0..550.0).contains(&product.price));
            assert!((3.0..5.0).contains(&product.rating));
            assert!(product.reviews < 200);
            assert_eq!(product.discount.is_some(), product.original_price.is_some());
            if let Some(original) = product.original_price {
                assert_eq!(original, product.price);
            }
            if let Some(discount) = product.discount {
                assert!((10..60).contains(&discount));
            }
        }
    }

    #[test]
    fn test_generate_cycles_categories_by_index() {
        let store = CatalogStore::generate(8, 7);
        let categories: Vec<Category> = store.products().iter().map(|p| p.category).collect();

        assert_eq!(
            categories,
            vec![
                Category::Electronics,
                Category::Fashion,
                Category::Home,
                Category::Books,
                Category::Electronics,
                Category::Fashion,
                Category::Home,
                Category::Books,
            ]
        );
        assert_eq!(store.get(1).unwrap().name, "Product 1");
        assert_eq!(
            store.get(1).unwrap().image,
            "https://picsum.photos/seed/product0/400/300"
        );
    }

    #[test]
    fn test_same_seed_reproduces_values() {
        let first = CatalogStore::generate(20, 99);
        let second = CatalogStore::generate(20, 99);

        assert_eq!(first.products(), second.products());
    }

    #[test]
    fn test_category_counts_cover_every_category() {
        let store = CatalogStore::generate(DEFAULT_CATALOG_SIZE, 5);
        let counts = store.category_counts();

        assert_eq!(counts.len(), Category::ALL.len());
        assert!(counts.iter().all(|(_, count)| *count == 25));

        let empty = CatalogStore::from_products(Vec::new()).unwrap();
        assert!(empty.is_empty());
        assert!(empty.category_counts().iter().all(|(_, count)| *count == 0));
    }

    #[test]
    fn test_from_products_rejects_duplicate_ids() {
        let products = vec![
            sample_product(1, Category::Home, 10.0),
            sample_product(1, Category::Books, 20.0),
        ];

        let result = CatalogStore::from_products(products);
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidCatalog { message: _ }
        ));
    }

    #[test]
    fn test_from_products_rejects_gaps() {
        let products = vec![
            sample_product(1, Category::Home, 10.0),
            sample_product(3, Category::Books, 20.0),
        ];

        assert!(CatalogStore::from_products(products).is_err());
    }

    #[test]
    fn test_from_products_rejects_invalid_record() {
        let mut bad = sample_product(1, Category::Home, 10.0);
        bad.rating = -0.5;

        let result = CatalogStore::from_products(vec![bad]);
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidProduct { id: 1, reason: _ }
        ));
    }

    #[test]
    fn test_from_products_keeps_given_order() {
        let products = vec![
            sample_product(2, Category::Home, 10.0),
            sample_product(1, Category::Books, 20.0),
        ];

        let store = CatalogStore::from_products(products).unwrap();
        assert_eq!(store.products()[0].id, 2);
        assert_eq!(store.get(1).unwrap().price, 20.0);
        assert!(store.get(3).is_none());
    }
}
