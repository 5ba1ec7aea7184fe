//! Display pricing for product cards.
//!
//! A product's `price` is its list price, the value filters and sorts work on. When a
//! discount is present the card shows the list price struck through as the original
//! price, the discounted amount as the final price, and the difference as savings.
//! These helpers never change the record itself.

use crate::entities::Product;

/// List price with the product's discount, if any, taken off.
#[must_use]
pub fn final_price(product: &Product) -> f64 {
    product.discount.map_or(product.price, |pct| {
        product.price * f64::from(100_u8.saturating_sub(pct)) / 100.0
    })
}

/// Amount saved relative to the original price.
///
/// For generated products this is exactly `discount`% of the original price. Zero when
/// the product has no original price.
#[must_use]
pub fn savings(product: &Product) -> f64 {
    product
        .original_price
        .map_or(0.0, |original| original - final_price(product))
}

/// Formats an amount as dollars with two decimals (e.g., `$12.50`).
#[must_use]
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}
