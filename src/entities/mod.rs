//! Entity module - Plain data records held by the catalog.
//! Entities carry no behaviour beyond validating their own fields.

pub mod product;

pub use product::{Category, Product};
