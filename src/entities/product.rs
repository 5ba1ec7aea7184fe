//! Product entity - A single catalog record shown on the storefront.
//!
//! Products are created once when the catalog is built and never change afterwards.
//! Optional pricing details (`original_price`, `discount`) are explicit `Option`s and
//! are left out of the serialized form when absent.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Upper bound of the rating scale.
pub const MAX_RATING: f64 = 5.0;

/// The fixed set of categories a product can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Gadgets and devices
    Electronics,
    /// Clothing and accessories
    Fashion,
    /// Household goods
    Home,
    /// Printed and digital books
    Books,
}

impl Category {
    /// All categories, in the order generated products cycle through them.
    pub const ALL: [Self; 4] = [Self::Electronics, Self::Fashion, Self::Home, Self::Books];

    /// The display label, which is also the value a category filter matches against.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Fashion => "Fashion",
            Self::Home => "Home",
            Self::Books => "Books",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| Error::Config {
                message: format!("Unknown category '{s}'"),
            })
    }
}

/// Product record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, contiguous from 1 within a catalog
    pub id: u32,
    /// Display name (e.g., "Product 7")
    pub name: String,
    /// Free-form description text
    pub description: String,
    /// Current price in dollars
    pub price: f64,
    /// Price before the discount, never lower than `price`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Opaque image reference
    pub image: String,
    /// Category label
    pub category: Category,
    /// Average customer rating on a 0-5 scale
    pub rating: f64,
    /// Number of customer reviews
    pub reviews: u32,
    /// Whether the product can currently be ordered
    pub in_stock: bool,
    /// Discount percentage (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
}

impl Product {
    /// Checks the field invariants of a single record.
    ///
    /// # Errors
    /// Returns `Error::InvalidProduct` if:
    /// - The price is negative or not finite
    /// - The original price is not finite or is below the current price
    /// - The rating is outside 0-5
    /// - The discount is above 100
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Error::InvalidProduct {
            id: self.id,
            reason,
        };

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(invalid(format!("price {} must be a non-negative number", self.price)));
        }

        if let Some(original) = self.original_price {
            if !original.is_finite() || original < self.price {
                return Err(invalid(format!(
                    "original price {original} must be at least the current price {}",
                    self.price
                )));
            }
        }

        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(invalid(format!("rating {} must be within 0-5", self.rating)));
        }

        if let Some(discount) = self.discount {
            if discount > 100 {
                return Err(invalid(format!("discount {discount}% exceeds 100%")));
            }
        }

        Ok(())
    }

    /// Case-insensitive substring match against the name or description.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}
