//! Unified error types and result handling for the storefront.
//!
//! The query path never fails; these errors come from loading configuration
//! and from validating product records injected into a catalog.

use thiserror::Error;

/// Errors raised while configuring the storefront or building a catalog.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read, parsed, or overridden
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A product record violates one of its field invariants
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct {
        /// Identifier of the offending record
        id: u32,
        /// Which invariant failed
        reason: String,
    },

    /// The set of records cannot form a catalog (duplicate or missing ids)
    #[error("Invalid catalog: {message}")]
    InvalidCatalog {
        /// What went wrong
        message: String,
    },

    /// Reading a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An environment variable is set but is not valid Unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
