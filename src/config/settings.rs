//! Storefront settings loading from config.toml
//!
//! This module loads catalog and query settings from a TOML configuration file.
//! Every field has a default, so a partial file (or no file at all) yields a working
//! configuration that matches the stock storefront: 100 products, a fresh random seed,
//! 300 ms of simulated latency, and 12 products per page.

use crate::{
    core::{catalog::DEFAULT_CATALOG_SIZE, query::DEFAULT_PAGE_SIZE},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::{path::Path, time::Duration};
use tracing::{debug, info};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How the catalog is generated
    pub catalog: CatalogSettings,
    /// How queries are served
    pub query: QuerySettings,
}

/// `[catalog]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Number of products to generate
    pub size: u32,
    /// PRNG seed; zero picks a fresh seed on every start
    pub seed: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            size: DEFAULT_CATALOG_SIZE,
            seed: 0,
        }
    }
}

/// `[query]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuerySettings {
    /// Simulated latency before each query resolves, in milliseconds
    pub latency_ms: u64,
    /// Page size browse sessions request
    pub page_size: u32,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            latency_ms: 300,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QuerySettings {
    /// Simulated latency as a `Duration`.
    #[must_use]
    pub const fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// Loads settings from a TOML file
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A field has the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    parse_config(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config file {path_ref:?}: {e}"),
    })
}

/// Parses settings from TOML text.
///
/// # Errors
/// Returns the TOML error if the text is not a valid settings document.
pub fn parse_config(contents: &str) -> std::result::Result<Settings, toml::de::Error> {
    toml::from_str(contents)
}

/// Loads settings from ./config.toml, falling back to defaults when the file is absent.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_default_config() -> Result<Settings> {
    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        load_config(DEFAULT_CONFIG_PATH)
    } else {
        info!("No {DEFAULT_CONFIG_PATH} found, using default settings");
        Ok(Settings::default())
    }
}
