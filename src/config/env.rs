//! Environment overrides for storefront settings.
//!
//! Variables are read after `.env` has been loaded, so they can live in either place.
//! Only variables that are set take effect; anything unset keeps the file value. A
//! variable that is set but not valid Unicode is an error rather than being skipped.

use super::settings::{self, Settings};
use crate::errors::{Error, Result};
use std::{env::VarError, str::FromStr};
use tracing::{debug, info};

/// Path of the configuration file to load instead of ./config.toml
pub const CONFIG_PATH_VAR: &str = "STOREFRONT_CONFIG";
/// Overrides `[catalog] seed`
pub const CATALOG_SEED_VAR: &str = "CATALOG_SEED";
/// Overrides `[query] latency_ms`
pub const QUERY_LATENCY_VAR: &str = "QUERY_LATENCY_MS";

/// Loads settings from the configured file and applies environment overrides.
///
/// Uses `STOREFRONT_CONFIG` as the file path when set; that file must exist. Otherwise
/// ./config.toml is used if present, and defaults if not.
///
/// # Errors
/// Returns an error if the file cannot be loaded, a variable is not valid Unicode, or
/// an override does not parse.
pub fn load_settings() -> Result<Settings> {
    load_settings_with(|key| std::env::var(key))
}

/// Same as `load_settings`, reading variables through `lookup`.
///
/// # Errors
/// See `load_settings`.
pub fn load_settings_with<F>(lookup: F) -> Result<Settings>
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    let settings = match lookup(CONFIG_PATH_VAR) {
        Ok(path) => {
            info!("Loading configuration from {CONFIG_PATH_VAR}={path}");
            settings::load_config(path)?
        }
        Err(VarError::NotPresent) => settings::load_default_config()?,
        Err(e) => return Err(e.into()),
    };

    apply_overrides(settings, lookup)
}

/// Applies overrides looked up through `lookup`.
///
/// # Errors
/// Returns an error if:
/// - A variable is set but is not valid Unicode (`Error::EnvVar`)
/// - A variable is set but is not a valid number (`Error::Config`)
pub fn apply_overrides<F>(mut settings: Settings, lookup: F) -> Result<Settings>
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    if let Some(seed) = parse_var(&lookup, CATALOG_SEED_VAR)? {
        debug!(seed, "Catalog seed overridden from environment");
        settings.catalog.seed = seed;
    }

    if let Some(latency_ms) = parse_var(&lookup, QUERY_LATENCY_VAR)? {
        debug!(latency_ms, "Query latency overridden from environment");
        settings.query.latency_ms = latency_ms;
    }

    Ok(settings)
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = match lookup(key) {
        Ok(raw) => raw,
        Err(VarError::NotPresent) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    raw.trim().parse().map(Some).map_err(|e| Error::Config {
        message: format!("Invalid value '{raw}' for {key}: {e}"),
    })
}
