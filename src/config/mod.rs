/// Settings structure and config.toml loading
pub mod settings;

/// Environment variable overrides
pub mod env;

pub use env::load_settings;
pub use settings::Settings;
