//! Configuration for the ryzom-code tool.
//!
//! TOML-based, with every section defaulted so partial files work. The
//! file lives in the platform config directory unless a path is given.
//!
//! ```rust,no_run
//! use ryzom_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{:?}", config.encode.range_policy);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{EncodeConfig, LoggingConfig, RyzomConfig, CONFIG_SCHEMA_VERSION};

use ryzom_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default path when `None`.
pub fn load_config(path: Option<&Path>) -> Result<RyzomConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &RyzomConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
