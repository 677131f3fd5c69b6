//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod encode;
mod logging;

pub use encode::*;
pub use logging::*;
pub use ryzom_code::RenderOptions;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RyzomConfig {
    pub encode: EncodeConfig,
    pub render: RenderOptions,
    pub logging: LoggingConfig,
}
