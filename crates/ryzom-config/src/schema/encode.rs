//! Token encoding configuration types.

use ryzom_common::RangePolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeConfig {
    /// Handling of alpha outside `[0, 1]`: passthrough, clamp, reject.
    pub range_policy: RangePolicy,
}
