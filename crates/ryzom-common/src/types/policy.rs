use serde::{Deserialize, Serialize};

/// How the encoder treats an alpha outside `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    /// Apply the quantization formula as-is; the nibble may leave `0..=15`.
    #[default]
    Passthrough,
    /// Clamp alpha into range before quantizing.
    Clamp,
    /// Refuse to encode.
    Reject,
}
