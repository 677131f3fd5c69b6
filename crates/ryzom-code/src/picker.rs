//! Parsing of the CSS color strings emitted by color pickers.
//!
//! Pickers report `rgb(R, G, B)` for opaque colors and `rgba(R, G, B, A)`
//! otherwise, with a single space after each comma. Alpha is either a
//! single digit or a `0.`-prefixed fraction.

use crate::codec::encode_color_with;
use regex::Regex;
use ryzom_common::{CodeError, RangePolicy, Rgba};
use std::sync::LazyLock;
use tracing::debug;

static RGB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rgb\((\d+),\s(\d+),\s(\d+)\)").unwrap());

static RGBA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rgba\((\d+),\s(\d+),\s(\d+),\s(\d|0\.\d+)\)").unwrap());

/// Parse a picker color. Returns `None` when neither form matches or a
/// channel does not fit in 8 bits.
pub fn parse_picker_color(s: &str) -> Option<Rgba> {
    if let Some(caps) = RGB_RE.captures(s) {
        let r = caps[1].parse().ok()?;
        let g = caps[2].parse().ok()?;
        let b = caps[3].parse().ok()?;
        return Some(Rgba::opaque(r, g, b));
    }

    let caps = RGBA_RE.captures(s)?;
    let r = caps[1].parse().ok()?;
    let g = caps[2].parse().ok()?;
    let b = caps[3].parse().ok()?;
    let a = caps[4].parse().ok()?;
    Some(Rgba::new(r, g, b, a))
}

/// Turn a picker color straight into a token for insertion.
pub fn picker_to_token(s: &str, policy: RangePolicy) -> Result<String, CodeError> {
    let rgba = parse_picker_color(s).ok_or_else(|| CodeError::InvalidPickerColor(s.into()))?;
    debug!("picker color {s:?} -> {rgba}");
    encode_color_with(&rgba, policy)
}
