//! Conversion between `@{rgba}` tokens and [`Rgba`].
//!
//! Tokens carry 4 bits per channel, so the two directions are only
//! approximate inverses: an 8-bit channel may move by up to 8 after a
//! round trip. Alpha always lands on a multiple of 1/15.

mod quantize;

#[cfg(test)]
mod tests;

use ryzom_common::types::TOKEN_RE;
use ryzom_common::{CodeError, ColorToken, RangePolicy, Rgba};
use tracing::trace;

pub use quantize::{
    alpha_to_nibble, channel_to_nibble, nibble_to_alpha, nibble_to_channel, round_half_up,
};

/// Decode the first color token found in `candidate`.
///
/// Returns `None` for empty input or when no `@{hhhh}` token occurs.
/// Surrounding text is ignored, so `"x@{f00f}"` decodes as red.
pub fn decode_color(candidate: &str) -> Option<Rgba> {
    if candidate.is_empty() {
        return None;
    }

    let Some(found) = TOKEN_RE.find(candidate) else {
        trace!("no color token in {candidate:?}");
        return None;
    };
    let token = ColorToken::parse(found.as_str())?;
    Some(token_to_rgba(&token))
}

/// Expand a validated token to 8-bit RGB and fractional alpha.
pub fn token_to_rgba(token: &ColorToken) -> Rgba {
    let [r, g, b, a] = token.nibbles();
    Rgba {
        r: nibble_to_channel(r),
        g: nibble_to_channel(g),
        b: nibble_to_channel(b),
        a: nibble_to_alpha(a),
    }
}

/// Encode `rgba` as a token, applying the quantization formula unclamped.
///
/// Always succeeds. For alpha in `[0, 1]` the result is a valid token;
/// outside that range the alpha digit is whatever the formula yields.
/// Non-finite alpha (NaN, infinities) encodes as 0.
pub fn encode_color(rgba: &Rgba) -> String {
    format_token(rgba, rgba.a)
}

/// Encode `rgba` as a token under an explicit alpha range policy.
pub fn encode_color_with(rgba: &Rgba, policy: RangePolicy) -> Result<String, CodeError> {
    let alpha = match policy {
        RangePolicy::Passthrough => rgba.a,
        RangePolicy::Clamp => rgba.a.clamp(0.0, 1.0),
        RangePolicy::Reject => {
            if !(0.0..=1.0).contains(&rgba.a) {
                return Err(CodeError::ChannelOutOfRange {
                    channel: "a",
                    value: rgba.a,
                    min: 0.0,
                    max: 1.0,
                });
            }
            rgba.a
        }
    };
    Ok(format_token(rgba, alpha))
}

fn format_token(rgba: &Rgba, alpha: f64) -> String {
    let r = channel_to_nibble(rgba.r);
    let g = channel_to_nibble(rgba.g);
    let b = channel_to_nibble(rgba.b);
    let a = alpha_to_nibble(alpha);
    let in_range = u8::try_from(a)
        .ok()
        .and_then(|a| ColorToken::from_nibbles([r, g, b, a]));
    let token = match in_range {
        Some(token) => String::from(token),
        None => format!("@{{{r:x}{g:x}{b:x}{}}}", hex_digit(a)),
    };
    trace!("encoded {rgba} as {token}");
    token
}

/// Lowercase hex of a quantized value; negatives keep their sign.
fn hex_digit(n: i64) -> String {
    if n < 0 {
        format!("-{:x}", n.unsigned_abs())
    } else {
        format!("{n:x}")
    }
}
