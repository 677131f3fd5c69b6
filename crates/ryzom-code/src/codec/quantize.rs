//! 4-bit <-> 8-bit quantization laws.

/// Round to nearest, ties toward positive infinity.
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// `round(n * 255 / 15)`. The ratio is exactly 17, so no rounding occurs.
pub fn nibble_to_channel(nibble: u8) -> u8 {
    (nibble & 0x0f) * 17
}

/// `n / 15`, unrounded.
pub fn nibble_to_alpha(nibble: u8) -> f64 {
    f64::from(nibble & 0x0f) / 15.0
}

/// `round(c * 15 / 255)`.
pub fn channel_to_nibble(channel: u8) -> u8 {
    round_half_up(f64::from(channel) * 15.0 / 255.0) as u8
}

/// `round(a * 15)`. Not clamped: alpha outside `[0, 1]` leaves `0..=15`.
/// Non-finite alpha (NaN, infinities) quantizes to 0.
pub fn alpha_to_nibble(alpha: f64) -> i64 {
    if !alpha.is_finite() {
        return 0;
    }
    round_half_up(alpha * 15.0) as i64
}
