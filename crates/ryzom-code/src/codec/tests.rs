//! Tests for the color codec.

use super::*;

#[test]
fn decode_empty_is_absent() {
    assert_eq!(decode_color(""), None);
}

#[test]
fn decode_without_delimiters_is_absent() {
    assert_eq!(decode_color("ffff"), None);
    assert_eq!(decode_color("@{fff}"), None);
    assert_eq!(decode_color("{ffff}"), None);
    assert_eq!(decode_color("@{gggg}"), None);
}

#[test]
fn decode_primaries() {
    assert_eq!(decode_color("@{f00f}"), Some(Rgba::new(255, 0, 0, 1.0)));
    assert_eq!(decode_color("@{0f0f}"), Some(Rgba::new(0, 255, 0, 1.0)));
    assert_eq!(decode_color("@{00ff}"), Some(Rgba::new(0, 0, 255, 1.0)));
}

#[test]
fn decode_black_and_white() {
    assert_eq!(decode_color("@{000f}"), Some(Rgba::new(0, 0, 0, 1.0)));
    assert_eq!(decode_color("@{ffff}"), Some(Rgba::new(255, 255, 255, 1.0)));
    assert_eq!(decode_color("@{fff0}"), Some(Rgba::new(255, 255, 255, 0.0)));
}

#[test]
fn decode_is_case_insensitive() {
    assert_eq!(decode_color("@{F00F}"), decode_color("@{f00f}"));
    assert_eq!(decode_color("@{aBcD}"), decode_color("@{abcd}"));
}

#[test]
fn decode_finds_token_inside_text() {
    assert_eq!(decode_color("hello @{0f0f} world"), Some(Rgba::opaque(0, 255, 0)));
    // First token wins.
    assert_eq!(decode_color("@{f00f}@{00ff}"), Some(Rgba::opaque(255, 0, 0)));
}

#[test]
fn decode_mid_values() {
    let c = decode_color("@{8421}").unwrap();
    assert_eq!((c.r, c.g, c.b), (136, 68, 34));
    assert_eq!(c.a, 1.0 / 15.0);
}

#[test]
fn encode_primaries() {
    assert_eq!(encode_color(&Rgba::new(255, 0, 0, 1.0)), "@{f00f}");
    assert_eq!(encode_color(&Rgba::new(0, 255, 0, 1.0)), "@{0f0f}");
    assert_eq!(encode_color(&Rgba::new(0, 0, 255, 1.0)), "@{00ff}");
}

#[test]
fn encode_black_and_white() {
    assert_eq!(encode_color(&Rgba::new(0, 0, 0, 1.0)), "@{000f}");
    assert_eq!(encode_color(&Rgba::new(255, 255, 255, 1.0)), "@{ffff}");
    assert_eq!(encode_color(&Rgba::new(255, 255, 255, 0.0)), "@{fff0}");
}

#[test]
fn encode_rounds_half_up() {
    // 0.5 * 15 = 7.5
    assert_eq!(encode_color(&Rgba::new(0, 0, 0, 0.5)), "@{0008}");
    // 8 * 15 / 255 = 0.47 -> 0, 9 * 15 / 255 = 0.53 -> 1
    assert_eq!(encode_color(&Rgba::new(8, 9, 0, 1.0)), "@{010f}");
}

#[test]
fn encode_passthrough_out_of_range_alpha() {
    assert_eq!(encode_color(&Rgba::new(0, 0, 0, 2.0)), "@{0001e}");
    assert_eq!(encode_color(&Rgba::new(0, 0, 0, -0.5)), "@{000-7}");
}

#[test]
fn encode_non_finite_alpha_as_zero() {
    assert_eq!(encode_color(&Rgba::new(255, 0, 0, f64::INFINITY)), "@{f000}");
    assert_eq!(encode_color(&Rgba::new(255, 0, 0, f64::NEG_INFINITY)), "@{f000}");
    assert_eq!(encode_color(&Rgba::new(255, 0, 0, f64::NAN)), "@{f000}");
    assert_eq!(alpha_to_nibble(f64::INFINITY), 0);
}

#[test]
fn encode_non_finite_alpha_under_policies() {
    let inf = Rgba::new(0, 0, 0, f64::INFINITY);
    assert_eq!(encode_color_with(&inf, RangePolicy::Clamp).unwrap(), "@{000f}");
    assert!(encode_color_with(&inf, RangePolicy::Reject).is_err());
}

#[test]
fn encode_with_clamp() {
    let token = encode_color_with(&Rgba::new(255, 0, 0, 3.0), RangePolicy::Clamp).unwrap();
    assert_eq!(token, "@{f00f}");
    let token = encode_color_with(&Rgba::new(255, 0, 0, -1.0), RangePolicy::Clamp).unwrap();
    assert_eq!(token, "@{f000}");
}

#[test]
fn encode_with_reject() {
    let err = encode_color_with(&Rgba::new(0, 0, 0, 1.01), RangePolicy::Reject).unwrap_err();
    assert!(matches!(err, CodeError::ChannelOutOfRange { channel: "a", .. }));
    assert!(encode_color_with(&Rgba::new(0, 0, 0, f64::NAN), RangePolicy::Reject).is_err());
    assert_eq!(
        encode_color_with(&Rgba::new(0, 0, 0, 1.0), RangePolicy::Reject).unwrap(),
        "@{000f}"
    );
}

#[test]
fn encode_with_passthrough_matches_encode() {
    let c = Rgba::new(12, 200, 99, 0.3);
    assert_eq!(
        encode_color_with(&c, RangePolicy::Passthrough).unwrap(),
        encode_color(&c)
    );
}

#[test]
fn nibble_expansion_matches_rounding_law() {
    for n in 0u8..16 {
        let law = round_half_up(f64::from(n) * 255.0 / 15.0) as u8;
        assert_eq!(nibble_to_channel(n), law, "nibble {n}");
    }
}

#[test]
fn every_token_survives_decode_encode() {
    // 16^4 tokens: decoding then encoding is exact on the 4-bit grid.
    for r in 0u8..16 {
        for g in 0u8..16 {
            for b in 0u8..16 {
                for a in 0u8..16 {
                    let token = ColorToken::from_nibbles([r, g, b, a]).unwrap();
                    let rgba = decode_color(token.as_str()).unwrap();
                    assert_eq!(encode_color(&rgba), token.as_str());
                }
            }
        }
    }
}

#[test]
fn channel_round_trip_within_quantization_bound() {
    for c in 0..=255u8 {
        let rgba = Rgba::new(c, c, c, 1.0);
        let back = decode_color(&encode_color(&rgba)).unwrap();
        let diff = (i16::from(back.r) - i16::from(c)).abs();
        assert!(diff <= 8, "channel {c} came back as {}", back.r);
        assert_eq!(back.r, back.g);
        assert_eq!(back.g, back.b);
    }
}

#[test]
fn alpha_round_trip_lands_on_fifteenths() {
    for step in 0..=100 {
        let a = f64::from(step) / 100.0;
        let back = decode_color(&encode_color(&Rgba::new(0, 0, 0, a))).unwrap();
        let scaled = back.a * 15.0;
        assert!((scaled - scaled.round()).abs() < 1e-9, "alpha {a} -> {}", back.a);
        assert!((back.a - a).abs() <= 1.0 / 30.0 + 1e-9);
    }
}

#[test]
fn codec_is_deterministic() {
    let c = Rgba::new(17, 34, 51, 0.4);
    assert_eq!(encode_color(&c), encode_color(&c));
    assert_eq!(decode_color("@{1234}"), decode_color("@{1234}"));
}
