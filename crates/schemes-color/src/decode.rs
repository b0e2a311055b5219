// SPDX-License-Identifier: MIT
//
// Color literal decoders.
//
// Three notations are understood:
//
//   #RRGGBB       exactly six hex digits, either case
//   rgb(R,G,B)    decimal bytes, 0–255
//   hsv(H,S,V)    reals: hue in degrees (0–360), S and V in percent (0–100)
//
// Whitespace around components is tolerated. Anything after the closing
// parenthesis of a function notation is ignored.
//
// HSV uses the branch-free "kink" formulation: each output channel is a
// clamped triangle wave of the hue, pulled toward white by (1 - S) and
// scaled by V. Bytes are produced with ceil(x * 255).
#![allow(clippy::many_single_char_names)]

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::color::Color;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Which literal grammar a decoder was applying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `#RRGGBB`
    Hex,
    /// `rgb(R,G,B)`
    Rgb,
    /// `hsv(H,S,V)`
    Hsv,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsv => "hsv",
        })
    }
}

/// A color literal that does not match the grammar of its notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed {notation} color literal `{literal}`")]
pub struct MalformedLiteral {
    /// The grammar that rejected the literal.
    pub notation: Notation,
    /// The offending text, as given.
    pub literal: String,
}

impl MalformedLiteral {
    pub(crate) fn new(notation: Notation, literal: &str) -> Self {
        Self {
            notation,
            literal: literal.to_owned(),
        }
    }
}

// ─── Dispatch ────────────────────────────────────────────────────────────────

/// Decode a literal in whichever notation it appears to use.
///
/// Sniffing order: contains `rgb` → RGB, contains `hsv` → HSV, starts with
/// `#` → hex. Returns `Ok(None)` when none of these apply, so callers can
/// decide for themselves whether an unknown notation is fatal.
///
/// # Errors
///
/// Returns [`MalformedLiteral`] if the sniffed notation fails to decode.
pub fn decode_literal(literal: &str) -> Result<Option<Color>, MalformedLiteral> {
    let literal = literal.trim();

    if literal.contains("rgb") {
        decode_rgb(literal).map(Some)
    } else if literal.contains("hsv") {
        decode_hsv(literal).map(Some)
    } else if literal.starts_with('#') {
        decode_hex(literal).map(Some)
    } else {
        Ok(None)
    }
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

/// Decode `#RRGGBB`.
///
/// # Errors
///
/// Fails if the `#` is missing, the digit count is not six, or any digit
/// is not hexadecimal.
pub fn decode_hex(literal: &str) -> Result<Color, MalformedLiteral> {
    let err = || MalformedLiteral::new(Notation::Hex, literal);

    let digits = literal.trim().strip_prefix('#').ok_or_else(err)?.as_bytes();
    if digits.len() != 6 {
        return Err(err());
    }

    let r = parse_hex_byte(&digits[0..2]).ok_or_else(err)?;
    let g = parse_hex_byte(&digits[2..4]).ok_or_else(err)?;
    let b = parse_hex_byte(&digits[4..6]).ok_or_else(err)?;
    Ok(Color::rgb8(r, g, b))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Function notations ──────────────────────────────────────────────────────

static RGB_CALL: LazyLock<Regex> = LazyLock::new(|| function_call("rgb"));
static HSV_CALL: LazyLock<Regex> = LazyLock::new(|| function_call("hsv"));

/// `name(a,b,c)` with three comma-separated, paren-free components.
fn function_call(name: &str) -> Regex {
    Regex::new(&format!(r"^\s*{name}\(([^,)]*),([^,)]*),([^,)]*)\)"))
        .unwrap_or_else(|e| unreachable!("static color pattern failed to compile: {e}"))
}

/// Split a function-notation literal into its three trimmed components.
fn components<'a>(call: &Regex, literal: &'a str) -> Option<[&'a str; 3]> {
    let caps = call.captures(literal)?;
    Some([1, 2, 3].map(|i| caps.get(i).map_or("", |m| m.as_str().trim())))
}

/// Decode `rgb(R,G,B)` with decimal components in 0–255.
///
/// # Errors
///
/// Fails on a missing component, a non-numeric component, or a value
/// that does not fit in a byte.
pub fn decode_rgb(literal: &str) -> Result<Color, MalformedLiteral> {
    let err = || MalformedLiteral::new(Notation::Rgb, literal);

    let [r, g, b] = components(&RGB_CALL, literal).ok_or_else(err)?;
    let channel = |s: &str| s.parse::<u8>().map_err(|_| err());
    Ok(Color::rgb8(channel(r)?, channel(g)?, channel(b)?))
}

/// Decode `hsv(H,S,V)`: hue in degrees, saturation and value in percent.
///
/// Out-of-range components are clamped, not rejected: `hsv(400,150,100)`
/// is the same color as `hsv(360,100,100)`.
///
/// # Errors
///
/// Fails on a missing component, or one that is not a finite real number.
pub fn decode_hsv(literal: &str) -> Result<Color, MalformedLiteral> {
    let err = || MalformedLiteral::new(Notation::Hsv, literal);

    let [h, s, v] = components(&HSV_CALL, literal).ok_or_else(err)?;
    let real = |s: &str| {
        s.parse::<f64>()
            .ok()
            .filter(|x| x.is_finite())
            .ok_or_else(err)
    };
    let (h, s, v) = (real(h)?, real(s)?, real(v)?);

    Ok(hsv_to_color(h, s, v))
}

/// The numeric HSV pipeline, on already-parsed components.
fn hsv_to_color(h: f64, s: f64, v: f64) -> Color {
    let h = h.clamp(0.0, 360.0) / 360.0;
    let s = s.clamp(0.0, 100.0) / 100.0;
    let v = v.clamp(0.0, 100.0) / 100.0;

    let channel = |offset: f64| v * lerp(1.0, kink(h + offset), s);

    Color::rgb8(
        to_byte(channel(1.0)),
        to_byte(channel(2.0 / 3.0)),
        to_byte(channel(1.0 / 3.0)),
    )
}

/// Clamped triangle wave: 1 across a third of the hue circle, 0 across
/// another third, linear ramps between.
#[inline]
#[allow(clippy::suboptimal_flops)]
fn kink(x: f64) -> f64 {
    ((fract(x) * 6.0 - 3.0).abs() - 1.0).clamp(0.0, 1.0)
}

#[inline]
fn fract(x: f64) -> f64 {
    x - x.floor()
}

#[inline]
#[allow(clippy::suboptimal_flops)]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Convert a unit channel (0.0–1.0) to a byte, rounding up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(unit: f64) -> u8 {
    // With V and the kink in [0, 1] the product never leaves [0, 255];
    // the clamp keeps the cast total regardless.
    (unit * 255.0).ceil().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_fixture() {
        assert_eq!(decode_hex("#FF2424").unwrap(), Color::rgb8(255, 36, 36));
    }

    #[test]
    fn hex_accepts_lowercase() {
        assert_eq!(decode_hex("#c0ffee").unwrap(), Color::rgb8(0xC0, 0xFF, 0xEE));
    }

    #[test]
    fn hex_rejects_bad_digits() {
        let err = decode_hex("#ZZZZZZ").unwrap_err();
        assert_eq!(err.notation, Notation::Hex);
        assert_eq!(err.literal, "#ZZZZZZ");
    }

    #[test]
    fn hex_rejects_wrong_length() {
        assert!(decode_hex("#FFF").is_err());
        assert!(decode_hex("#FF24241").is_err());
        assert!(decode_hex("#").is_err());
    }

    #[test]
    fn hex_requires_hash() {
        assert!(decode_hex("FF2424").is_err());
    }

    #[test]
    fn hex_rejects_multibyte_text() {
        // Six bytes, but not six digits.
        assert!(decode_hex("#ééé").is_err());
    }

    // ── RGB ──────────────────────────────────────────────────────────────

    #[test]
    fn rgb_fixture() {
        assert_eq!(decode_rgb("rgb(1,2,3)").unwrap(), Color::rgb8(1, 2, 3));
    }

    #[test]
    fn rgb_tolerates_spaces() {
        assert_eq!(decode_rgb(" rgb( 10 , 20 ,30 ) ").unwrap(), Color::rgb8(10, 20, 30));
    }

    #[test]
    fn rgb_rejects_missing_component() {
        let err = decode_rgb("rgb(1,2)").unwrap_err();
        assert_eq!(err.notation, Notation::Rgb);
    }

    #[test]
    fn rgb_rejects_non_numeric() {
        assert!(decode_rgb("rgb(1,two,3)").is_err());
        assert!(decode_rgb("rgb(1,,3)").is_err());
        assert!(decode_rgb("rgb(1.5,2,3)").is_err());
    }

    #[test]
    fn rgb_rejects_out_of_range() {
        assert!(decode_rgb("rgb(256,0,0)").is_err());
        assert!(decode_rgb("rgb(-1,0,0)").is_err());
    }

    #[test]
    fn rgb_rejects_unclosed() {
        assert!(decode_rgb("rgb(1,2,3").is_err());
        assert!(decode_rgb("rgba(1,2,3)").is_err());
    }

    // ── HSV ──────────────────────────────────────────────────────────────

    #[test]
    fn hsv_primaries() {
        assert_eq!(decode_hsv("hsv(0,100,100)").unwrap(), Color::rgb8(255, 0, 0));
        assert_eq!(decode_hsv("hsv(60,100,100)").unwrap(), Color::rgb8(255, 255, 0));
        assert_eq!(decode_hsv("hsv(30,100,100)").unwrap(), Color::rgb8(255, 128, 0));
    }

    #[test]
    fn hsv_ceil_keeps_float_residue() {
        // A third of the hue circle is not exact in binary, and ceil turns
        // the leftover epsilon into a whole step.
        assert_eq!(decode_hsv("hsv(120,100,100)").unwrap(), Color::rgb8(1, 255, 0));
        assert_eq!(decode_hsv("hsv(240,100,100)").unwrap(), Color::rgb8(0, 1, 255));
    }

    #[test]
    fn hsv_half_saturation() {
        assert_eq!(decode_hsv("hsv(180,50,50)").unwrap(), Color::rgb8(64, 128, 128));
    }

    #[test]
    fn hsv_grays() {
        assert_eq!(decode_hsv("hsv(0,0,100)").unwrap(), Color::WHITE);
        assert_eq!(decode_hsv("hsv(200,0,0)").unwrap(), Color::BLACK);
        assert_eq!(decode_hsv("hsv(0,0,50)").unwrap(), Color::rgb8(128, 128, 128));
    }

    #[test]
    fn hsv_full_hue_wraps_to_red() {
        assert_eq!(decode_hsv("hsv(360,100,100)").unwrap(), Color::rgb8(255, 0, 1));
    }

    #[test]
    fn hsv_clamps_out_of_range() {
        assert_eq!(
            decode_hsv("hsv(400,150,200)").unwrap(),
            decode_hsv("hsv(360,100,100)").unwrap()
        );
        assert_eq!(decode_hsv("hsv(-20,-5,-1)").unwrap(), Color::BLACK);
    }

    #[test]
    fn hsv_accepts_reals_and_spaces() {
        assert_eq!(decode_hsv("hsv( 60.0 , 100 , 100.0 )").unwrap(), Color::rgb8(255, 255, 0));
    }

    #[test]
    fn hsv_rejects_bad_components() {
        assert!(decode_hsv("hsv(0,100)").is_err());
        assert!(decode_hsv("hsv(a,b,c)").is_err());
        assert!(decode_hsv("hsv(NaN,100,100)").is_err());
        assert!(decode_hsv("hsv(inf,100,100)").is_err());
        assert_eq!(decode_hsv("hsv(,,)").unwrap_err().notation, Notation::Hsv);
    }

    // ── Dispatch ─────────────────────────────────────────────────────────

    #[test]
    fn dispatch_by_content() {
        assert_eq!(decode_literal("#010203").unwrap(), Some(Color::rgb8(1, 2, 3)));
        assert_eq!(decode_literal(" rgb(1,2,3) ").unwrap(), Some(Color::rgb8(1, 2, 3)));
        assert_eq!(decode_literal("hsv(0,0,100)").unwrap(), Some(Color::WHITE));
    }

    #[test]
    fn dispatch_unknown_notation_is_none() {
        assert_eq!(decode_literal("red").unwrap(), None);
        assert_eq!(decode_literal("").unwrap(), None);
        assert_eq!(decode_literal("   ").unwrap(), None);
    }

    #[test]
    fn dispatch_rgb_wins_over_hash() {
        // Contains "rgb", so the RGB grammar applies and rejects it.
        let err = decode_literal("#rgb").unwrap_err();
        assert_eq!(err.notation, Notation::Rgb);
    }

    #[test]
    fn error_message_names_notation_and_literal() {
        let err = decode_hex("#12").unwrap_err();
        assert_eq!(err.to_string(), "malformed hex color literal `#12`");
    }

    // ── Numeric bounds ───────────────────────────────────────────────────

    #[test]
    fn to_byte_bounds() {
        assert_eq!(to_byte(0.0), 0);
        assert_eq!(to_byte(1.0), 255);
        assert_eq!(to_byte(0.001), 1);
    }

    // ── Properties ───────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn hex_roundtrip(r: u8, g: u8, b: u8) {
            let c = Color::rgb8(r, g, b);
            prop_assert_eq!(decode_hex(&c.to_hex()).unwrap(), c);
        }

        #[test]
        fn rgb_decodes_every_byte_triple(r: u8, g: u8, b: u8) {
            let literal = format!("rgb({r},{g},{b})");
            prop_assert_eq!(decode_rgb(&literal).unwrap(), Color::rgb8(r, g, b));
        }

        #[test]
        fn hsv_output_is_stable_through_hex(
            h in -10.0f64..370.0,
            s in -10.0f64..110.0,
            v in -10.0f64..110.0,
        ) {
            let c = decode_hsv(&format!("hsv({h},{s},{v})")).unwrap();
            prop_assert_eq!(decode_hex(&c.to_hex()).unwrap(), c);
        }
    }
}
