// SPDX-License-Identifier: MIT
//
// The scheme color value — three 8-bit channels, nothing else.
//
// Scheme files have no alpha and no color space beyond sRGB bytes, so the
// value type is deliberately flat: it is `Copy`, compares by channel, and
// every value is valid by construction (u8 channels cannot leave 0–255).

use std::fmt;
use std::str::FromStr;

use crate::decode::{self, MalformedLiteral, Notation};

// ─── Color ───────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color as stored in a scheme file.
///
/// # Examples
///
/// ```
/// use schemes_color::Color;
///
/// let red = Color::rgb8(0xFF, 0x24, 0x24);
/// assert_eq!(red.to_hex(), "#FF2424");
/// assert_eq!(red.rgb(), 0xFF2424);
/// assert_eq!(red.values(), [255, 36, 36]);
///
/// let parsed: Color = "rgb(255, 36, 36)".parse().unwrap();
/// assert_eq!(parsed, red);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// The zero color. Scheme slots that are never assigned hold this value.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb8(255, 255, 255);

    /// Create a color from 8-bit channel values.
    #[inline]
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a 24-bit `0xRRGGBB` integer. Bits above 24 are ignored.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_rgb(packed: u32) -> Self {
        Self::rgb8((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    /// The channels in `[r, g, b]` order.
    #[inline]
    #[must_use]
    pub const fn values(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The channels packed as `(r << 16) | (g << 8) | b`.
    ///
    /// Standard 24-bit RGB packing, so packed values sort and compare the
    /// same way hex strings do.
    #[inline]
    #[must_use]
    pub const fn rgb(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Canonical `#RRGGBB` form, uppercase and zero-padded.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:06X}", self.rgb())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.rgb())
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb8(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.values()
    }
}

impl FromStr for Color {
    type Err = MalformedLiteral;

    /// Parse any supported literal. Unlike [`decode::decode_literal`], a
    /// literal in no known notation is an error here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode::decode_literal(s)?.ok_or_else(|| MalformedLiteral::new(Notation::Hex, s))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
