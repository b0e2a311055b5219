// SPDX-License-Identifier: MIT
//
// schemes-color — color codec for 8-color scheme files.
//
// Scheme files store their colors as short CSS-like literals. This crate
// turns those literals into plain 8-bit RGB triples and back:
//
//   "#RRGGBB"      ─┐
//   "rgb(R,G,B)"   ─┼─ decode ──▶ Color { r, g, b } ── to_hex ──▶ "#RRGGBB"
//   "hsv(H,S,V)"   ─┘
//
// Hex is the canonical form. Everything a scheme file writes goes out as
// uppercase `#RRGGBB`, whatever notation it was read in.

pub mod color;
pub mod decode;

pub use color::Color;
pub use decode::{MalformedLiteral, Notation, decode_hex, decode_hsv, decode_literal, decode_rgb};
