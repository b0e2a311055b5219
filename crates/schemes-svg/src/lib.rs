//! # schemes-svg — 8-color schemes embedded in SVG
//!
//! A scheme is a title, a format version, and eight colors, each bound to a
//! fixed syntax-highlighting role. On disk it is an SVG file: the colors
//! live in a `<style>` block as `#c0` … `#c7` fill rules, and the rest of the
//! document is a small code preview painted with those same rules, so the
//! file doubles as its own swatch.
//!
//! # Architecture
//!
//! ```text
//! document bytes
//!     │
//!     ▼
//! parse.rs:  XML tree → <title>, <version>, <style> text
//!     │
//!     ▼
//! style.rs:  style text → rules (#cN … ) → `fill` literal per rule
//!     │
//!     ▼
//! schemes_color::decode_literal → Color
//!     │
//!     ▼
//! scheme.rs: Scheme { title, version, colors[Role] }
//!     │
//!     ▼
//! render.rs: fixed SVG template with hex fills + preview body
//! ```
//!
//! # Example
//!
//! ```
//! use schemes_svg::{Role, Scheme};
//! use schemes_color::Color;
//!
//! let mut scheme = Scheme::default();
//! scheme[Role::Background] = Color::rgb8(0x16, 0x18, 0x20);
//!
//! let svg = scheme.to_string();
//! let back = schemes_svg::read_scheme(svg.as_bytes()).unwrap();
//! assert_eq!(back, scheme);
//! ```

pub mod error;
pub mod parse;
pub mod render;
pub mod role;
pub mod scheme;
pub mod style;

pub use error::SchemeError;
pub use parse::{parse_scheme, read_scheme};
pub use render::render;
pub use role::Role;
pub use scheme::{CURRENT_VERSION, DEFAULT_TITLE, Scheme};
