//! The scheme value — title, version, and one color per [`Role`].

use std::ops::{Index, IndexMut};
use std::str::FromStr;

use schemes_color::Color;

use crate::error::SchemeError;
use crate::role::Role;

/// Title used when a document has no (or an empty) `<title>`.
pub const DEFAULT_TITLE: &str = "Color Scheme by Person";

/// Format version written by this crate, and assumed when a document has
/// no `<version>`.
pub const CURRENT_VERSION: u32 = 2;

/// An 8-color scheme.
///
/// Colors are stored in slot order and addressed by [`Role`]. A freshly
/// constructed or partially parsed scheme holds [`Color::BLACK`] in every
/// slot nobody assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scheme {
    /// Display title.
    pub title: String,
    /// Scheme file format version.
    pub version: u32,
    /// Colors indexed by [`Role::index`].
    pub colors: [Color; Role::COUNT],
}

impl Default for Scheme {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            version: CURRENT_VERSION,
            colors: [Color::BLACK; Role::COUNT],
        }
    }
}

impl Scheme {
    /// Build a scheme from its parts. `colors` is in [`Role::ALL`] order.
    #[must_use]
    pub fn new(title: impl Into<String>, version: u32, colors: [Color; Role::COUNT]) -> Self {
        Self {
            title: title.into(),
            version,
            colors,
        }
    }

    /// Parse an SVG scheme document.
    ///
    /// # Errors
    ///
    /// See [`read_scheme`](crate::read_scheme).
    pub fn from_svg(source: &[u8]) -> Result<Self, SchemeError> {
        crate::parse::read_scheme(source)
    }

    /// Render as an SVG scheme document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        crate::render::render(self)
    }

    /// The color assigned to `role`.
    #[inline]
    #[must_use]
    pub const fn color(&self, role: Role) -> Color {
        self.colors[role.index()]
    }

    /// Assign `color` to `role`, leaving the other slots alone.
    #[inline]
    pub const fn set_color(&mut self, role: Role, color: Color) {
        self.colors[role.index()] = color;
    }

    /// The eight colors, background first, comments last.
    #[inline]
    #[must_use]
    pub const fn palette(&self) -> [Color; Role::COUNT] {
        self.colors
    }

    /// `(role, color)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Color)> + '_ {
        Role::ALL.into_iter().map(|role| (role, self.color(role)))
    }
}

impl Index<Role> for Scheme {
    type Output = Color;

    fn index(&self, role: Role) -> &Color {
        &self.colors[role.index()]
    }
}

impl IndexMut<Role> for Scheme {
    fn index_mut(&mut self, role: Role) -> &mut Color {
        &mut self.colors[role.index()]
    }
}

impl FromStr for Scheme {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_scheme(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
