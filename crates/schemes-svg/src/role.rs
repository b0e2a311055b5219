//! Color roles — the eight fixed slots of a scheme.
//!
//! Every place that needs to know "which slot is which" goes through this
//! table: the parser maps `#cN` selectors to roles, the renderer writes one
//! rule per role, and [`Scheme::palette`](crate::Scheme::palette) orders by
//! it.

use std::fmt;

/// A semantic color slot. The discriminant is the slot index (`#c0` … `#c7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    /// `#c0` — editor background.
    Background = 0,
    /// `#c1` — default text and operators.
    Foreground = 1,
    /// `#c2` — type names.
    Types = 2,
    /// `#c3` — procedures and keywords.
    Keywords = 3,
    /// `#c4` — constants and strings.
    Constants = 4,
    /// `#c5` — pre-processor and special forms.
    Special = 5,
    /// `#c6` — errors.
    Errors = 6,
    /// `#c7` — comments.
    Comments = 7,
}

impl Role {
    /// Number of roles in a scheme.
    pub const COUNT: usize = 8;

    /// All roles in slot order, background first.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Background,
        Self::Foreground,
        Self::Types,
        Self::Keywords,
        Self::Constants,
        Self::Special,
        Self::Errors,
        Self::Comments,
    ];

    /// Slot index, 0–7.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Role for a slot index, if it is in range.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Role for the character after `#c` in a selector (`'0'` … `'7'`).
    #[must_use]
    pub const fn from_slot(slot: char) -> Option<Self> {
        match slot {
            '0'..='7' => Self::from_index(slot as usize - '0' as usize),
            _ => None,
        }
    }

    /// The element id used in the SVG, e.g. `c3`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Background => "c0",
            Self::Foreground => "c1",
            Self::Types => "c2",
            Self::Keywords => "c3",
            Self::Constants => "c4",
            Self::Special => "c5",
            Self::Errors => "c6",
            Self::Comments => "c7",
        }
    }

    /// Human-readable description, written as a comment after each rule.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Background => "Background",
            Self::Foreground => "Foreground, Operators",
            Self::Types => "Types",
            Self::Keywords => "Procedures, Keywords",
            Self::Constants => "Constants, Strings",
            Self::Special => "Pre-Processor, Special",
            Self::Errors => "Errors",
            Self::Comments => "Comments",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
