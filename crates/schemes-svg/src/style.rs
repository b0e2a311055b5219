//! Style block tokenizer — finds the `#cN` rules and their `fill` literals.
//!
//! The grammar is deliberately small. A style block is a sequence of rules;
//! a rule starts at a `#c` marker and runs until the next one. Inside a rule:
//!
//! ```text
//! #c <slot> … fill … : <literal> ; …
//! ```
//!
//! Only the first `fill`, the first `:` after it, and the first `;` after
//! that matter. Anything else (braces, other properties, CSS comments) is
//! ignored.
//!
//! Markers are recognized anywhere except inside a declaration value, the
//! span between a `:` and the next `;`, `{` or `}`. So `fill: #c0ffee;` is a
//! hex literal, while rules nested in an `@media { … }` block or following a
//! body that was never closed are still found.
//!
//! Text before the first marker is never a rule, even when it happens to
//! start with a slot digit: `0 { fill: #FFFFFF; }` with no `#c` assigns
//! nothing.

use crate::error::SchemeError;
use crate::role::Role;

const MARKER: &str = "#c";

/// One `#c…` rule from a style block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule<'a> {
    /// Everything after the `#c` marker, trimmed. Starts with the slot
    /// character.
    pub text: &'a str,
}

impl<'a> Rule<'a> {
    /// The slot character right after `#c`, e.g. `'3'` for `#c3`.
    #[must_use]
    pub fn slot(&self) -> Option<char> {
        self.text.chars().next()
    }

    /// The role this rule assigns, or `None` for selectors outside `#c0`–`#c7`.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.slot().and_then(Role::from_slot)
    }

    /// Extract the trimmed literal of the rule's `fill` property.
    ///
    /// # Errors
    ///
    /// [`SchemeError::PropertyNotFound`] when there is no `fill` at all;
    /// [`SchemeError::PropertyMalformed`] when the `:` or the closing `;`
    /// is missing.
    pub fn fill_literal(&self, role: Role) -> Result<&'a str, SchemeError> {
        let malformed = || SchemeError::PropertyMalformed {
            rule: self.text.to_owned(),
        };

        let (_, after_fill) = self
            .text
            .split_once("fill")
            .ok_or(SchemeError::PropertyNotFound { role })?;
        let (_, value) = after_fill.split_once(':').ok_or_else(malformed)?;
        let (literal, _) = value.split_once(';').ok_or_else(malformed)?;

        Ok(literal.trim())
    }
}

/// Iterate over the rules of a style block, in document order.
#[must_use]
pub fn rules(style: &str) -> Rules<'_> {
    Rules {
        src: style,
        next: next_marker(style, 0),
    }
}

/// Iterator returned by [`rules`].
#[derive(Debug, Clone)]
pub struct Rules<'a> {
    src: &'a str,
    /// Byte offset of the next marker, if any.
    next: Option<usize>,
}

impl<'a> Iterator for Rules<'a> {
    type Item = Rule<'a>;

    fn next(&mut self) -> Option<Rule<'a>> {
        loop {
            let start = self.next? + MARKER.len();
            let end = next_marker(self.src, start);
            self.next = end;

            let text = self.src[start..end.unwrap_or(self.src.len())].trim();
            if !text.is_empty() {
                return Some(Rule { text });
            }
        }
    }
}

/// Find the next `#c` outside a declaration value, scanning from `from`
/// (which must itself be outside one).
fn next_marker(src: &str, from: usize) -> Option<usize> {
    let bytes = src.as_bytes();
    let mut in_value = false;

    for (i, &byte) in bytes.iter().enumerate().skip(from) {
        match byte {
            b':' => in_value = true,
            b';' | b'{' | b'}' => in_value = false,
            b'#' if !in_value && bytes[i..].starts_with(MARKER.as_bytes()) => return Some(i),
            _ => {}
        }
    }

    None
}
