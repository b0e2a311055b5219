//! Scheme parser — SVG document in, [`Scheme`] out.
//!
//! Only three children of the root element matter: `<title>`, `<version>`
//! and `<style>`. Everything else (the preview artwork, attributes, unknown
//! elements) is ignored. Element text is the concatenation of the
//! element's own text and CDATA nodes, so XML comments inside `<style>`
//! drop out before the style tokenizer ever sees them.

use roxmltree::{Document, Node, ParsingOptions};
use schemes_color::decode_literal;
use tracing::{debug, trace};

use crate::error::SchemeError;
use crate::scheme::Scheme;
use crate::style;

/// Parse a scheme from raw document bytes.
///
/// # Errors
///
/// - [`SchemeError::DocumentMalformed`] if the bytes are not UTF-8 or not
///   well-formed XML.
/// - [`SchemeError::MalformedVersion`] if `<version>` is not an integer.
/// - [`SchemeError::PropertyNotFound`] / [`SchemeError::PropertyMalformed`]
///   for a `#c0`–`#c7` rule without a usable `fill`.
/// - [`SchemeError::MalformedLiteral`] if a `fill` value fails to decode.
pub fn read_scheme(source: &[u8]) -> Result<Scheme, SchemeError> {
    parse_scheme(std::str::from_utf8(source)?)
}

/// Parse a scheme from document text. See [`read_scheme`].
///
/// # Errors
///
/// Same as [`read_scheme`], minus the UTF-8 check.
pub fn parse_scheme(text: &str) -> Result<Scheme, SchemeError> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;

    let doc = Document::parse_with_options(text, options)?;
    let fields = Fields::extract(doc.root_element());

    let mut scheme = Scheme::default();

    if fields.title.is_empty() {
        debug!(title = %scheme.title, "no title, using default");
    } else {
        scheme.title = fields.title;
    }

    if fields.version.is_empty() {
        debug!(version = scheme.version, "no version, using current");
    } else {
        // Only empty text means "absent"; blank text is still parsed.
        let parsed = fields.version.trim().parse();
        scheme.version = parsed.map_err(|source| SchemeError::MalformedVersion {
            text: fields.version.clone(),
            source,
        })?;
    }

    apply_style(&mut scheme, &fields.style)?;
    Ok(scheme)
}

/// Assign every recognized rule of a style block to its slot.
///
/// Later rules for the same slot overwrite earlier ones. Slots with no rule
/// keep whatever they held.
fn apply_style(scheme: &mut Scheme, text: &str) -> Result<(), SchemeError> {
    for rule in style::rules(text) {
        let Some(role) = rule.role() else {
            debug!(rule = rule.text, "ignoring unknown selector");
            continue;
        };

        let literal = rule.fill_literal(role)?;
        match decode_literal(literal)? {
            Some(color) => {
                trace!(slot = role.id(), %color, "fill");
                scheme[role] = color;
            }
            None => debug!(slot = role.id(), literal, "unrecognized color notation, slot left as is"),
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Document fields
// ---------------------------------------------------------------------------

/// Raw text of the elements a scheme is read from. Missing elements are
/// empty strings.
#[derive(Debug, Default)]
struct Fields {
    title: String,
    version: String,
    style: String,
}

impl Fields {
    fn extract(root: Node<'_, '_>) -> Self {
        let mut fields = Self::default();
        let mut seen = [false; 3];

        for child in root.children().filter(Node::is_element) {
            let (slot, field) = match child.tag_name().name() {
                "title" => (0, &mut fields.title),
                "version" => (1, &mut fields.version),
                "style" => (2, &mut fields.style),
                _ => continue,
            };
            // First occurrence wins.
            if !seen[slot] {
                seen[slot] = true;
                *field = element_text(child);
            }
        }

        fields
    }
}

/// Concatenated direct text children of an element.
fn element_text(node: Node<'_, '_>) -> String {
    node.children()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .collect()
}
