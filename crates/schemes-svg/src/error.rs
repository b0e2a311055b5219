//! Error types for reading scheme documents.

use std::num::ParseIntError;

use schemes_color::MalformedLiteral;
use thiserror::Error;

use crate::role::Role;

/// Everything that can stop a scheme document from parsing.
///
/// The first error aborts the parse; there is no partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemeError {
    /// The document is not well-formed XML (or not UTF-8).
    #[error("malformed scheme document: {0}")]
    DocumentMalformed(String),

    /// `<version>` is present but is not a non-negative integer.
    #[error("malformed scheme version `{text}`")]
    MalformedVersion {
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// A recognized color rule has no `fill` property.
    #[error("unable to find 'fill' property on #{}", .role.id())]
    PropertyNotFound { role: Role },

    /// A `fill` property is missing its `:` or its terminating `;`.
    #[error("malformed property for `{rule}`")]
    PropertyMalformed { rule: String },

    /// A `fill` literal failed to decode.
    #[error(transparent)]
    MalformedLiteral(#[from] MalformedLiteral),
}

impl From<roxmltree::Error> for SchemeError {
    fn from(err: roxmltree::Error) -> Self {
        Self::DocumentMalformed(err.to_string())
    }
}

impl From<std::str::Utf8Error> for SchemeError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::DocumentMalformed(err.to_string())
    }
}
