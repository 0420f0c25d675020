//! The capability contract shared by every literal variant
//!
//! A literal is a lexical string, a datatype IRI, and (for typed variants) a
//! decoded native value. Variants keep the lexical form exactly as supplied
//! until `canonicalize` is called explicitly.

use crate::datatype::Datatype;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Shared literal contract
///
/// Implementors also implement `Display`, which renders the lexical form.
pub trait Literal: fmt::Display {
    /// Lexical form: the stored string, or a rendering of the decoded value
    fn lexical(&self) -> Cow<'_, str>;

    /// Datatype IRI
    fn datatype(&self) -> &Datatype;

    /// True when the lexical form matches the datatype grammar and a value was decoded
    fn is_valid(&self) -> bool;

    /// Rewrite the lexical form to the canonical form of the decoded value.
    ///
    /// No-op when there is no decoded value. Idempotent.
    fn canonicalize(&mut self) -> &mut Self
    where
        Self: Sized;

    /// Canonical copy, leaving `self` untouched
    fn to_canonical(&self) -> Self
    where
        Self: Sized + Clone,
    {
        let mut canonical = self.clone();
        canonical.canonicalize();
        canonical
    }

    /// N-Triples term: `"lexical"^^<datatype>`, or `"lexical"` for xsd:string
    fn to_ntriples(&self) -> String {
        let lexical = escape_ntriples(&self.lexical());
        if self.datatype().is_xsd_string() {
            format!("\"{}\"", lexical)
        } else {
            format!("\"{}\"^^<{}>", lexical, self.datatype().as_iri())
        }
    }
}

/// Escape a lexical form for use inside an N-Triples string
pub fn escape_ntriples(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// Wire shape of a decoded literal variant.
///
/// Deserialization goes through this so that a missing `value` can be decoded
/// from `lexical`, the same as construction from a lexical form.
#[derive(Deserialize)]
pub(crate) struct LiteralRepr<T> {
    #[serde(default)]
    pub(crate) value: Option<T>,
    #[serde(default)]
    pub(crate) lexical: Option<Arc<str>>,
    #[serde(default)]
    pub(crate) datatype: Option<Datatype>,
}

/// Construction overrides for a literal
///
/// Deserializable so overrides can come straight from JSON input:
///
/// ```
/// use fluree_literal::LiteralOptions;
///
/// let opts = LiteralOptions::default().lexical("+007");
/// assert_eq!(opts.lexical.as_deref(), Some("+007"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LiteralOptions {
    /// Lexical form to store verbatim, even if it disagrees with the value
    pub lexical: Option<String>,
    /// Datatype IRI replacing the variant's default
    pub datatype: Option<String>,
}

impl LiteralOptions {
    /// Set the lexical override
    pub fn lexical(mut self, lexical: impl Into<String>) -> Self {
        self.lexical = Some(lexical.into());
        self
    }

    /// Set the datatype override
    pub fn datatype(mut self, datatype: impl Into<String>) -> Self {
        self.datatype = Some(datatype.into());
        self
    }

    /// Datatype override as a `Datatype`
    pub fn datatype_override(&self) -> Option<Datatype> {
        self.datatype.as_deref().map(Datatype::from_iri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_ntriples() {
        assert_eq!(escape_ntriples("plain"), "plain");
        assert_eq!(escape_ntriples("a\"b"), "a\\\"b");
        assert_eq!(escape_ntriples("line\nbreak\t"), "line\\nbreak\\t");
        assert_eq!(escape_ntriples("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_options_builder() {
        let opts = LiteralOptions::default()
            .lexical("007")
            .datatype("http://www.w3.org/2001/XMLSchema#int");
        assert_eq!(opts.lexical.as_deref(), Some("007"));
        assert_eq!(
            opts.datatype_override().map(|dt| dt.is_integer_family()),
            Some(true)
        );
    }

    #[test]
    fn test_options_from_json() {
        let opts: LiteralOptions = serde_json::from_str(r#"{"lexical": "+1"}"#).unwrap();
        assert_eq!(opts.lexical.as_deref(), Some("+1"));
        assert!(opts.datatype.is_none());

        let err = serde_json::from_str::<LiteralOptions>(r#"{"lang": "en"}"#);
        assert!(err.is_err());
    }
}
