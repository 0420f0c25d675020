//! RDF datatype representation
//!
//! A datatype is an expanded IRI. There is no "untyped" literal: plain strings
//! carry `xsd:string`, and the default for integer literals is `xsd:integer`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Datatype IRIs used by the literal variants (re-exported from the vocab crate)
pub mod iri {
    pub use fluree_literal_vocab::xsd::{
        BOOLEAN as XSD_BOOLEAN, DECIMAL as XSD_DECIMAL, DOUBLE as XSD_DOUBLE,
        FLOAT as XSD_FLOAT, INTEGER as XSD_INTEGER, STRING as XSD_STRING,
    };
}

use fluree_literal_vocab::xsd;

/// RDF literal datatype, always an expanded IRI
///
/// Serializes as the bare IRI string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Datatype(Arc<str>);

impl Datatype {
    /// Create a datatype from an expanded IRI
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    /// xsd:integer - default for integer literals
    pub fn xsd_integer() -> Self {
        Self::from_iri(iri::XSD_INTEGER)
    }

    /// xsd:decimal
    pub fn xsd_decimal() -> Self {
        Self::from_iri(iri::XSD_DECIMAL)
    }

    /// xsd:double
    pub fn xsd_double() -> Self {
        Self::from_iri(iri::XSD_DOUBLE)
    }

    /// xsd:boolean
    pub fn xsd_boolean() -> Self {
        Self::from_iri(iri::XSD_BOOLEAN)
    }

    /// xsd:string - default for plain literals
    pub fn xsd_string() -> Self {
        Self::from_iri(iri::XSD_STRING)
    }

    /// Get the IRI of this datatype
    pub fn as_iri(&self) -> &str {
        &self.0
    }

    /// Local name within the XSD namespace (`"integer"`), if any
    pub fn local_name(&self) -> Option<&str> {
        xsd::local_name(&self.0)
    }

    /// Compact `xsd:` form for messages, falling back to the full IRI
    pub fn display_name(&self) -> String {
        match self.local_name() {
            Some(name) => format!("xsd:{}", name),
            None => self.0.to_string(),
        }
    }

    /// Check if this is xsd:integer or a type derived from it
    pub fn is_integer_family(&self) -> bool {
        xsd::is_integer_family(&self.0)
    }

    /// Check if this is xsd:double or xsd:float
    pub fn is_float_family(&self) -> bool {
        xsd::is_float_family(&self.0)
    }

    /// Check if this is xsd:decimal
    pub fn is_decimal(&self) -> bool {
        self.0.as_ref() == iri::XSD_DECIMAL
    }

    /// Check if this is xsd:boolean
    pub fn is_boolean(&self) -> bool {
        self.0.as_ref() == iri::XSD_BOOLEAN
    }

    /// Check if this is xsd:string
    pub fn is_xsd_string(&self) -> bool {
        self.0.as_ref() == iri::XSD_STRING
    }

    /// Check if this is any numeric datatype
    pub fn is_numeric(&self) -> bool {
        xsd::is_numeric(&self.0)
    }

    /// Inclusive value bounds for derived integer types (`None` for xsd:integer)
    pub fn integer_bounds(&self) -> Option<(i128, i128)> {
        xsd::integer_bounds(&self.0)
    }

}

impl Default for Datatype {
    fn default() -> Self {
        Datatype::xsd_integer()
    }
}

impl From<&str> for Datatype {
    fn from(iri: &str) -> Self {
        Datatype::from_iri(iri)
    }
}

impl From<String> for Datatype {
    fn from(iri: String) -> Self {
        Datatype(Arc::from(iri))
    }
}

impl AsRef<str> for Datatype {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
