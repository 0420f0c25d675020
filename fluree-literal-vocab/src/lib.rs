//! Vocabulary constants for Fluree typed literals
//!
//! This crate holds the datatype IRIs that the literal model dispatches on,
//! together with the compact error-type IRIs reported by literal operations.
//!
//! # Organization
//!
//! - `xsd` - XSD datatype IRIs (http://www.w3.org/2001/XMLSchema#) and family helpers
//! - `errors` - Error type compact IRIs for API responses

pub mod errors;

/// XSD datatype IRIs and classification helpers
pub mod xsd {
    /// XSD namespace IRI
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:float IRI
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:long IRI
    pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";

    /// xsd:int IRI
    pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";

    /// xsd:short IRI
    pub const SHORT: &str = "http://www.w3.org/2001/XMLSchema#short";

    /// xsd:byte IRI
    pub const BYTE: &str = "http://www.w3.org/2001/XMLSchema#byte";

    /// xsd:unsignedLong IRI
    pub const UNSIGNED_LONG: &str = "http://www.w3.org/2001/XMLSchema#unsignedLong";

    /// xsd:unsignedInt IRI
    pub const UNSIGNED_INT: &str = "http://www.w3.org/2001/XMLSchema#unsignedInt";

    /// xsd:unsignedShort IRI
    pub const UNSIGNED_SHORT: &str = "http://www.w3.org/2001/XMLSchema#unsignedShort";

    /// xsd:unsignedByte IRI
    pub const UNSIGNED_BYTE: &str = "http://www.w3.org/2001/XMLSchema#unsignedByte";

    /// xsd:nonNegativeInteger IRI
    pub const NON_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";

    /// xsd:positiveInteger IRI
    pub const POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#positiveInteger";

    /// xsd:nonPositiveInteger IRI
    pub const NON_POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonPositiveInteger";

    /// xsd:negativeInteger IRI
    pub const NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#negativeInteger";

    /// Every datatype derived from xsd:integer, including xsd:integer itself.
    pub const INTEGER_FAMILY: &[&str] = &[
        INTEGER,
        LONG,
        INT,
        SHORT,
        BYTE,
        UNSIGNED_LONG,
        UNSIGNED_INT,
        UNSIGNED_SHORT,
        UNSIGNED_BYTE,
        NON_NEGATIVE_INTEGER,
        POSITIVE_INTEGER,
        NON_POSITIVE_INTEGER,
        NEGATIVE_INTEGER,
    ];

    /// Check if a datatype IRI is xsd:integer or one of its derived types
    #[inline]
    pub fn is_integer_family(datatype_iri: &str) -> bool {
        INTEGER_FAMILY.contains(&datatype_iri)
    }

    /// Check if a datatype IRI is xsd:double or xsd:float
    #[inline]
    pub fn is_float_family(datatype_iri: &str) -> bool {
        matches!(datatype_iri, DOUBLE | FLOAT)
    }

    /// Check if a datatype IRI is any numeric type (integer family, decimal, float, double)
    #[inline]
    pub fn is_numeric(datatype_iri: &str) -> bool {
        is_integer_family(datatype_iri) || is_float_family(datatype_iri) || datatype_iri == DECIMAL
    }

    /// Inclusive `(min, max)` value bounds of a derived integer datatype.
    ///
    /// Returns `None` for xsd:integer and for non-integer datatypes. The
    /// sign-constrained types are unbounded in magnitude and report the
    /// i128 extremes on their open side.
    #[inline]
    pub fn integer_bounds(datatype_iri: &str) -> Option<(i128, i128)> {
        let bounds = match datatype_iri {
            BYTE => (i8::MIN as i128, i8::MAX as i128),
            SHORT => (i16::MIN as i128, i16::MAX as i128),
            INT => (i32::MIN as i128, i32::MAX as i128),
            LONG => (i64::MIN as i128, i64::MAX as i128),
            UNSIGNED_BYTE => (0, u8::MAX as i128),
            UNSIGNED_SHORT => (0, u16::MAX as i128),
            UNSIGNED_INT => (0, u32::MAX as i128),
            UNSIGNED_LONG => (0, u64::MAX as i128),
            POSITIVE_INTEGER => (1, i128::MAX),
            NON_NEGATIVE_INTEGER => (0, i128::MAX),
            NEGATIVE_INTEGER => (i128::MIN, -1),
            NON_POSITIVE_INTEGER => (i128::MIN, 0),
            _ => return None,
        };
        Some(bounds)
    }

    /// Local name of an XSD datatype IRI (`"integer"` for xsd:integer).
    ///
    /// Returns `None` when the IRI is outside the XSD namespace.
    #[inline]
    pub fn local_name(datatype_iri: &str) -> Option<&str> {
        datatype_iri.strip_prefix(NS).filter(|name| !name.is_empty())
    }
}
