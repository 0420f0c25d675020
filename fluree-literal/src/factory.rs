//! Literal-construction factory
//!
//! Every literal produced by arithmetic or stepping is built here, so the
//! result variant follows the kind of the native value rather than the type of
//! the receiver. `literal_from_lexical` is the datatype-IRI dispatch used when a
//! literal arrives as a lexical string plus datatype.
//!
//! ## Comparison
//!
//! Numeric variants (integer, decimal, double) form one comparison class and
//! are compared mathematically: `Integer(3) == Decimal(3.0) == Double(3.0)`.
//! Literals without a decoded value only compare with their own variant.

use crate::convert::ToInteger;
use crate::datatype::Datatype;
use crate::error::Result;
use crate::integer::IntegerLiteral;
use crate::literal::Literal;
use crate::variants::{BooleanLiteral, DecimalLiteral, DoubleLiteral, PlainLiteral};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Native value handed to the factory
#[derive(Clone, Debug, PartialEq)]
pub enum NativeValue {
    Integer(i64),
    Decimal(BigDecimal),
    Double(f64),
    Boolean(bool),
    String(String),
}

impl NativeValue {
    /// Short kind name, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            NativeValue::Integer(_) => "integer",
            NativeValue::Decimal(_) => "decimal",
            NativeValue::Double(_) => "double",
            NativeValue::Boolean(_) => "boolean",
            NativeValue::String(_) => "string",
        }
    }
}

impl From<i64> for NativeValue {
    fn from(value: i64) -> Self {
        NativeValue::Integer(value)
    }
}

impl From<i32> for NativeValue {
    fn from(value: i32) -> Self {
        NativeValue::Integer(i64::from(value))
    }
}

impl From<BigDecimal> for NativeValue {
    fn from(value: BigDecimal) -> Self {
        NativeValue::Decimal(value)
    }
}

impl From<f64> for NativeValue {
    fn from(value: f64) -> Self {
        NativeValue::Double(value)
    }
}

impl From<bool> for NativeValue {
    fn from(value: bool) -> Self {
        NativeValue::Boolean(value)
    }
}

impl From<String> for NativeValue {
    fn from(value: String) -> Self {
        NativeValue::String(value)
    }
}

impl From<&str> for NativeValue {
    fn from(value: &str) -> Self {
        NativeValue::String(value.to_string())
    }
}

/// Any literal variant
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AnyLiteral {
    Integer(IntegerLiteral),
    Decimal(DecimalLiteral),
    Double(DoubleLiteral),
    Boolean(BooleanLiteral),
    Plain(PlainLiteral),
}

/// Build the literal variant matching a native value's kind
pub fn literal_from_value(value: impl Into<NativeValue>) -> AnyLiteral {
    let value = value.into();
    tracing::trace!(kind = value.kind(), "building literal from native value");
    match value {
        NativeValue::Integer(n) => AnyLiteral::Integer(IntegerLiteral::new(n)),
        NativeValue::Decimal(d) => AnyLiteral::Decimal(DecimalLiteral::new(d)),
        NativeValue::Double(d) => AnyLiteral::Double(DoubleLiteral::new(d)),
        NativeValue::Boolean(b) => AnyLiteral::Boolean(BooleanLiteral::new(b)),
        NativeValue::String(s) => AnyLiteral::Plain(PlainLiteral::new(s)),
    }
}

/// Build a literal from a lexical form, choosing the variant by datatype.
///
/// Never fails: undecodable lexical forms produce a literal with no value,
/// and unrecognized datatypes produce a [`PlainLiteral`] carrying the datatype.
pub fn literal_from_lexical(lexical: &str, datatype: &Datatype) -> AnyLiteral {
    tracing::trace!(lexical, datatype = %datatype, "building literal from lexical form");
    if datatype.is_integer_family() {
        AnyLiteral::Integer(IntegerLiteral::from_typed_lexical(lexical, datatype.clone()))
    } else if datatype.is_decimal() {
        AnyLiteral::Decimal(DecimalLiteral::from_typed_lexical(lexical, datatype.clone()))
    } else if datatype.is_float_family() {
        AnyLiteral::Double(DoubleLiteral::from_typed_lexical(lexical, datatype.clone()))
    } else if datatype.is_boolean() {
        AnyLiteral::Boolean(BooleanLiteral::from_lexical(lexical))
    } else {
        AnyLiteral::Plain(PlainLiteral::typed(lexical, datatype.clone()))
    }
}

/// Decoded numeric value borrowed from a literal
enum Numeric<'a> {
    Integer(i64),
    Decimal(&'a BigDecimal),
    Double(f64),
}

impl AnyLiteral {
    pub fn as_integer(&self) -> Option<&IntegerLiteral> {
        match self {
            AnyLiteral::Integer(lit) => Some(lit),
            _ => None,
        }
    }

    fn numeric(&self) -> Option<Numeric<'_>> {
        match self {
            AnyLiteral::Integer(lit) => lit.value().map(Numeric::Integer),
            AnyLiteral::Decimal(lit) => lit.value().map(Numeric::Decimal),
            AnyLiteral::Double(lit) => lit.value().map(Numeric::Double),
            _ => None,
        }
    }

    /// Compare two numeric literals mathematically.
    ///
    /// Returns `None` unless both are numeric with decoded values. NaN is
    /// unordered against every number and equal only to another NaN.
    /// Infinities sit above (or below) every finite value.
    pub fn numeric_cmp(&self, other: &Self) -> Option<Ordering> {
        let (a, b) = (self.numeric()?, other.numeric()?);
        match (a.is_nan(), b.is_nan()) {
            (true, true) => return Some(Ordering::Equal),
            (true, false) | (false, true) => return None,
            (false, false) => {}
        }
        match (a, b) {
            (Numeric::Integer(a), Numeric::Integer(b)) => Some(a.cmp(&b)),
            (Numeric::Decimal(a), Numeric::Decimal(b)) => Some(a.cmp(b)),
            (Numeric::Double(a), Numeric::Double(b)) => a.partial_cmp(&b),
            (Numeric::Integer(a), Numeric::Decimal(b)) => Some(BigDecimal::from(a).cmp(b)),
            (Numeric::Decimal(a), Numeric::Integer(b)) => Some(a.cmp(&BigDecimal::from(b))),
            // Exact comparison, also for integers past the f64 mantissa
            (Numeric::Integer(a), Numeric::Double(b)) => {
                cmp_exact_to_double(&BigDecimal::from(a), b)
            }
            (Numeric::Decimal(a), Numeric::Double(b)) => cmp_exact_to_double(a, b),
            (Numeric::Double(a), Numeric::Integer(b)) => {
                cmp_exact_to_double(&BigDecimal::from(b), a).map(Ordering::reverse)
            }
            (Numeric::Double(a), Numeric::Decimal(b)) => {
                cmp_exact_to_double(b, a).map(Ordering::reverse)
            }
        }
    }
}

impl Numeric<'_> {
    fn is_nan(&self) -> bool {
        matches!(self, Numeric::Double(d) if d.is_nan())
    }
}

/// Compare an exact value with a non-NaN double
fn cmp_exact_to_double(exact: &BigDecimal, double: f64) -> Option<Ordering> {
    if double.is_infinite() {
        return Some(if double > 0.0 {
            Ordering::Less
        } else {
            Ordering::Greater
        });
    }
    BigDecimal::try_from(double).ok().map(|double| exact.cmp(&double))
}

impl Literal for AnyLiteral {
    fn lexical(&self) -> Cow<'_, str> {
        match self {
            AnyLiteral::Integer(lit) => lit.lexical(),
            AnyLiteral::Decimal(lit) => lit.lexical(),
            AnyLiteral::Double(lit) => lit.lexical(),
            AnyLiteral::Boolean(lit) => lit.lexical(),
            AnyLiteral::Plain(lit) => lit.lexical(),
        }
    }

    fn datatype(&self) -> &Datatype {
        match self {
            AnyLiteral::Integer(lit) => lit.datatype(),
            AnyLiteral::Decimal(lit) => lit.datatype(),
            AnyLiteral::Double(lit) => lit.datatype(),
            AnyLiteral::Boolean(lit) => lit.datatype(),
            AnyLiteral::Plain(lit) => lit.datatype(),
        }
    }

    fn is_valid(&self) -> bool {
        match self {
            AnyLiteral::Integer(lit) => lit.is_valid(),
            AnyLiteral::Decimal(lit) => lit.is_valid(),
            AnyLiteral::Double(lit) => lit.is_valid(),
            AnyLiteral::Boolean(lit) => lit.is_valid(),
            AnyLiteral::Plain(lit) => lit.is_valid(),
        }
    }

    fn canonicalize(&mut self) -> &mut Self {
        match self {
            AnyLiteral::Integer(lit) => {
                lit.canonicalize();
            }
            AnyLiteral::Decimal(lit) => {
                lit.canonicalize();
            }
            AnyLiteral::Double(lit) => {
                lit.canonicalize();
            }
            AnyLiteral::Boolean(lit) => {
                lit.canonicalize();
            }
            AnyLiteral::Plain(lit) => {
                lit.canonicalize();
            }
        }
        self
    }
}

impl ToInteger for AnyLiteral {
    fn to_integer(&self) -> Result<i64> {
        match self {
            AnyLiteral::Integer(lit) => ToInteger::to_integer(lit),
            AnyLiteral::Decimal(lit) => lit.to_integer(),
            AnyLiteral::Double(lit) => lit.to_integer(),
            AnyLiteral::Boolean(lit) => lit.to_integer(),
            AnyLiteral::Plain(lit) => lit.to_integer(),
        }
    }
}

impl fmt::Display for AnyLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexical())
    }
}

impl PartialEq for AnyLiteral {
    fn eq(&self, other: &Self) -> bool {
        if let Some(ord) = self.numeric_cmp(other) {
            return ord == Ordering::Equal;
        }
        match (self, other) {
            (AnyLiteral::Integer(a), AnyLiteral::Integer(b)) => a == b,
            (AnyLiteral::Decimal(a), AnyLiteral::Decimal(b)) => a == b,
            (AnyLiteral::Double(a), AnyLiteral::Double(b)) => a == b,
            (AnyLiteral::Boolean(a), AnyLiteral::Boolean(b)) => a == b,
            (AnyLiteral::Plain(a), AnyLiteral::Plain(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for AnyLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if let Some(ord) = self.numeric_cmp(other) {
            return Some(ord);
        }
        match (self, other) {
            (AnyLiteral::Boolean(a), AnyLiteral::Boolean(b)) => match (a.value(), b.value()) {
                (Some(a), Some(b)) => Some(a.cmp(&b)),
                _ => (self == other).then_some(Ordering::Equal),
            },
            (AnyLiteral::Plain(a), AnyLiteral::Plain(b)) if a.datatype() == b.datatype() => {
                Some(a.as_str().cmp(b.as_str()))
            }
            // Undecoded literals are only comparable with an identical one
            _ => (self == other).then_some(Ordering::Equal),
        }
    }
}

macro_rules! any_literal_from {
    ($($variant:ident => $t:ty),*) => {
        $(
            impl From<$t> for AnyLiteral {
                fn from(lit: $t) -> Self {
                    AnyLiteral::$variant(lit)
                }
            }
        )*
    };
}

any_literal_from!(
    Integer => IntegerLiteral,
    Decimal => DecimalLiteral,
    Double => DoubleLiteral,
    Boolean => BooleanLiteral,
    Plain => PlainLiteral
);
