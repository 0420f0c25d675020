//! xsd:integer literals
//!
//! An `IntegerLiteral` keeps the lexical form exactly as it was supplied
//! (`"+007"` stays `"+007"`) next to the decoded `i64`. Parsing never fails:
//! a lexical form that does not decode leaves the value absent, and the
//! numeric accessors then read it as zero. Use [`Literal::is_valid`] to tell
//! the two apart.
//!
//! ```
//! use fluree_literal::{IntegerLiteral, Literal};
//!
//! let mut lit = IntegerLiteral::from_lexical("+042");
//! assert_eq!(lit.to_string(), "+042");
//! assert_eq!(lit.canonicalize().to_string(), "42");
//!
//! let sum = (&IntegerLiteral::new(40) + 2i64).unwrap();
//! assert_eq!(sum.to_string(), "42");
//! ```
//!
//! Arithmetic results come back as [`AnyLiteral`] through the construction
//! factory, which picks the variant from the native result.

use crate::arithmetic::ArithmeticOp;
use crate::convert::ToInteger;
use crate::datatype::Datatype;
use crate::error::{LiteralError, Result};
use crate::factory::{literal_from_value, AnyLiteral};
use crate::literal::{Literal, LiteralOptions, LiteralRepr};
use bigdecimal::BigDecimal;
use num_rational::Rational64;
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

/// Largest magnitude an f64 holds without losing integer precision (2^53)
const MAX_EXACT_F64: u64 = 1 << 53;

/// Check a string against the xsd:integer lexical grammar `[+-]?[0-9]+`
pub fn matches_grammar(lexical: &str) -> bool {
    let digits = lexical
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(lexical);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Decode a lexical form, `None` when it is malformed or outside i64
fn decode(lexical: &str, datatype: &Datatype) -> Option<i64> {
    match lexical.parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(
                lexical,
                datatype = %datatype,
                error = %e,
                "integer lexical form did not decode"
            );
            None
        }
    }
}

/// An xsd:integer literal
#[derive(Clone, Debug, Serialize)]
pub struct IntegerLiteral {
    /// Decoded value, absent when the lexical form did not parse
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<i64>,
    /// Lexical form exactly as supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    lexical: Option<Arc<str>>,
    datatype: Datatype,
}

impl IntegerLiteral {
    /// Literal for a native value, with no stored lexical form
    pub fn new(value: i64) -> Self {
        Self {
            value: Some(value),
            lexical: None,
            datatype: Datatype::xsd_integer(),
        }
    }

    /// Literal from a lexical string, kept verbatim.
    ///
    /// Never fails; an undecodable string leaves the value absent.
    pub fn from_lexical(lexical: impl AsRef<str>) -> Self {
        Self::from_typed_lexical(lexical, Datatype::xsd_integer())
    }

    /// Literal from a lexical string under a derived datatype such as xsd:int
    pub fn from_typed_lexical(lexical: impl AsRef<str>, datatype: Datatype) -> Self {
        let lexical = lexical.as_ref();
        Self {
            value: decode(lexical, &datatype),
            lexical: Some(Arc::from(lexical)),
            datatype,
        }
    }

    /// Literal from anything exposing an integer conversion.
    ///
    /// A refused conversion leaves the value absent.
    pub fn from_convertible(value: &impl ToInteger) -> Self {
        let value = match value.to_integer() {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::debug!(error = %e, "operand has no integer value");
                None
            }
        };
        Self {
            value,
            lexical: None,
            datatype: Datatype::xsd_integer(),
        }
    }

    /// Literal from the string rendering of an arbitrary value.
    ///
    /// The rendering is only used for decoding; it is not stored as the
    /// lexical form.
    pub fn from_display(value: &impl fmt::Display) -> Self {
        let datatype = Datatype::xsd_integer();
        Self {
            value: decode(&value.to_string(), &datatype),
            lexical: None,
            datatype,
        }
    }

    /// Apply construction overrides.
    ///
    /// An explicit lexical form replaces the stored one unconditionally, even
    /// when it disagrees with the decoded value.
    pub fn with_options(mut self, options: &LiteralOptions) -> Self {
        if let Some(lexical) = &options.lexical {
            self.lexical = Some(Arc::from(lexical.as_str()));
        }
        if let Some(datatype) = options.datatype_override() {
            self.datatype = datatype;
        }
        self
    }

    /// Replace the stored lexical form without re-decoding
    pub fn with_lexical(mut self, lexical: impl AsRef<str>) -> Self {
        self.lexical = Some(Arc::from(lexical.as_ref()));
        self
    }

    /// Replace the datatype (e.g. a derived type such as xsd:int).
    ///
    /// Integer semantics are kept whatever the datatype.
    pub fn with_datatype(mut self, datatype: Datatype) -> Self {
        self.datatype = datatype;
        self
    }

    /// Decoded value, if the lexical form decoded
    pub fn value(&self) -> Option<i64> {
        self.value
    }

    /// Stored lexical form, if one was supplied
    pub fn stored_lexical(&self) -> Option<&str> {
        self.lexical.as_deref()
    }

    /// Decoded value, or 0 when absent
    pub fn to_integer(&self) -> i64 {
        self.value.unwrap_or_default()
    }

    /// Alias of [`to_integer`](Self::to_integer)
    pub fn to_int(&self) -> i64 {
        self.to_integer()
    }

    /// Alias of [`to_integer`](Self::to_integer)
    pub fn ord(&self) -> i64 {
        self.to_integer()
    }

    /// Value as f64.
    ///
    /// Exact while `|n| <= 2^53`; larger magnitudes round to the nearest f64.
    pub fn to_float(&self) -> f64 {
        self.to_integer() as f64
    }

    /// True when [`to_float`](Self::to_float) is exact
    pub fn fits_float_exactly(&self) -> bool {
        self.to_integer().unsigned_abs() <= MAX_EXACT_F64
    }

    /// Value as an exact decimal
    pub fn to_decimal(&self) -> BigDecimal {
        BigDecimal::from(self.to_integer())
    }

    /// Value as an exact rational (`n/1`)
    pub fn to_rational(&self) -> Rational64 {
        Rational64::from_integer(self.to_integer())
    }

    pub fn is_even(&self) -> bool {
        self.to_integer() % 2 == 0
    }

    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    pub fn is_zero(&self) -> bool {
        self.to_integer() == 0
    }

    /// `Some(self)` when the value is non-zero, `None` otherwise
    pub fn is_nonzero(&self) -> Option<&Self> {
        if self.is_zero() {
            None
        } else {
            Some(self)
        }
    }

    /// Literal for `n - 1`
    pub fn predecessor(&self) -> Result<AnyLiteral> {
        self.apply(ArithmeticOp::Sub, 1i64)
    }

    /// Literal for `n + 1`
    pub fn successor(&self) -> Result<AnyLiteral> {
        self.apply(ArithmeticOp::Add, 1i64)
    }

    /// Alias of [`successor`](Self::successor)
    pub fn next(&self) -> Result<AnyLiteral> {
        self.successor()
    }

    /// Absolute value.
    ///
    /// Zero and positive values return this literal unchanged, lexical form
    /// included. Only negative values build a new literal.
    pub fn absolute_value(&self) -> Result<AnyLiteral> {
        let n = self.to_integer();
        if n >= 0 {
            return Ok(AnyLiteral::Integer(self.clone()));
        }
        n.checked_abs()
            .map(literal_from_value)
            .ok_or(LiteralError::Overflow)
    }

    /// Unary plus: `self`
    pub fn plus(&self) -> &Self {
        self
    }

    /// Unary minus
    pub fn negate(&self) -> Result<AnyLiteral> {
        self.to_integer()
            .checked_neg()
            .map(literal_from_value)
            .ok_or(LiteralError::Overflow)
    }

    pub fn add(&self, rhs: impl ToInteger) -> Result<AnyLiteral> {
        self.apply(ArithmeticOp::Add, rhs)
    }

    pub fn subtract(&self, rhs: impl ToInteger) -> Result<AnyLiteral> {
        self.apply(ArithmeticOp::Sub, rhs)
    }

    pub fn multiply(&self, rhs: impl ToInteger) -> Result<AnyLiteral> {
        self.apply(ArithmeticOp::Mul, rhs)
    }

    /// Integer division, truncating toward zero.
    ///
    /// # Errors
    ///
    /// `LiteralError::DivisionByZero` when `rhs` is zero.
    pub fn divide(&self, rhs: impl ToInteger) -> Result<AnyLiteral> {
        self.apply(ArithmeticOp::Div, rhs)
    }

    /// Decode both operands, apply `op`, and hand the result to the factory
    pub fn apply(&self, op: ArithmeticOp, rhs: impl ToInteger) -> Result<AnyLiteral> {
        let right = rhs.to_integer()?;
        let result = op.apply(self.to_integer(), right)?;
        Ok(literal_from_value(result))
    }
}

impl Default for IntegerLiteral {
    fn default() -> Self {
        IntegerLiteral::new(0)
    }
}

impl Literal for IntegerLiteral {
    fn lexical(&self) -> Cow<'_, str> {
        match (&self.lexical, self.value) {
            (Some(lexical), _) => Cow::Borrowed(lexical),
            (None, Some(value)) => Cow::Owned(value.to_string()),
            (None, None) => Cow::Borrowed(""),
        }
    }

    fn datatype(&self) -> &Datatype {
        &self.datatype
    }

    fn is_valid(&self) -> bool {
        self.value.is_some() && self.lexical.as_deref().map_or(true, matches_grammar)
    }

    fn canonicalize(&mut self) -> &mut Self {
        if let Some(value) = self.value {
            self.lexical = Some(Arc::from(value.to_string()));
        }
        self
    }
}

impl ToInteger for IntegerLiteral {
    fn to_integer(&self) -> Result<i64> {
        Ok(IntegerLiteral::to_integer(self))
    }
}

impl<'de> Deserialize<'de> for IntegerLiteral {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = LiteralRepr::<i64>::deserialize(deserializer)?;
        let datatype = repr.datatype.unwrap_or_default();
        // A stored value wins over the lexical form, as with an explicit override
        let value = repr
            .value
            .or_else(|| repr.lexical.as_deref().and_then(|l| decode(l, &datatype)));
        Ok(Self {
            value,
            lexical: repr.lexical,
            datatype,
        })
    }
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexical())
    }
}

impl From<i64> for IntegerLiteral {
    fn from(value: i64) -> Self {
        IntegerLiteral::new(value)
    }
}

impl From<&str> for IntegerLiteral {
    fn from(lexical: &str) -> Self {
        IntegerLiteral::from_lexical(lexical)
    }
}

// === Value equality: decoded values decide, lexical form is ignored ===

impl PartialEq for IntegerLiteral {
    fn eq(&self, other: &Self) -> bool {
        match (self.value, other.value) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.lexical == other.lexical,
            _ => false,
        }
    }
}

impl Eq for IntegerLiteral {}

impl Hash for IntegerLiteral {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.value {
            Some(value) => {
                0u8.hash(state);
                value.hash(state);
            }
            None => {
                1u8.hash(state);
                self.lexical.hash(state);
            }
        }
    }
}

impl Ord for IntegerLiteral {
    fn cmp(&self, other: &Self) -> Ordering {
        // Undecoded literals sort first, ordered by lexical form
        match (self.value, other.value) {
            (Some(a), Some(b)) => a.cmp(&b),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => self.lexical.cmp(&other.lexical),
        }
    }
}

impl PartialOrd for IntegerLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// === Operator overloads ===

impl<R: ToInteger> Add<R> for &IntegerLiteral {
    type Output = Result<AnyLiteral>;

    fn add(self, rhs: R) -> Self::Output {
        self.apply(ArithmeticOp::Add, rhs)
    }
}

impl<R: ToInteger> Sub<R> for &IntegerLiteral {
    type Output = Result<AnyLiteral>;

    fn sub(self, rhs: R) -> Self::Output {
        self.apply(ArithmeticOp::Sub, rhs)
    }
}

impl<R: ToInteger> Mul<R> for &IntegerLiteral {
    type Output = Result<AnyLiteral>;

    fn mul(self, rhs: R) -> Self::Output {
        self.apply(ArithmeticOp::Mul, rhs)
    }
}

impl<R: ToInteger> Div<R> for &IntegerLiteral {
    type Output = Result<AnyLiteral>;

    fn div(self, rhs: R) -> Self::Output {
        self.apply(ArithmeticOp::Div, rhs)
    }
}

impl Neg for &IntegerLiteral {
    type Output = Result<AnyLiteral>;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::BooleanLiteral;
    use fluree_literal_vocab::xsd;
    use std::collections::hash_map::DefaultHasher;

    fn decoded(lit: &AnyLiteral) -> i64 {
        lit.as_integer().and_then(IntegerLiteral::value).unwrap()
    }

    fn compute_hash<T: Hash>(t: &T) -> u64 {
        let mut s = DefaultHasher::new();
        t.hash(&mut s);
        s.finish()
    }

    #[test]
    fn test_grammar() {
        assert!(matches_grammar("0"));
        assert!(matches_grammar("+007"));
        assert!(matches_grammar("-42"));
        assert!(!matches_grammar(""));
        assert!(!matches_grammar("+"));
        assert!(!matches_grammar("4 2"));
        assert!(!matches_grammar(" 42"));
        assert!(!matches_grammar("4.2"));
        assert!(!matches_grammar("1e3"));
        assert!(!matches_grammar("+-1"));
    }

    #[test]
    fn test_lexical_preserved_until_canonicalized() {
        let mut lit = IntegerLiteral::from_lexical("+042");
        assert_eq!(lit.to_string(), "+042");
        assert_eq!(lit.value(), Some(42));
        assert!(lit.is_valid());

        lit.canonicalize();
        assert_eq!(lit.to_string(), "42");
    }

    #[test]
    fn test_canonical_forms() {
        let canon = |s: &str| IntegerLiteral::from_lexical(s).to_canonical().to_string();
        assert_eq!(canon("000"), "0");
        assert_eq!(canon("-0"), "0");
        assert_eq!(canon("+0"), "0");
        assert_eq!(canon("-0012"), "-12");
        assert_eq!(canon("9223372036854775807"), "9223372036854775807");
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        for s in ["+7", "007", "-0015", "0", "123"] {
            let mut once = IntegerLiteral::from_lexical(s);
            once.canonicalize();
            let mut twice = once.clone();
            twice.canonicalize();
            assert_eq!(once.lexical(), twice.lexical(), "input {}", s);
        }
    }

    #[test]
    fn test_canonicalize_chains() {
        let mut lit = IntegerLiteral::from_lexical("+5");
        assert_eq!(lit.canonicalize().canonicalize().to_string(), "5");
    }

    #[test]
    fn test_to_canonical_leaves_original() {
        let lit = IntegerLiteral::from_lexical("+042");
        let canonical = lit.to_canonical();
        assert_eq!(lit.to_string(), "+042");
        assert_eq!(canonical.to_string(), "42");
        assert_eq!(lit, canonical);
    }

    #[test]
    fn test_canonicalize_without_value_is_noop() {
        let mut lit = IntegerLiteral::from_lexical("abc");
        lit.canonicalize();
        assert_eq!(lit.to_string(), "abc");
    }

    #[test]
    fn test_native_value_renders_decimal() {
        let lit = IntegerLiteral::new(-15);
        assert_eq!(lit.stored_lexical(), None);
        assert_eq!(lit.to_string(), "-15");
        assert!(lit.is_valid());
    }

    #[test]
    fn test_malformed_input_tolerated() {
        let lit = IntegerLiteral::from_lexical("abc");
        assert_eq!(lit.value(), None);
        assert_eq!(lit.to_integer(), 0);
        assert_eq!(lit.to_float(), 0.0);
        assert!(!lit.is_valid());
        assert_eq!(lit.to_string(), "abc");
    }

    #[test]
    fn test_in_grammar_but_out_of_range() {
        let lit = IntegerLiteral::from_lexical("99999999999999999999");
        assert_eq!(lit.value(), None);
        assert!(!lit.is_valid());
    }

    #[test]
    fn test_value_equality_ignores_lexical() {
        let a = IntegerLiteral::from_lexical("7");
        let b = IntegerLiteral::from_lexical("+7");
        assert_ne!(a.lexical(), b.lexical());
        assert_eq!(a, b);
        assert_eq!(compute_hash(&a), compute_hash(&b));
        assert_eq!(a, IntegerLiteral::new(7));
        assert_ne!(a, IntegerLiteral::new(8));
    }

    #[test]
    fn test_equality_of_undecoded_literals() {
        assert_eq!(
            IntegerLiteral::from_lexical("abc"),
            IntegerLiteral::from_lexical("abc")
        );
        assert_ne!(
            IntegerLiteral::from_lexical("abc"),
            IntegerLiteral::from_lexical("xyz")
        );
        assert_ne!(IntegerLiteral::from_lexical("abc"), IntegerLiteral::new(0));
    }

    #[test]
    fn test_ordering() {
        let mut lits = vec![
            IntegerLiteral::new(3),
            IntegerLiteral::from_lexical("-10"),
            IntegerLiteral::from_lexical("oops"),
            IntegerLiteral::from_lexical("+2"),
        ];
        lits.sort();
        let rendered: Vec<String> = lits.iter().map(|l| l.to_string()).collect();
        assert_eq!(rendered, vec!["oops", "-10", "+2", "3"]);
    }

    #[test]
    fn test_lexical_override_wins() {
        let opts = LiteralOptions::default().lexical("forty-two");
        let lit = IntegerLiteral::new(42).with_options(&opts);
        assert_eq!(lit.to_string(), "forty-two");
        assert_eq!(lit.value(), Some(42));
        assert!(!lit.is_valid());

        let lit = IntegerLiteral::from_lexical("12").with_lexical("012");
        assert_eq!(lit.to_string(), "012");
        assert_eq!(lit.value(), Some(12));
    }

    #[test]
    fn test_datatype_override() {
        let lit = IntegerLiteral::from_lexical("5");
        assert_eq!(lit.datatype(), &Datatype::xsd_integer());

        let opts = LiteralOptions::default().datatype(xsd::SHORT);
        let lit = IntegerLiteral::from_lexical("5").with_options(&opts);
        assert_eq!(lit.datatype().as_iri(), xsd::SHORT);
        assert_eq!(lit.to_integer(), 5);
        assert_eq!(decoded(&lit.successor().unwrap()), 6);
    }

    #[test]
    fn test_from_convertible() {
        let lit = IntegerLiteral::from_convertible(&IntegerLiteral::from_lexical("+9"));
        assert_eq!(lit.value(), Some(9));
        assert_eq!(lit.stored_lexical(), None);

        let lit = IntegerLiteral::from_convertible(&u64::MAX);
        assert_eq!(lit.value(), None);

        let lit = IntegerLiteral::from_convertible(&BooleanLiteral::new(true));
        assert_eq!(lit.value(), None);
    }

    #[test]
    fn test_from_display() {
        let lit = IntegerLiteral::from_display(&-300i16);
        assert_eq!(lit.value(), Some(-300));
        assert_eq!(lit.stored_lexical(), None);

        let lit = IntegerLiteral::from_display(&2.5f64);
        assert_eq!(lit.value(), None);
    }

    #[test]
    fn test_numeric_conversions() {
        let lit = IntegerLiteral::from_lexical("-12");
        assert_eq!(lit.to_integer(), -12);
        assert_eq!(lit.to_int(), -12);
        assert_eq!(lit.ord(), -12);
        assert_eq!(lit.to_float(), -12.0);
        assert_eq!(lit.to_decimal(), BigDecimal::from(-12));
        assert_eq!(lit.to_rational(), Rational64::new(-12, 1));
        assert!(lit.fits_float_exactly());
    }

    #[test]
    fn test_float_precision_boundary() {
        let exact = IntegerLiteral::new(1 << 53);
        assert!(exact.fits_float_exactly());
        assert_eq!(exact.to_float() as i64, 1 << 53);

        let inexact = IntegerLiteral::new((1 << 53) + 1);
        assert!(!inexact.fits_float_exactly());
        // rounds to the nearest representable value
        assert_eq!(inexact.to_float(), (1u64 << 53) as f64);
    }

    #[test]
    fn test_predicates() {
        assert!(IntegerLiteral::new(4).is_even());
        assert!(IntegerLiteral::new(-3).is_odd());
        assert!(!IntegerLiteral::new(-3).is_even());
        assert!(IntegerLiteral::new(0).is_zero());
        assert!(IntegerLiteral::from_lexical("-000").is_zero());
        // undecoded values read as zero
        assert!(IntegerLiteral::from_lexical("abc").is_zero());
    }

    #[test]
    fn test_is_nonzero() {
        let five = IntegerLiteral::from_lexical("+5");
        let same = five.is_nonzero().unwrap();
        assert!(std::ptr::eq(same, &five));
        assert!(IntegerLiteral::new(0).is_nonzero().is_none());
    }

    #[test]
    fn test_stepping() {
        let five = IntegerLiteral::new(5);
        assert_eq!(decoded(&five.successor().unwrap()), 6);
        assert_eq!(decoded(&five.next().unwrap()), 6);
        assert_eq!(decoded(&five.predecessor().unwrap()), 4);
        assert_eq!(
            IntegerLiteral::new(i64::MAX).successor(),
            Err(LiteralError::Overflow)
        );
        assert_eq!(
            IntegerLiteral::new(i64::MIN).predecessor(),
            Err(LiteralError::Overflow)
        );
    }

    #[test]
    fn test_absolute_value_boundary() {
        // zero is returned unchanged, lexical form included
        let zero = IntegerLiteral::from_lexical("+000");
        let abs = zero.absolute_value().unwrap();
        assert_eq!(abs.as_integer(), Some(&zero));
        assert_eq!(abs.to_string(), "+000");

        let five = IntegerLiteral::from_lexical("+5");
        let abs = five.absolute_value().unwrap();
        assert_eq!(abs.to_string(), "+5");

        let neg = IntegerLiteral::from_lexical("-5");
        let abs = neg.absolute_value().unwrap();
        assert_eq!(decoded(&abs), 5);
        assert_eq!(abs.to_string(), "5");

        assert_eq!(
            IntegerLiteral::new(i64::MIN).absolute_value(),
            Err(LiteralError::Overflow)
        );
    }

    #[test]
    fn test_unary_operators() {
        let lit = IntegerLiteral::from_lexical("+3");
        assert!(std::ptr::eq(lit.plus(), &lit));
        assert_eq!(decoded(&lit.negate().unwrap()), -3);
        assert_eq!(decoded(&(-&lit).unwrap()), -3);
        assert_eq!(
            IntegerLiteral::new(i64::MIN).negate(),
            Err(LiteralError::Overflow)
        );
    }

    #[test]
    fn test_arithmetic() {
        let forty = IntegerLiteral::new(40);
        assert_eq!(decoded(&forty.add(2i64).unwrap()), 42);
        assert_eq!(decoded(&IntegerLiteral::new(45).subtract(3i64).unwrap()), 42);
        assert_eq!(decoded(&IntegerLiteral::new(6).multiply(7i64).unwrap()), 42);
        assert_eq!(decoded(&IntegerLiteral::new(84).divide(2i64).unwrap()), 42);
    }

    #[test]
    fn test_operator_overloads() {
        let a = IntegerLiteral::from_lexical("+10");
        let b = IntegerLiteral::from_lexical("-4");
        assert_eq!(decoded(&(&a + &b).unwrap()), 6);
        assert_eq!(decoded(&(&a - &b).unwrap()), 14);
        assert_eq!(decoded(&(&a * &b).unwrap()), -40);
        assert_eq!(decoded(&(&a / &b).unwrap()), -2);
        assert_eq!(decoded(&(&a + 5i64).unwrap()), 15);
    }

    #[test]
    fn test_results_are_integer_literals() {
        let sum = IntegerLiteral::from_lexical("+1").add(1i64).unwrap();
        let int = sum.as_integer().unwrap();
        assert_eq!(int.datatype(), &Datatype::xsd_integer());
        assert_eq!(int.stored_lexical(), None);
    }

    #[test]
    fn test_divide_by_zero() {
        let five = IntegerLiteral::new(5);
        assert_eq!(five.divide(0i64), Err(LiteralError::DivisionByZero));
        assert_eq!(
            &five / &IntegerLiteral::from_lexical("0"),
            Err(LiteralError::DivisionByZero)
        );
        // an undecoded divisor reads as zero
        assert_eq!(
            five.divide(IntegerLiteral::from_lexical("zero")),
            Err(LiteralError::DivisionByZero)
        );
    }

    #[test]
    fn test_invalid_operand_propagates() {
        let err = IntegerLiteral::new(1)
            .add(BooleanLiteral::new(true))
            .unwrap_err();
        assert!(matches!(err, LiteralError::InvalidOperand { .. }));
    }

    #[test]
    fn test_ntriples() {
        assert_eq!(
            IntegerLiteral::from_lexical("+042").to_ntriples(),
            "\"+042\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
    }

    #[test]
    fn test_serde_preserves_lexical_form() {
        let lit = IntegerLiteral::from_lexical("+007");
        let json = serde_json::to_value(&lit).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "value": 7,
                "lexical": "+007",
                "datatype": "http://www.w3.org/2001/XMLSchema#integer"
            })
        );

        let back: IntegerLiteral = serde_json::from_value(json).unwrap();
        assert_eq!(back.to_string(), "+007");
        assert_eq!(back.value(), Some(7));
    }

    #[test]
    fn test_deserialize_defaults_datatype() {
        let lit: IntegerLiteral = serde_json::from_str(r#"{"value": 3}"#).unwrap();
        assert_eq!(lit.datatype(), &Datatype::xsd_integer());
        assert_eq!(lit.to_string(), "3");
    }

    #[test]
    fn test_deserialize_decodes_missing_value() {
        let lit: IntegerLiteral = serde_json::from_str(r#"{"lexical": "+5"}"#).unwrap();
        assert_eq!(lit.value(), Some(5));
        assert!(lit.is_valid());
        assert_eq!(lit.to_string(), "+5");
        assert_eq!(lit, IntegerLiteral::new(5));

        let bad: IntegerLiteral = serde_json::from_str(r#"{"lexical": "five"}"#).unwrap();
        assert_eq!(bad.value(), None);
        assert!(!bad.is_valid());
    }

    #[test]
    fn test_deserialize_keeps_stored_value_over_lexical() {
        // an explicit lexical override may disagree with the value
        let lit = IntegerLiteral::new(1).with_options(&LiteralOptions::default().lexical("7"));
        let json = serde_json::to_string(&lit).unwrap();
        let back: IntegerLiteral = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value(), Some(1));
        assert_eq!(back.to_string(), "7");
    }

    #[test]
    fn test_typed_lexical_keeps_datatype() {
        let lit = IntegerLiteral::from_typed_lexical("12", Datatype::from_iri(xsd::INT));
        assert_eq!(lit.value(), Some(12));
        assert_eq!(lit.datatype().as_iri(), xsd::INT);
        assert_eq!(lit, IntegerLiteral::new(12));

        let bad = IntegerLiteral::from_typed_lexical("1.5", Datatype::from_iri(xsd::SHORT));
        assert!(!bad.is_valid());
        assert_eq!(bad.datatype().as_iri(), xsd::SHORT);
    }
}
