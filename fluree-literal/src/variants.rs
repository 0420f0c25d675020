//! Sibling literal variants produced by the construction factory
//!
//! These carry the same lexical-preservation contract as `IntegerLiteral`
//! (verbatim lexical form, lenient decoding, explicit canonicalization) but
//! no arithmetic of their own.
//!
//! Canonical forms:
//! - xsd:decimal → `"1.0"`, `"-0.5"` (no exponent, at least one fractional digit)
//! - xsd:double → `"1.5E2"`, `"1.0E0"`, `"INF"`, `"-INF"`, `"NaN"`
//! - xsd:boolean → `"true"` / `"false"`

use crate::convert::{f64_to_integer, ToInteger};
use crate::datatype::Datatype;
use crate::error::{LiteralError, Result};
use crate::literal::{Literal, LiteralRepr};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

fn default_string() -> Datatype {
    Datatype::xsd_string()
}

/// Check that `s` is one or more ASCII digits
fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Split `[+-]?int(.frac)?` into (sign, integer digits, fraction digits).
///
/// Either digit run may be empty, but not both.
fn split_decimal(lexical: &str) -> Option<(&str, &str, &str)> {
    let (sign, rest) = match lexical.as_bytes().first() {
        Some(b'+') | Some(b'-') => lexical.split_at(1),
        _ => ("", lexical),
    };
    let (int, frac) = match rest.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (rest, ""),
    };
    let digits_ok = (int.is_empty() || all_digits(int)) && (frac.is_empty() || all_digits(frac));
    if !digits_ok || (int.is_empty() && frac.is_empty()) {
        return None;
    }
    Some((sign, int, frac))
}

// =============================================================================
// xsd:decimal
// =============================================================================

/// Check a string against the xsd:decimal lexical grammar
pub fn matches_decimal_grammar(lexical: &str) -> bool {
    split_decimal(lexical).is_some()
}

fn decode_decimal(lexical: &str, datatype: &Datatype) -> Option<BigDecimal> {
    // BigDecimal::from_str also takes exponents, which xsd:decimal does not
    let decoded = split_decimal(lexical).and_then(|(sign, int, frac)| {
        let int = if int.is_empty() { "0" } else { int };
        let frac = if frac.is_empty() { "0" } else { frac };
        BigDecimal::from_str(&format!("{}{}.{}", sign, int, frac)).ok()
    });
    if decoded.is_none() {
        tracing::debug!(lexical, datatype = %datatype, "decimal lexical form did not decode");
    }
    decoded
}

/// Longest canonical decimal rendering produced before falling back to
/// exponent notation
pub const MAX_CANONICAL_DECIMAL_LEN: usize = 4096;

/// Canonical xsd:decimal rendering: plain digits, at least one fractional digit.
///
/// Returns `None` when the rendering would exceed
/// [`MAX_CANONICAL_DECIMAL_LEN`] characters (e.g. `1e999999999`).
pub fn canonical_decimal(value: &BigDecimal) -> Option<String> {
    let (negative, magnitude, scale) = normalized_parts(value);

    let width = if scale <= 0 {
        (magnitude.len() as u64).saturating_add(scale.unsigned_abs())
    } else {
        (magnitude.len() as u64).max(scale as u64 + 1)
    };
    if width >= MAX_CANONICAL_DECIMAL_LEN as u64 {
        return None;
    }

    let body = if scale <= 0 {
        // Whole number; negative scale means trailing zeros were folded away
        format!("{}{}.0", magnitude, "0".repeat(scale.unsigned_abs() as usize))
    } else {
        let scale = scale as usize;
        let padded = if magnitude.len() <= scale {
            format!("{}{}", "0".repeat(scale - magnitude.len() + 1), magnitude)
        } else {
            magnitude
        };
        let (int, frac) = padded.split_at(padded.len() - scale);
        format!("{}.{}", int, frac)
    };

    Some(if negative { format!("-{}", body) } else { body })
}

/// Exponent rendering (`1E999999999`) for decimals too long to spell out
fn scientific_decimal(value: &BigDecimal) -> String {
    let (negative, magnitude, scale) = normalized_parts(value);
    let sign = if negative { "-" } else { "" };
    format!("{}{}E{}", sign, magnitude, scale.saturating_neg())
}

/// Sign, significant digits and scale, with trailing zeros folded into the scale
fn normalized_parts(value: &BigDecimal) -> (bool, String, i64) {
    let (digits, scale) = value.as_bigint_and_exponent();
    if digits.is_zero() {
        return (false, "0".to_string(), 0);
    }
    let mut magnitude = digits.abs().to_string();
    let significant = magnitude.trim_end_matches('0').len();
    let stripped = (magnitude.len() - significant) as i64;
    magnitude.truncate(significant);
    (digits.is_negative(), magnitude, scale.saturating_sub(stripped))
}

/// Truncate toward zero without materializing huge powers of ten
fn truncate_decimal(value: &BigDecimal) -> Result<i64> {
    let (digits, scale) = value.as_bigint_and_exponent();
    if digits.is_zero() {
        return Ok(0);
    }
    let len = digits.abs().to_string().len() as i64;
    if scale >= len {
        // |value| < 1
        return Ok(0);
    }
    // i64 holds at most 19 integer digits
    if len.saturating_sub(scale) > 19 {
        return Err(LiteralError::Overflow);
    }
    let (truncated, _): (BigInt, i64) = value.with_scale(0).into_bigint_and_exponent();
    truncated.to_i64().ok_or(LiteralError::Overflow)
}

/// An xsd:decimal literal
#[derive(Clone, Debug, Serialize)]
pub struct DecimalLiteral {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<BigDecimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lexical: Option<Arc<str>>,
    datatype: Datatype,
}

impl DecimalLiteral {
    pub fn new(value: BigDecimal) -> Self {
        Self {
            value: Some(value),
            lexical: None,
            datatype: Datatype::xsd_decimal(),
        }
    }

    /// Literal from a lexical string, kept verbatim
    pub fn from_lexical(lexical: impl AsRef<str>) -> Self {
        Self::from_typed_lexical(lexical, Datatype::xsd_decimal())
    }

    /// Literal from a lexical string under an explicit datatype
    pub fn from_typed_lexical(lexical: impl AsRef<str>, datatype: Datatype) -> Self {
        let lexical = lexical.as_ref();
        Self {
            value: decode_decimal(lexical, &datatype),
            lexical: Some(Arc::from(lexical)),
            datatype,
        }
    }

    pub fn with_datatype(mut self, datatype: Datatype) -> Self {
        self.datatype = datatype;
        self
    }

    pub fn value(&self) -> Option<&BigDecimal> {
        self.value.as_ref()
    }
}

impl Literal for DecimalLiteral {
    fn lexical(&self) -> Cow<'_, str> {
        match (&self.lexical, &self.value) {
            (Some(lexical), _) => Cow::Borrowed(lexical),
            (None, Some(value)) => Cow::Owned(
                canonical_decimal(value).unwrap_or_else(|| scientific_decimal(value)),
            ),
            (None, None) => Cow::Borrowed(""),
        }
    }

    fn datatype(&self) -> &Datatype {
        &self.datatype
    }

    fn is_valid(&self) -> bool {
        self.value.is_some() && self.lexical.as_deref().map_or(true, matches_decimal_grammar)
    }

    fn canonicalize(&mut self) -> &mut Self {
        if let Some(value) = &self.value {
            match canonical_decimal(value) {
                Some(canonical) => self.lexical = Some(Arc::from(canonical)),
                None => tracing::debug!(
                    max_len = MAX_CANONICAL_DECIMAL_LEN,
                    "decimal too long for canonical form; lexical form kept"
                ),
            }
        }
        self
    }
}

impl ToInteger for DecimalLiteral {
    /// Truncates toward zero
    fn to_integer(&self) -> Result<i64> {
        self.value.as_ref().map_or(Ok(0), truncate_decimal)
    }
}

impl PartialEq for DecimalLiteral {
    fn eq(&self, other: &Self) -> bool {
        match (&self.value, &other.value) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.lexical == other.lexical,
            _ => false,
        }
    }
}

impl<'de> Deserialize<'de> for DecimalLiteral {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = LiteralRepr::<BigDecimal>::deserialize(deserializer)?;
        let datatype = repr.datatype.unwrap_or_else(Datatype::xsd_decimal);
        let value = repr
            .value
            .or_else(|| repr.lexical.as_deref().and_then(|l| decode_decimal(l, &datatype)));
        Ok(Self {
            value,
            lexical: repr.lexical,
            datatype,
        })
    }
}

impl fmt::Display for DecimalLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexical())
    }
}

// =============================================================================
// xsd:double
// =============================================================================

/// Check a string against the xsd:double lexical grammar
pub fn matches_double_grammar(lexical: &str) -> bool {
    if matches!(lexical, "INF" | "+INF" | "-INF" | "NaN") {
        return true;
    }
    let mantissa = match lexical.find(['e', 'E']) {
        Some(pos) => {
            let exponent = &lexical[pos + 1..];
            let exponent = exponent
                .strip_prefix(|c: char| c == '+' || c == '-')
                .unwrap_or(exponent);
            if !all_digits(exponent) {
                return false;
            }
            &lexical[..pos]
        }
        None => lexical,
    };
    matches_decimal_grammar(mantissa)
}

fn decode_double(lexical: &str, datatype: &Datatype) -> Option<f64> {
    let decoded = match lexical {
        "INF" | "+INF" => Some(f64::INFINITY),
        "-INF" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        // f64::from_str also accepts "inf"/"nan" spellings that XSD does not
        _ if matches_double_grammar(lexical) => lexical.parse::<f64>().ok(),
        _ => None,
    };
    if decoded.is_none() {
        tracing::debug!(lexical, datatype = %datatype, "double lexical form did not decode");
    }
    decoded
}

/// Canonical xsd:double rendering (`1.5E2`, `1.0E0`, `INF`, `NaN`)
pub fn canonical_double(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "INF" } else { "-INF" }.to_string();
    }
    let formatted = format!("{:E}", value);
    match formatted.split_once('E') {
        Some((mantissa, exponent)) if !mantissa.contains('.') => {
            format!("{}.0E{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// An xsd:double (or xsd:float) literal
#[derive(Clone, Debug, Serialize)]
pub struct DoubleLiteral {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lexical: Option<Arc<str>>,
    datatype: Datatype,
}

impl DoubleLiteral {
    pub fn new(value: f64) -> Self {
        Self {
            value: Some(value),
            lexical: None,
            datatype: Datatype::xsd_double(),
        }
    }

    /// Literal from a lexical string, kept verbatim
    pub fn from_lexical(lexical: impl AsRef<str>) -> Self {
        Self::from_typed_lexical(lexical, Datatype::xsd_double())
    }

    /// Literal from a lexical string under an explicit datatype (e.g. xsd:float)
    pub fn from_typed_lexical(lexical: impl AsRef<str>, datatype: Datatype) -> Self {
        let lexical = lexical.as_ref();
        Self {
            value: decode_double(lexical, &datatype),
            lexical: Some(Arc::from(lexical)),
            datatype,
        }
    }

    pub fn with_datatype(mut self, datatype: Datatype) -> Self {
        self.datatype = datatype;
        self
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

impl Literal for DoubleLiteral {
    fn lexical(&self) -> Cow<'_, str> {
        match (&self.lexical, self.value) {
            (Some(lexical), _) => Cow::Borrowed(lexical),
            (None, Some(value)) => Cow::Owned(canonical_double(value)),
            (None, None) => Cow::Borrowed(""),
        }
    }

    fn datatype(&self) -> &Datatype {
        &self.datatype
    }

    fn is_valid(&self) -> bool {
        self.value.is_some() && self.lexical.as_deref().map_or(true, matches_double_grammar)
    }

    fn canonicalize(&mut self) -> &mut Self {
        if let Some(value) = self.value {
            self.lexical = Some(Arc::from(canonical_double(value)));
        }
        self
    }
}

impl ToInteger for DoubleLiteral {
    /// Truncates toward zero; NaN and infinities have no integer value
    fn to_integer(&self) -> Result<i64> {
        self.value.map_or(Ok(0), f64_to_integer)
    }
}

impl PartialEq for DoubleLiteral {
    fn eq(&self, other: &Self) -> bool {
        match (self.value, other.value) {
            // NaN equals itself; 0.0 equals -0.0
            (Some(a), Some(b)) => a == b || (a.is_nan() && b.is_nan()),
            (None, None) => self.lexical == other.lexical,
            _ => false,
        }
    }
}

impl<'de> Deserialize<'de> for DoubleLiteral {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // NaN and infinities serialize as null, so they come back from the lexical form
        let repr = LiteralRepr::<f64>::deserialize(deserializer)?;
        let datatype = repr.datatype.unwrap_or_else(Datatype::xsd_double);
        let value = repr
            .value
            .or_else(|| repr.lexical.as_deref().and_then(|l| decode_double(l, &datatype)));
        Ok(Self {
            value,
            lexical: repr.lexical,
            datatype,
        })
    }
}

impl fmt::Display for DoubleLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexical())
    }
}

// =============================================================================
// xsd:boolean
// =============================================================================

fn decode_boolean(lexical: &str, datatype: &Datatype) -> Option<bool> {
    match lexical {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => {
            tracing::debug!(lexical, datatype = %datatype, "boolean lexical form did not decode");
            None
        }
    }
}

/// An xsd:boolean literal
#[derive(Clone, Debug, Serialize)]
pub struct BooleanLiteral {
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lexical: Option<Arc<str>>,
    datatype: Datatype,
}

impl BooleanLiteral {
    pub fn new(value: bool) -> Self {
        Self {
            value: Some(value),
            lexical: None,
            datatype: Datatype::xsd_boolean(),
        }
    }

    /// Literal from a lexical string (`true`, `false`, `1`, `0`), kept verbatim
    pub fn from_lexical(lexical: impl AsRef<str>) -> Self {
        let lexical = lexical.as_ref();
        let datatype = Datatype::xsd_boolean();
        Self {
            value: decode_boolean(lexical, &datatype),
            lexical: Some(Arc::from(lexical)),
            datatype,
        }
    }

    pub fn value(&self) -> Option<bool> {
        self.value
    }
}

impl Literal for BooleanLiteral {
    fn lexical(&self) -> Cow<'_, str> {
        match (&self.lexical, self.value) {
            (Some(lexical), _) => Cow::Borrowed(lexical),
            (None, Some(true)) => Cow::Borrowed("true"),
            (None, Some(false)) => Cow::Borrowed("false"),
            (None, None) => Cow::Borrowed(""),
        }
    }

    fn datatype(&self) -> &Datatype {
        &self.datatype
    }

    fn is_valid(&self) -> bool {
        self.value.is_some()
    }

    fn canonicalize(&mut self) -> &mut Self {
        if let Some(value) = self.value {
            self.lexical = Some(Arc::from(if value { "true" } else { "false" }));
        }
        self
    }
}

impl ToInteger for BooleanLiteral {
    fn to_integer(&self) -> Result<i64> {
        Err(LiteralError::invalid_operand(
            self.datatype.display_name(),
            "has no integer value",
        ))
    }
}

impl PartialEq for BooleanLiteral {
    fn eq(&self, other: &Self) -> bool {
        match (self.value, other.value) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.lexical == other.lexical,
            _ => false,
        }
    }
}

impl<'de> Deserialize<'de> for BooleanLiteral {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = LiteralRepr::<bool>::deserialize(deserializer)?;
        let datatype = repr.datatype.unwrap_or_else(Datatype::xsd_boolean);
        let value = repr
            .value
            .or_else(|| repr.lexical.as_deref().and_then(|l| decode_boolean(l, &datatype)));
        Ok(Self {
            value,
            lexical: repr.lexical,
            datatype,
        })
    }
}

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexical())
    }
}

// =============================================================================
// Plain / unrecognized datatypes
// =============================================================================

/// A string literal, or a literal whose datatype has no dedicated variant
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlainLiteral {
    lexical: Arc<str>,
    #[serde(default = "default_string")]
    datatype: Datatype,
}

impl PlainLiteral {
    /// xsd:string literal
    pub fn new(lexical: impl AsRef<str>) -> Self {
        Self {
            lexical: Arc::from(lexical.as_ref()),
            datatype: Datatype::xsd_string(),
        }
    }

    /// Literal with an explicit datatype, stored opaquely
    pub fn typed(lexical: impl AsRef<str>, datatype: Datatype) -> Self {
        Self {
            lexical: Arc::from(lexical.as_ref()),
            datatype,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.lexical
    }
}

impl Literal for PlainLiteral {
    fn lexical(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.lexical)
    }

    fn datatype(&self) -> &Datatype {
        &self.datatype
    }

    fn is_valid(&self) -> bool {
        true
    }

    fn canonicalize(&mut self) -> &mut Self {
        self
    }
}

impl ToInteger for PlainLiteral {
    fn to_integer(&self) -> Result<i64> {
        Err(LiteralError::invalid_operand(
            self.datatype.display_name(),
            format!("\"{}\" has no integer value", self.lexical),
        ))
    }
}

impl fmt::Display for PlainLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexical)
    }
}
