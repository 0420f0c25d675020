//! Error type compact IRIs
//!
//! These compact IRI strings identify literal error types in API responses.
//! They follow the pattern: `err:category/ErrorName`
//!
//! The `err:` prefix maps to `https://ns.flur.ee/errors#` in the full JSON-LD context.
//!
//! ```json
//! {
//!   "error": "division by zero",
//!   "@type": "err:literal/DivisionByZero"
//! }
//! ```

/// Integer division with a zero divisor
pub const DIVISION_BY_ZERO: &str = "err:literal/DivisionByZero";

/// Result does not fit the native integer range
pub const OVERFLOW: &str = "err:literal/Overflow";

/// Operand has no integer meaning (boolean, plain string, NaN, ...)
pub const INVALID_OPERAND: &str = "err:literal/InvalidOperand";
