//! Error types for fluree-literal

use fluree_literal_vocab::errors;
use thiserror::Error;

/// Result type alias using our LiteralError
pub type Result<T> = std::result::Result<T, LiteralError>;

/// Errors raised by literal arithmetic and operand conversion.
///
/// Malformed lexical forms are deliberately absent: construction never
/// fails, and validity is queried with `Literal::is_valid`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    /// Integer division with a zero divisor
    #[error("division by zero")]
    DivisionByZero,

    /// Result does not fit in i64
    #[error("integer overflow")]
    Overflow,

    /// Operand has no integer meaning
    #[error("invalid operand: {kind} {reason}")]
    InvalidOperand {
        /// Kind of the rejected operand (e.g. "xsd:boolean")
        kind: String,
        /// Why it cannot be converted
        reason: String,
    },
}

impl LiteralError {
    /// Create an invalid operand error
    pub fn invalid_operand(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        LiteralError::InvalidOperand {
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// Compact error-type IRI for API responses
    pub fn error_type(&self) -> &'static str {
        match self {
            LiteralError::DivisionByZero => errors::DIVISION_BY_ZERO,
            LiteralError::Overflow => errors::OVERFLOW,
            LiteralError::InvalidOperand { .. } => errors::INVALID_OPERAND,
        }
    }
}
