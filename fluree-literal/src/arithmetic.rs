//! Checked integer arithmetic shared by the literal operators

use crate::error::{LiteralError, Result};

/// Binary arithmetic operator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithmeticOp {
    /// Apply this operation to two integers.
    ///
    /// Division truncates toward zero (`-7 / 2 == -3`).
    ///
    /// # Errors
    ///
    /// - `LiteralError::DivisionByZero` when dividing by zero
    /// - `LiteralError::Overflow` when the result leaves the i64 range
    pub fn apply(self, left: i64, right: i64) -> Result<i64> {
        match self {
            ArithmeticOp::Add => left.checked_add(right).ok_or(LiteralError::Overflow),
            ArithmeticOp::Sub => left.checked_sub(right).ok_or(LiteralError::Overflow),
            ArithmeticOp::Mul => left.checked_mul(right).ok_or(LiteralError::Overflow),
            ArithmeticOp::Div => {
                if right == 0 {
                    return Err(LiteralError::DivisionByZero);
                }
                // i64::MIN / -1 is the only overflowing quotient
                left.checked_div(right).ok_or(LiteralError::Overflow)
            }
        }
    }
}
