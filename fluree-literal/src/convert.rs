//! Integer-conversion capability
//!
//! Arithmetic operands only need to answer "what integer are you?". Native
//! integers always can; literals answer from their decoded value; literal
//! kinds without an integer meaning (booleans, plain strings, NaN) refuse with
//! `LiteralError::InvalidOperand`.

use crate::error::{LiteralError, Result};

/// Conversion to a native `i64`
pub trait ToInteger {
    /// The integer value of `self`
    fn to_integer(&self) -> Result<i64>;
}

impl<T: ToInteger + ?Sized> ToInteger for &T {
    fn to_integer(&self) -> Result<i64> {
        (**self).to_integer()
    }
}

macro_rules! lossless_to_integer {
    ($($t:ty),*) => {
        $(
            impl ToInteger for $t {
                #[inline]
                fn to_integer(&self) -> Result<i64> {
                    Ok(i64::from(*self))
                }
            }
        )*
    };
}

lossless_to_integer!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! checked_to_integer {
    ($($t:ty),*) => {
        $(
            impl ToInteger for $t {
                #[inline]
                fn to_integer(&self) -> Result<i64> {
                    i64::try_from(*self).map_err(|_| LiteralError::Overflow)
                }
            }
        )*
    };
}

checked_to_integer!(i128, u64, u128, isize, usize);

/// Truncate a float toward zero, rejecting NaN, infinities and out-of-range values
pub(crate) fn f64_to_integer(value: f64) -> Result<i64> {
    if !value.is_finite() {
        return Err(LiteralError::invalid_operand(
            "xsd:double",
            format!("{} has no integer value", value),
        ));
    }
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(LiteralError::Overflow);
    }
    Ok(truncated as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_integers() {
        assert_eq!(42i64.to_integer(), Ok(42));
        assert_eq!((-7i8).to_integer(), Ok(-7));
        assert_eq!(u32::MAX.to_integer(), Ok(u32::MAX as i64));
        assert_eq!((&&5i32).to_integer(), Ok(5));
    }

    #[test]
    fn test_out_of_range_integers() {
        assert_eq!(u64::MAX.to_integer(), Err(LiteralError::Overflow));
        assert_eq!((i64::MAX as i128 + 1).to_integer(), Err(LiteralError::Overflow));
        assert_eq!((i64::MIN as i128).to_integer(), Ok(i64::MIN));
    }

    #[test]
    fn test_f64_to_integer() {
        assert_eq!(f64_to_integer(3.9), Ok(3));
        assert_eq!(f64_to_integer(-3.9), Ok(-3));
        assert_eq!(f64_to_integer(1e300), Err(LiteralError::Overflow));
        assert!(matches!(
            f64_to_integer(f64::NAN),
            Err(LiteralError::InvalidOperand { .. })
        ));
        assert!(matches!(
            f64_to_integer(f64::NEG_INFINITY),
            Err(LiteralError::InvalidOperand { .. })
        ));
    }
}
