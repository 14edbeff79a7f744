use crate::error::{Error, Result};
use std::fmt::{self, Display, Formatter};

/// A number taking part in a mixed integer and floating point sum.
///
/// Integers up to 32 bits, `i64`, `f32` and `f64` convert with `From`, and so
/// can be passed to [`sum!`](crate::sum). The wider or platform sized
/// integers (`u64`, `usize`, `isize`, `i128`) only convert with `TryFrom`,
/// failing when the value does not fit in an `i64`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Add two numbers, promoting to a float when either side is a float.
    #[allow(clippy::cast_precision_loss)]
    pub fn checked_add(self, rhs: Number) -> Result<Number> {
        match (self, rhs) {
            (Number::Int(lhs), Number::Int(rhs)) => lhs
                .checked_add(rhs)
                .map(Number::Int)
                .ok_or(Error::IntegerOverflow { lhs, rhs }),
            (Number::Int(lhs), Number::Float(rhs)) => Ok(Number::Float(lhs as f64 + rhs)),
            (Number::Float(lhs), Number::Int(rhs)) => Ok(Number::Float(lhs + rhs as f64)),
            (Number::Float(lhs), Number::Float(rhs)) => Ok(Number::Float(lhs + rhs)),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(x) => x as f64,
            Number::Float(x) => x,
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(x) => write!(f, "{x}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

macro_rules! number_from {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(x: $ty) -> Self {
                    Number::$variant(x.into())
                }
            }
        )*
    };
}

number_from!(Int: i8, i16, i32, i64, u8, u16, u32);
number_from!(Float: f32, f64);

macro_rules! number_try_from {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for Number {
                type Error = Error;

                fn try_from(x: $ty) -> Result<Self> {
                    i64::try_from(x)
                        .map(Number::Int)
                        .map_err(|_| Error::IntegerOutOfRange(x.to_string()))
                }
            }
        )*
    };
}

number_try_from!(u64, usize, isize, i128);

/// Sum the values from left to right, one pair at a time.
///
/// The running total starts at the first value, so there is no identity
/// element: an empty input is an error rather than zero.
pub fn sum_variadic<I>(values: I) -> Result<Number>
where
    I: IntoIterator<Item = Number>,
{
    let mut values = values.into_iter();
    let first = values.next().ok_or(Error::EmptySum)?;
    values.try_fold(first, Number::checked_add)
}

/// Sum any number of numeric arguments with [`sum_variadic`].
///
/// ```
/// let total = tour_core::sum!(1, 2.5, 3, 4.2).unwrap();
/// assert!((total.as_f64() - 10.7).abs() < 1e-9);
/// ```
#[macro_export]
macro_rules! sum {
    ($($value:expr),* $(,)?) => {
        $crate::fold::sum_variadic([$($crate::fold::Number::from($value)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_sum() {
        let total = crate::sum!(1, 2.5, 3, 4.2).unwrap();
        assert!(total.is_float());
        assert!((total.as_f64() - 10.7).abs() < 1e-9);
        assert_eq!(total.to_string(), "10.7");
    }

    #[test]
    fn test_integer_sum_stays_integer() {
        assert_eq!(crate::sum!(1, 2, 3).unwrap(), Number::Int(6));
        assert_eq!(crate::sum!(7).unwrap(), Number::Int(7));
    }

    #[test]
    fn test_promotion_is_pairwise() {
        // The integer prefix is summed exactly before the float arrives.
        let total = crate::sum!(i64::MAX, -1, 0.5).unwrap();
        assert!(total.is_float());
    }

    #[test]
    fn test_empty_sum() {
        assert!(matches!(
            sum_variadic(Vec::<Number>::new()),
            Err(Error::EmptySum)
        ));
    }

    #[test]
    fn test_overflow() {
        let err = crate::sum!(i64::MAX, 1).unwrap_err();
        assert!(matches!(
            err,
            Error::IntegerOverflow {
                lhs: i64::MAX,
                rhs: 1
            }
        ));
    }

    #[test]
    fn test_wide_integers() {
        assert_eq!(Number::try_from(5_u64).unwrap(), Number::Int(5));
        assert_eq!(Number::try_from(-5_isize).unwrap(), Number::Int(-5));
        assert_eq!(Number::try_from(7_usize).unwrap(), Number::Int(7));
        let err = Number::try_from(u64::MAX).unwrap_err();
        assert!(matches!(err, Error::IntegerOutOfRange(ref value) if value == "18446744073709551615"));
        assert!(Number::try_from(i128::MIN).is_err());
    }
}
