use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64_checked,
};

/// A single numeric datum.
///
/// Integer arithmetic stays integer as long as both operands are integers.
/// As soon as a real takes part, both sides are promoted to `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64 bit integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<LiteralValue> for Number {
    fn from(lit: LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => i.into(),
            LiteralValue::Real(r) => r.into(),
        }
    }
}

impl Number {
    /// Converts the number to an `f64`.
    ///
    /// # Returns
    /// - `Ok(f64)`: The real value, or the integer if it converts losslessly.
    /// - `Err(RuntimeError::LiteralTooLarge)`: If the integer exceeds the
    ///   range `f64` represents exactly.
    ///
    /// # Example
    /// ```
    /// use matlang::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::Integer(10).as_real(1).unwrap(), 10.0);
    /// assert_eq!(Number::Real(2.5).as_real(1).unwrap(), 2.5);
    /// ```
    pub fn as_real(self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(r),
            Self::Integer(n) => i64_to_f64_checked(n, RuntimeError::LiteralTooLarge { line }),
        }
    }

    /// Returns `true` if the number is exactly zero (`0`, `0.0` or `-0.0`).
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }

    /// Adds two numbers, promoting to real for mixed operands.
    ///
    /// # Example
    /// ```
    /// use matlang::interpreter::value::number::Number;
    ///
    /// let sum = Number::Integer(1).checked_add(Number::Real(0.5), 1).unwrap();
    /// assert_eq!(sum, Number::Real(1.5));
    ///
    /// assert!(Number::Integer(i64::MAX).checked_add(Number::Integer(1), 1).is_err());
    /// ```
    pub fn checked_add(self, other: Self, line: usize) -> EvalResult<Self> {
        self.combine(other, line, i64::checked_add, |a, b| a + b)
    }

    /// Subtracts `other` from `self`, promoting to real for mixed operands.
    pub fn checked_sub(self, other: Self, line: usize) -> EvalResult<Self> {
        self.combine(other, line, i64::checked_sub, |a, b| a - b)
    }

    /// Multiplies two numbers, promoting to real for mixed operands.
    pub fn checked_mul(self, other: Self, line: usize) -> EvalResult<Self> {
        self.combine(other, line, i64::checked_mul, |a, b| a * b)
    }

    /// Negates the number.
    pub fn checked_neg(self, line: usize) -> EvalResult<Self> {
        match self {
            Self::Integer(n) => n.checked_neg()
                                 .map(Self::Integer)
                                 .ok_or(RuntimeError::Overflow { line }),
            Self::Real(r) => Ok(Self::Real(-r)),
        }
    }

    /// Divides `self` by `divisor`, always producing a real.
    ///
    /// The caller is responsible for rejecting a zero divisor; dividing by a
    /// real zero follows IEEE 754.
    ///
    /// # Example
    /// ```
    /// use matlang::interpreter::value::number::Number;
    ///
    /// let q = Number::Integer(4).real_div(Number::Integer(2), 1).unwrap();
    /// assert_eq!(q, Number::Real(2.0));
    /// ```
    pub fn real_div(self, divisor: Self, line: usize) -> EvalResult<Self> {
        Ok(Self::Real(self.as_real(line)? / divisor.as_real(line)?))
    }

    fn combine(self,
               other: Self,
               line: usize,
               integer_op: fn(i64, i64) -> Option<i64>,
               real_op: fn(f64, f64) -> f64)
               -> EvalResult<Self> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => {
                integer_op(a, b).map(Self::Integer)
                                .ok_or(RuntimeError::Overflow { line })
            },
            _ => Ok(Self::Real(real_op(self.as_real(line)?, other.as_real(line)?))),
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // `Debug` keeps the trailing `.0` on integral reals.
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}
