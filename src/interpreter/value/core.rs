use crate::interpreter::value::{matrix::Matrix, number::Number};

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to one of these two variants. Operations that
/// need a matrix but receive a scalar (or the other way round) coerce at the
/// operation boundary; stored values are never rewritten.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single number.
    Scalar(Number),
    /// A rectangular matrix of numbers.
    Matrix(Matrix),
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Self::Scalar(n)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Self::Matrix(m)
    }
}

impl Value {
    /// Returns `true` if the value is [`Value::Matrix`].
    #[must_use]
    pub const fn is_matrix(&self) -> bool {
        matches!(self, Self::Matrix(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(n) => write!(f, "{n}"),
            Self::Matrix(m) if f.alternate() => write!(f, "{m:#}"),
            Self::Matrix(m) => write!(f, "{m}"),
        }
    }
}
