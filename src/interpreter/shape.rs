use std::borrow::Cow;

use crate::interpreter::value::{core::Value, matrix::Matrix, number::Number};

/// The rectangular extent of a value.
///
/// Shapes are derived on demand and never stored alongside a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Shape {
    /// The shape of a scalar and of any single-cell matrix.
    pub const SINGLE: Self = Self::new(1, 1);

    /// Creates a shape of `rows` by `cols`.
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns `true` for the `(1, 1)` shape.
    #[must_use]
    pub const fn is_single(self) -> bool {
        self.rows == 1 && self.cols == 1
    }

    /// Total number of entries.
    #[must_use]
    pub const fn element_count(self) -> usize {
        self.rows * self.cols
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

/// Computes the shape of a value.
///
/// Scalars have shape `(1, 1)`. A matrix without rows has shape `(0, 0)`;
/// otherwise the shape is the row count and the length of the first row.
///
/// # Example
/// ```
/// use matlang::interpreter::{
///     shape::{Shape, shape_of},
///     value::{core::Value, matrix::Matrix},
/// };
///
/// assert_eq!(shape_of(&Value::from(3_i64)), Shape::new(1, 1));
/// assert_eq!(shape_of(&Value::Matrix(Matrix::empty())), Shape::new(0, 0));
///
/// let m = Matrix::from_rows(vec![vec![1_i64.into(), 2_i64.into(), 3_i64.into()]], 1).unwrap();
/// assert_eq!(shape_of(&Value::Matrix(m)), Shape::new(1, 3));
/// ```
#[must_use]
pub fn shape_of(value: &Value) -> Shape {
    match value {
        Value::Scalar(_) => Shape::SINGLE,
        Value::Matrix(m) => Shape::new(m.row_count(), m.column_count()),
    }
}

/// Linearizes a value into its entries in row-major order.
///
/// A scalar flattens to a single entry.
#[must_use]
pub fn flatten(value: &Value) -> Vec<Number> {
    match value {
        Value::Scalar(n) => vec![*n],
        Value::Matrix(m) => m.elements().collect(),
    }
}

/// Views a value as a matrix, promoting a scalar to a 1x1 matrix.
///
/// Matrices are borrowed as they are; only scalars allocate.
#[must_use]
pub fn to_matrix(value: &Value) -> Cow<'_, Matrix> {
    match value {
        Value::Scalar(n) => Cow::Owned(Matrix::single(*n)),
        Value::Matrix(m) => Cow::Borrowed(m),
    }
}

/// Reads a scalar or a 1x1 matrix as a bare number.
///
/// Returns `None` for every other shape.
#[must_use]
pub fn as_scalar_if_1x1(value: &Value) -> Option<Number> {
    match value {
        Value::Scalar(n) => Some(*n),
        Value::Matrix(m) => match m.rows() {
            [row] => match row.as_slice() {
                [n] => Some(*n),
                _ => None,
            },
            _ => None,
        },
    }
}
