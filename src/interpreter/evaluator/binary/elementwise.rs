use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        shape::{as_scalar_if_1x1, shape_of, to_matrix},
        value::{core::Value, matrix::Matrix, number::Number},
    },
};

/// Adds two operands entry by entry.
///
/// Both operands must have the same shape. When that shape is `(1, 1)` the
/// result is a scalar, even if both operands are 1x1 matrices.
///
/// # Example
/// ```
/// use matlang::{
///     error::RuntimeError,
///     interpreter::{evaluator::binary::elementwise::add, value::{core::Value, matrix::Matrix}},
/// };
///
/// let a = Value::Matrix(Matrix::from_rows(vec![vec![1_i64.into(), 2_i64.into()]], 1).unwrap());
/// let b = Value::Matrix(Matrix::from_rows(vec![vec![10_i64.into(), 20_i64.into()]], 1).unwrap());
/// let expected = Value::Matrix(Matrix::from_rows(vec![vec![11_i64.into(), 22_i64.into()]], 1).unwrap());
/// assert_eq!(add(&a, &b, 1).unwrap(), expected);
///
/// let single = Value::Matrix(Matrix::from_rows(vec![vec![4_i64.into()]], 1).unwrap());
/// assert_eq!(add(&single, &Value::from(1_i64), 1).unwrap(), Value::from(5_i64));
///
/// assert!(matches!(add(&a, &Value::from(1_i64), 1),
///                  Err(RuntimeError::DimensionMismatch { .. })));
/// ```
pub fn add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    combine("+", left, right, line, Number::checked_add)
}

/// Subtracts `right` from `left` entry by entry.
///
/// Follows the same shape rules as [`add`].
pub fn sub(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    combine("-", left, right, line, Number::checked_sub)
}

fn combine(operation: &'static str,
           left: &Value,
           right: &Value,
           line: usize,
           op: fn(Number, Number, usize) -> EvalResult<Number>)
           -> EvalResult<Value> {
    let left_shape = shape_of(left);
    let right_shape = shape_of(right);

    if left_shape != right_shape {
        return Err(RuntimeError::DimensionMismatch { operation,
                                                     details: format!("operands must have the same shape, found {left_shape} and {right_shape}"),
                                                     line });
    }

    // Equal shapes: either both operands are single-cell or neither is.
    if let (Some(a), Some(b)) = (as_scalar_if_1x1(left), as_scalar_if_1x1(right)) {
        debug!(operation, "scalar arithmetic");
        return Ok(Value::Scalar(op(a, b, line)?));
    }

    let left = to_matrix(left);
    let right = to_matrix(right);

    let rows = left.rows()
                   .iter()
                   .zip(right.rows())
                   .map(|(l, r)| {
                       l.iter()
                        .zip(r)
                        .map(|(a, b)| op(*a, *b, line))
                        .collect::<EvalResult<Vec<_>>>()
                   })
                   .collect::<EvalResult<Vec<_>>>()?;

    debug!(operation, shape = %left_shape, "elementwise operation");
    Ok(Value::Matrix(Matrix::from_rows(rows, line)?))
}
