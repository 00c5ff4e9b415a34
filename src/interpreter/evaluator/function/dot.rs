use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        shape::{flatten, shape_of},
        value::{core::Value, number::Number},
    },
};

/// Computes the dot product of two operands.
///
/// Both operands are flattened in row-major order, so any two values with the
/// same number of entries qualify, whatever their shapes. A scalar counts as
/// one entry. The result is the sum of the pairwise products; it is an
/// integer `0` for two empty operands.
///
/// # Parameters
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// A scalar `Value`.
///
/// # Example
/// ```
/// use matlang::interpreter::{
///     evaluator::function::dot::dot,
///     value::{core::Value, matrix::Matrix},
/// };
///
/// let row = Value::Matrix(Matrix::from_rows(vec![vec![1_i64.into(), 2_i64.into(), 3_i64.into()]], 1).unwrap());
/// let column = Value::Matrix(Matrix::from_rows(vec![vec![4_i64.into()], vec![5_i64.into()], vec![6_i64.into()]],
///                                              1).unwrap());
///
/// assert_eq!(dot(&row, &column, 1).unwrap(), Value::from(32_i64));
/// ```
pub fn dot(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let elements = shape_of(left).element_count();
    let right_elements = shape_of(right).element_count();

    if elements != right_elements {
        return Err(RuntimeError::DimensionMismatch { operation: "dot",
                                                     details: format!("operands must have the same number of elements, found {elements} and {right_elements}"),
                                                     line });
    }

    let result = flatten(left).into_iter()
                              .zip(flatten(right))
                              .try_fold(Number::Integer(0), |sum, (a, b)| {
                                  sum.checked_add(a.checked_mul(b, line)?, line)
                              })?;

    debug!(elements, %result, "dot product");
    Ok(Value::Scalar(result))
}
