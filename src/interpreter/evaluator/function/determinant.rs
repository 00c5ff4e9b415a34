use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        shape::shape_of,
        value::{core::Value, number::Number},
    },
};

/// Computes the determinant of a 2x2 matrix.
///
/// For `[[a, b], [c, d]]` the result is `a*d - b*c`. Every other shape,
/// scalars included, is rejected.
///
/// # Example
/// ```
/// use matlang::{
///     error::RuntimeError,
///     interpreter::{
///         evaluator::function::determinant::determinant,
///         value::{core::Value, matrix::Matrix},
///     },
/// };
///
/// let m = Value::Matrix(Matrix::from_rows(vec![vec![3_i64.into(), 8_i64.into()], vec![4_i64.into(), 6_i64.into()]],
///                                         1).unwrap());
/// assert_eq!(determinant(&m, 1).unwrap(), Value::from(-14_i64));
///
/// assert!(matches!(determinant(&Value::from(5_i64), 1),
///                  Err(RuntimeError::UnsupportedShape { .. })));
/// ```
pub fn determinant(operand: &Value, line: usize) -> EvalResult<Value> {
    let det = determinant_of(operand, "determinant", line)?;
    debug!(%det, "determinant");
    Ok(Value::Scalar(det))
}

/// Computes `a*d - b*c`, naming `operation` if the operand is not 2x2.
pub(super) fn determinant_of(operand: &Value,
                             operation: &'static str,
                             line: usize)
                             -> EvalResult<Number> {
    let [[a, b], [c, d]] = entries_2x2(operand, operation, line)?;

    a.checked_mul(d, line)?
     .checked_sub(b.checked_mul(c, line)?, line)
}

/// Extracts the four entries of a 2x2 matrix.
pub(super) fn entries_2x2(operand: &Value,
                          operation: &'static str,
                          line: usize)
                          -> EvalResult<[[Number; 2]; 2]> {
    if let Value::Matrix(matrix) = operand
       && let [top, bottom] = matrix.rows()
       && let ([a, b], [c, d]) = (top.as_slice(), bottom.as_slice())
    {
        return Ok([[*a, *b], [*c, *d]]);
    }

    Err(RuntimeError::UnsupportedShape { operation,
                                         shape: shape_of(operand),
                                         line })
}
