use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::determinant::{determinant_of, entries_2x2},
        },
        value::{core::Value, matrix::Matrix},
    },
};

/// Inverts a 2x2 matrix.
///
/// For `[[a, b], [c, d]]` with determinant `det` the result is
/// `[[d/det, -b/det], [-c/det, a/det]]`. Entries are always reals, even when
/// the operand holds only integers.
///
/// # Returns
/// - `Err(RuntimeError::UnsupportedShape)`: If the operand is not 2x2.
/// - `Err(RuntimeError::SingularMatrix)`: If the determinant is exactly zero.
///
/// # Example
/// ```
/// use matlang::{
///     error::RuntimeError,
///     interpreter::{
///         evaluator::function::inverse::inverse,
///         value::{core::Value, matrix::Matrix},
///     },
/// };
///
/// let m = Value::Matrix(Matrix::from_rows(vec![vec![4_i64.into(), 7_i64.into()], vec![2_i64.into(), 6_i64.into()]],
///                                         1).unwrap());
/// assert_eq!(inverse(&m, 1).unwrap().to_string(), "[[0.6, -0.7], [-0.2, 0.4]]");
///
/// let singular =
///     Value::Matrix(Matrix::from_rows(vec![vec![1_i64.into(), 2_i64.into()], vec![2_i64.into(), 4_i64.into()]], 1).unwrap());
/// assert!(matches!(inverse(&singular, 1), Err(RuntimeError::SingularMatrix { .. })));
/// ```
pub fn inverse(operand: &Value, line: usize) -> EvalResult<Value> {
    let det = determinant_of(operand, "inverse", line)?;

    if det.is_zero() {
        return Err(RuntimeError::SingularMatrix { line });
    }

    let [[a, b], [c, d]] = entries_2x2(operand, "inverse", line)?;

    let rows = vec![vec![d.real_div(det, line)?, b.checked_neg(line)?.real_div(det, line)?],
                    vec![c.checked_neg(line)?.real_div(det, line)?, a.real_div(det, line)?],];

    debug!(%det, "inverse");
    Ok(Value::Matrix(Matrix::from_rows(rows, line)?))
}
