use tracing::debug;

use crate::interpreter::{
    evaluator::core::EvalResult,
    shape::{shape_of, to_matrix},
    value::{core::Value, matrix::Matrix},
};

/// Transposes a matrix by swapping its rows and columns.
///
/// A `(1, 1)` operand, scalar or matrix, is returned unchanged. Any other
/// `(rows, cols)` operand produces a `(cols, rows)` matrix. A matrix whose
/// rows are all empty has no columns, so its transpose has no rows.
///
/// # Parameters
/// - `operand`: The value to transpose.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use matlang::interpreter::{
///     evaluator::function::transpose::transpose,
///     value::{core::Value, matrix::Matrix},
/// };
///
/// // [[1, 2, 3]] -> [[1], [2], [3]]
/// let row = Value::Matrix(Matrix::from_rows(vec![vec![1_i64.into(), 2_i64.into(), 3_i64.into()]], 1).unwrap());
/// assert_eq!(transpose(&row, 1).unwrap().to_string(), "[[1], [2], [3]]");
///
/// assert_eq!(transpose(&Value::from(7_i64), 1).unwrap(), Value::from(7_i64));
/// ```
pub fn transpose(operand: &Value, line: usize) -> EvalResult<Value> {
    let shape = shape_of(operand);

    if shape.is_single() {
        return Ok(operand.clone());
    }

    let matrix = to_matrix(operand);
    let mut columns: Vec<Vec<_>> = (0..shape.cols).map(|_| Vec::with_capacity(shape.rows))
                                                  .collect();

    for row in matrix.rows() {
        for (column, element) in columns.iter_mut().zip(row) {
            column.push(*element);
        }
    }

    debug!(%shape, "transpose");
    Ok(Value::Matrix(Matrix::from_rows(columns, line)?))
}
