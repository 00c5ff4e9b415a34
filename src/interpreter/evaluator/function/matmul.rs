use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        shape::{Shape, shape_of, to_matrix},
        value::{core::Value, matrix::Matrix, number::Number},
    },
};

/// Multiplies two matrices.
///
/// The column count of `left` must equal the row count of `right`. The
/// result has the rows of `left` and the columns of `right`, and entry
/// `(i, j)` is the sum over `k` of `left[i][k] * right[k][j]`. Scalars take
/// part as 1x1 matrices, so the result is always a matrix.
///
/// # Parameters
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use matlang::interpreter::{
///     evaluator::function::matmul::matmul,
///     value::{core::Value, matrix::Matrix},
/// };
///
/// let a = Value::Matrix(Matrix::from_rows(vec![vec![1_i64.into(), 2_i64.into()], vec![3_i64.into(), 4_i64.into()]],
///                                         1).unwrap());
/// let b = Value::Matrix(Matrix::from_rows(vec![vec![5_i64.into(), 6_i64.into()], vec![7_i64.into(), 8_i64.into()]],
///                                         1).unwrap());
///
/// let product = matmul(&a, &b, 1).unwrap();
/// assert_eq!(product.to_string(), "[[19, 22], [43, 50]]");
/// ```
pub fn matmul(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let left_shape = shape_of(left);
    let right_shape = shape_of(right);

    if left_shape.cols != right_shape.rows {
        return Err(RuntimeError::DimensionMismatch { operation: "matmul",
                                                     details: format!("the left operand has {} columns but the right operand has {} rows",
                                                                      left_shape.cols,
                                                                      right_shape.rows),
                                                     line });
    }

    let a = to_matrix(left);
    let b = to_matrix(right);
    let (a, b) = (a.rows(), b.rows());

    let mut rows = Vec::with_capacity(left_shape.rows);
    for a_row in a {
        let mut row = Vec::with_capacity(right_shape.cols);
        for j in 0..right_shape.cols {
            let mut sum = Number::Integer(0);
            for (k, a_entry) in a_row.iter().enumerate() {
                sum = sum.checked_add(a_entry.checked_mul(b[k][j], line)?, line)?;
            }
            row.push(sum);
        }
        rows.push(row);
    }

    let result = Matrix::from_rows(rows, line)?;
    debug!(left = %left_shape,
           right = %right_shape,
           result = %Shape::new(result.row_count(), result.column_count()),
           "matrix multiplication");

    Ok(Value::Matrix(result))
}
