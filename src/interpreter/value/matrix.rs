use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::number::Number},
};

/// A rectangular grid of numbers stored row by row.
///
/// A matrix may have no rows at all (`[]`) or rows without elements (`[[]]`).
/// When it has rows, every row has the same length; [`Matrix::from_rows`] is
/// the only constructor taking arbitrary rows and it enforces this.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    rows: Vec<Vec<Number>>,
}

impl Matrix {
    /// Creates a matrix with no rows.
    #[must_use]
    pub const fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Creates a 1x1 matrix holding `value`.
    #[must_use]
    pub fn single(value: Number) -> Self {
        Self { rows: vec![vec![value]] }
    }

    /// Builds a matrix from its rows.
    ///
    /// # Returns
    /// - `Ok(Matrix)`: If all rows have the length of the first one.
    /// - `Err(RuntimeError::IrregularMatrix)`: Naming the first row whose
    ///   length differs.
    ///
    /// # Example
    /// ```
    /// use matlang::{error::RuntimeError, interpreter::value::matrix::Matrix};
    ///
    /// let m = Matrix::from_rows(vec![vec![1_i64.into(), 2_i64.into()], vec![3_i64.into(), 4_i64.into()]], 1);
    /// assert!(m.is_ok());
    ///
    /// let ragged = Matrix::from_rows(vec![vec![1_i64.into(), 2_i64.into()], vec![3_i64.into()]], 7);
    /// assert!(matches!(ragged,
    ///                  Err(RuntimeError::IrregularMatrix { row: 1,
    ///                                                      expected: 2,
    ///                                                      found: 1,
    ///                                                      line: 7 })));
    /// ```
    pub fn from_rows(rows: Vec<Vec<Number>>, line: usize) -> EvalResult<Self> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((row, found)) = rows.iter()
                                            .map(Vec::len)
                                            .enumerate()
                                            .find(|(_, len)| *len != expected)
            {
                return Err(RuntimeError::IrregularMatrix { row,
                                                           expected,
                                                           found,
                                                           line });
            }
        }

        Ok(Self { rows })
    }

    /// The rows of the matrix.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Number>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, `0` for a matrix without rows.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns `true` if the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over all entries in row-major order.
    pub fn elements(&self) -> impl Iterator<Item = Number> + '_ {
        self.rows.iter().flatten().copied()
    }
}

impl std::fmt::Display for Matrix {
    /// Writes `[[1, 2], [3, 4]]`, or one row per line with `{:#}`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn write_row(f: &mut std::fmt::Formatter<'_>, row: &[Number]) -> std::fmt::Result {
            write!(f, "[")?;
            for (index, value) in row.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{value}")?;
            }
            write!(f, "]")
        }

        if self.is_empty() {
            return write!(f, "[]");
        }

        let (open, separator, close) = if f.alternate() {
            ("[\n  ", ",\n  ", "\n]")
        } else {
            ("[", ", ", "]")
        };

        write!(f, "{open}")?;
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                write!(f, "{separator}")?;
            }
            write_row(f, row)?;
        }
        write!(f, "{close}")
    }
}
