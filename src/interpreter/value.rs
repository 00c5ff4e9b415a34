/// Matrix value representation.
///
/// Defines the `Matrix` type used by `Value::Matrix`. A matrix is always
/// rectangular: the only way to build one validates that all rows have the
/// same length.
pub mod matrix;
/// Numeric scalar representation.
///
/// Defines the `Number` type holding either an integer or a real. Includes
/// checked arithmetic that promotes mixed operands to real and reports
/// integer overflow instead of wrapping.
pub mod number;

pub mod core;
