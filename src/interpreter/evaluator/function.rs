/// Function lookup, operand count checks and dispatch.
pub mod core;
/// The `determinant` (`det`) function implementation.
///
/// Computes `a*d - b*c` for a 2x2 matrix.
pub mod determinant;
/// The `dot` function implementation.
///
/// Sums the products of corresponding entries of two operands with the same
/// number of elements.
pub mod dot;
/// The `inverse` (`inv`) function implementation.
///
/// Inverts a non-singular 2x2 matrix.
pub mod inverse;
/// The `matmul` function implementation.
///
/// Multiplies two matrices with the standard row-by-column product.
pub mod matmul;
/// The `transpose` function implementation.
///
/// Swaps rows and columns.
pub mod transpose;
