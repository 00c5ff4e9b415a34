/// Binary operator evaluation logic.
///
/// Handles elementwise addition and subtraction of matrices and scalars.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine: the runtime context, statement and
/// expression dispatch, and error propagation.
pub mod core;

/// Variable bindings for one program run.
pub mod environment;

/// Function evaluation.
///
/// Looks up the matrix functions (`dot`, `matmul`, `transpose`,
/// `determinant`, `inverse`), checks operand counts and computes results.
pub mod function;

/// Destinations for printed output.
pub mod output;

/// Utility functions for evaluation.
pub mod utils;
