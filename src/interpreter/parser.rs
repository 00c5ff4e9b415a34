/// Core parsing entry points.
///
/// Parses whole programs and expressions, and defines the parse result type.
pub mod core;

/// Matrix and number literal parsing.
///
/// Parses bracketed matrix literals row by row, and signed numeric literals.
pub mod literal;

/// Utility functions for the parser.
///
/// Provides comma-separated list parsing and identifier handling shared by
/// the other parser modules.
pub mod utils;

/// Statement parsing.
///
/// Implements matrix declarations, assignments, print statements and
/// expression statements.
pub mod statement;
