/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST statement by statement, evaluates
/// expressions, dispatches to the matrix operations, manages variable
/// bindings and emits printed output. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates declarations, assignments, prints and bare expressions.
/// - Resolves identifiers against the environment.
/// - Reports runtime errors such as shape mismatches or singular matrices.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens with
/// their line numbers: numbers, identifiers, keywords, brackets and
/// punctuation. Comments and whitespace are skipped.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into statements, expressions and matrix literals.
/// - Validates grammar, reporting errors with line information.
/// - Rejects reserved names used as variables.
pub mod parser;
/// Shapes and scalar/matrix coercion.
///
/// Computes the `(rows, cols)` extent of a value, flattens values into
/// row-major order and converts between scalars and single-cell matrices at
/// operation boundaries.
pub mod shape;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum with its scalar and matrix variants.
/// - Implements checked numeric arithmetic with integer/real promotion.
/// - Guarantees matrices are rectangular.
pub mod value;
