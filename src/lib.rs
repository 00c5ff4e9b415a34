//! # matlang
//!
//! matlang is an interpreter for a small matrix arithmetic language written
//! in Rust. Programs declare matrices, assign results to variables and print
//! them, using a fixed set of operations: dot product, matrix multiplication,
//! elementwise addition and subtraction, transpose, and the determinant and
//! inverse of 2x2 matrices.
//!
//! ```text
//! matrix A = [[1, 2, 3], [4, 5, 6]];
//! matrix B = [[7, 8, 9], [10, 11, 12]];
//! x = dot(A, B);
//! print(x);
//! m = matmul([[1, 2], [3, 4]], [[5, 6], [7, 8]]);
//! print(m);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::{Error, ParseError},
    interpreter::{
        evaluator::{core::Context, output::PrintChannel},
        lexer::tokenize,
        parser::core::parse_program,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code, and the `Error` type wrapping both phases.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with the standard `Error` trait.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Parses source text into a program without evaluating it.
///
/// # Errors
/// Returns a `ParseError` if the text contains an unknown character, a
/// malformed statement, or a reserved name used as a variable.
///
/// # Examples
/// ```
/// use matlang::parse;
///
/// assert!(parse("matrix A = [[1, 2], [3, 4]]; print(A);").is_ok());
/// assert!(parse("print(A)").is_err()); // missing ';'
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    parse_program(&tokens)
}

/// Runs a program and returns the value of its last statement.
///
/// The whole source is parsed before anything is evaluated, so a syntax error
/// never produces partial output. Evaluation uses a fresh context and sends
/// every printed line to `output`. It stops at the first runtime error;
/// lines printed before the failing statement have already been emitted.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use matlang::{interpreter::value::core::Value, run};
///
/// let mut lines: Vec<String> = Vec::new();
/// let source = "matrix A = [[1, 2, 3], [4, 5, 6]];
///               matrix B = [[7, 8, 9], [10, 11, 12]];
///               print(dot(A, B));";
///
/// let result = run(source, &mut lines).unwrap();
/// assert_eq!(result, Some(Value::from(217_i64)));
/// assert_eq!(lines.last().unwrap(), "217");
///
/// // 'z' is not defined
/// assert!(run("print(z);", &mut Vec::<String>::new()).is_err());
/// ```
pub fn run(source: &str, output: &mut dyn PrintChannel) -> Result<Option<Value>, Error> {
    let program = parse(source)?;
    let mut context = Context::new(output);

    Ok(context.eval_program(&program)?)
}
