/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unexpected tokens, missing delimiters, reserved identifiers and
/// literals that do not fit the numeric types.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating a program:
/// undefined variables, irregular matrix literals, shape mismatches, singular
/// matrices and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The failure type returned by the top level entry points.
///
/// A program run fails either while being parsed or while being evaluated.
/// Both phases abort on their first error, so a run carries at most one.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The source text could not be turned into a syntax tree.
    Parse(ParseError),
    /// A statement failed while the program was being evaluated.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
