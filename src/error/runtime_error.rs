use crate::interpreter::shape::Shape;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Referenced a variable that has not been bound yet.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A matrix literal has rows of different lengths.
    IrregularMatrix {
        /// Index of the first row whose length differs from row 0.
        row:      usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        /// The operation that rejected its operands (`dot`, `matmul`, `+`, ...).
        operation: &'static str,
        /// What was required and what was received.
        details:   String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// The operation is only defined for a fixed shape the operand lacks.
    UnsupportedShape {
        /// The operation that rejected its operand.
        operation: &'static str,
        /// The shape that was received.
        shape:     Shape,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// Tried to invert a matrix whose determinant is zero.
    SingularMatrix {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that does not exist.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of operands was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The number of operands the function takes.
        expected: usize,
        /// The number of operands supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer was too large to be promoted to a real without loss.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::IrregularMatrix { row,
                                    expected,
                                    found,
                                    line, } => write!(f,
                                                      "Error on line {line}: Irregular matrix: row 0 has {expected} elements but row {row} has {found}."),
            Self::DimensionMismatch { operation,
                                      details,
                                      line, } => {
                write!(f, "Error on line {line}: Dimension mismatch in {operation}: {details}.")
            },
            Self::UnsupportedShape { operation,
                                     shape,
                                     line, } => write!(f,
                                                       "Error on line {line}: {operation} is only supported for 2x2 matrices, found {shape}."),
            Self::SingularMatrix { line } => {
                write!(f, "Error on line {line}: Matrix is singular and has no inverse.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: '{name}' takes {expected} operand(s) but {found} were given."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::LiteralTooLarge { line } => write!(f,
                                                     "Error on line {line}: Integer is too large to be converted to a real number."),
        }
    }
}

impl std::error::Error for RuntimeError {}
