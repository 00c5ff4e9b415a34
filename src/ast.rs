/// Represents a numeric literal as written in the source.
///
/// The lexical form decides the kind: a literal containing a decimal point is
/// a `Real`, anything else is an `Integer`. The evaluator keeps that kind
/// instead of normalizing every number to floating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// The root of a parsed program.
///
/// Statements are kept in source order; the evaluator visits them one at a
/// time and stops at the first failure.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements.
    pub statements: Vec<Statement>,
}

/// Represents a top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A matrix declaration such as `matrix A = [[1, 2], [3, 4]];`.
    MatrixDeclaration {
        /// The name being declared.
        name:  String,
        /// The value bound to the name.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A variable assignment such as `x = dot(A, B);`.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A print statement such as `print(x);`.
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::MatrixDeclaration { line, .. }
            | Self::Assignment { line, .. }
            | Self::Print { line, .. }
            | Self::Expression { line, .. } => *line,
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Function call expression (e.g. `dot(A, B)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Operands of the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// An elementwise binary operation (`A + B`, `A - B`).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A matrix literal such as `[[1, 2], [3, 4]]`.
    MatrixLiteral(MatrixLiteral),
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A numeric literal.
    Number {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use matlang::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "A".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::FunctionCall { line, .. }
            | Self::Binary { line, .. }
            | Self::Identifier { line, .. }
            | Self::Number { line, .. } => *line,
            Self::MatrixLiteral(literal) => literal.line,
        }
    }
}

/// A bracketed matrix literal.
///
/// `[]` has no rows. `[[]]` has one row without elements.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixLiteral {
    /// The rows, in source order.
    pub rows: Vec<Row>,
    /// Line number of the opening bracket.
    pub line: usize,
}

/// One row of a matrix literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// The numeric entries, in source order.
    pub elements: Vec<LiteralValue>,
    /// Line number of the opening bracket.
    pub line:     usize,
}

/// Represents an elementwise binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
        };
        write!(f, "{operator}")
    }
}
