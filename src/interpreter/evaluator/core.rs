use tracing::trace;

use crate::{
    ast::{Expr, MatrixLiteral, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{environment::Environment, output::PrintChannel},
        value::{core::Value, matrix::Matrix, number::Number},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for one program run: the variable
/// environment and the channel printed lines are sent to.
///
/// ## Usage
///
/// Create one `Context` per run and drop it when the run ends. Evaluating two
/// independent programs on the same context lets bindings from the first leak
/// into the second.
pub struct Context<'out> {
    /// The variable bindings of this run.
    pub environment: Environment,
    output:          &'out mut dyn PrintChannel,
}

impl<'out> Context<'out> {
    /// Creates a new evaluation context with an empty environment that prints
    /// to `output`.
    #[must_use]
    pub fn new(output: &'out mut dyn PrintChannel) -> Self {
        Self { environment: Environment::new(),
               output }
    }

    /// Evaluates every statement of a program in source order.
    ///
    /// Evaluation stops at the first failing statement and returns its error.
    /// Lines already printed by earlier statements stay printed.
    ///
    /// # Returns
    /// The value of the last statement, or `None` for an empty program.
    ///
    /// # Example
    /// ```
    /// use matlang::{
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    ///     parse,
    /// };
    ///
    /// let program = parse("matrix A = [[1, 2], [3, 4]]; print(det(A));").unwrap();
    ///
    /// let mut lines: Vec<String> = Vec::new();
    /// let mut context = Context::new(&mut lines);
    /// let result = context.eval_program(&program).unwrap();
    ///
    /// assert_eq!(result, Some(Value::from(-2_i64)));
    /// drop(context);
    /// assert_eq!(lines.last().unwrap(), "-2");
    /// ```
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn eval_program(&mut self, program: &Program) -> EvalResult<Option<Value>> {
        let mut result = None;

        for statement in &program.statements {
            result = Some(self.eval_statement(statement)?);
        }

        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// Declarations and assignments bind their value and report the binding
    /// on the print channel. Print statements emit the value itself. Bare
    /// expressions are evaluated silently.
    ///
    /// # Returns
    /// The value the statement evaluated to.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        trace!(line = statement.line_number(), "evaluating statement");

        match statement {
            Statement::MatrixDeclaration { name, value, .. } => {
                let value = self.eval(value)?;
                self.environment.declare_or_assign(name, value.clone());
                self.emit(&format!("Matrix '{name}' defined: {value:#}"));
                Ok(value)
            },
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.environment.declare_or_assign(name, value.clone());
                self.emit(&format!("Variable '{name}' assigned: {value:#}"));
                Ok(value)
            },
            Statement::Print { expr, .. } => {
                let value = self.eval(expr)?;
                self.emit(&format!("{value:#}"));
                Ok(value)
            },
            Statement::Expression { expr, .. } => self.eval(expr),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// The evaluator dispatches based on expression variant: function calls,
    /// elementwise binary operations, matrix literals, identifiers and
    /// numeric literals.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line),
            Expr::Binary { left,
                           op,
                           right,
                           line, } => self.eval_binary_op(left, *op, right, *line),
            Expr::MatrixLiteral(literal) => Self::eval_matrix_literal(literal),
            Expr::Identifier { name, line } => self.environment.lookup(name, *line).cloned(),
            Expr::Number { value, .. } => Ok(Value::Scalar((*value).into())),
        }
    }

    /// Builds a matrix from a literal, rejecting rows of unequal length.
    fn eval_matrix_literal(literal: &MatrixLiteral) -> EvalResult<Value> {
        let rows: Vec<Vec<Number>> = literal.rows
                                            .iter()
                                            .map(|row| {
                                                row.elements.iter().copied().map(Number::from).collect()
                                            })
                                            .collect();

        Ok(Value::Matrix(Matrix::from_rows(rows, literal.line)?))
    }

    fn emit(&mut self, line: &str) {
        self.output.emit(line);
    }
}
