use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::{
            binary::elementwise,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context<'_> {
    /// Evaluates both operands of a binary expression, left first, and
    /// applies the operator.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The operator.
    /// - `right`: Right operand expression.
    /// - `line`: Line number for error reporting.
    pub fn eval_binary_op(&self,
                          left: &Expr,
                          op: BinaryOperator,
                          right: &Expr,
                          line: usize)
                          -> EvalResult<Value> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;

        Self::eval_binary(op, &left, &right, line)
    }

    /// Applies a binary operator to two evaluated operands.
    ///
    /// # Example
    /// ```
    /// use matlang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add, &Value::from(2_i64), &Value::from(3_i64), 1);
    /// assert_eq!(sum.unwrap(), Value::from(5_i64));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        match op {
            BinaryOperator::Add => elementwise::add(left, right, line),
            BinaryOperator::Sub => elementwise::sub(left, right, line),
        }
    }
}
