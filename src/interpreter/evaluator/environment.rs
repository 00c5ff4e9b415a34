use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Maps variable names to their current values.
///
/// One environment lives for exactly one program run. Names may be bound any
/// number of times; the last binding wins.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: HashMap<String, Value>,
}

impl Environment {
    /// Creates an environment without bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn declare_or_assign(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Returns the value bound to `name`.
    ///
    /// # Example
    /// ```
    /// use matlang::{
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::environment::Environment, value::core::Value},
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.declare_or_assign("x", Value::from(1_i64));
    /// env.declare_or_assign("x", Value::from(2_i64));
    /// assert_eq!(env.lookup("x", 1).unwrap(), &Value::from(2_i64));
    ///
    /// assert!(matches!(env.lookup("z", 3),
    ///                  Err(RuntimeError::UndefinedVariable { line: 3, .. })));
    /// ```
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<&Value> {
        self.bindings
            .get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }
}
