use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{determinant, dot, inverse, matmul, transpose},
        },
        value::core::Value,
    },
};

/// A builtin taking a single operand.
type UnaryFn = fn(&Value, usize) -> EvalResult<Value>;
/// A builtin taking two operands.
type BinaryFn = fn(&Value, &Value, usize) -> EvalResult<Value>;

/// The implementation of a builtin, tagged by its operand count.
#[derive(Clone, Copy)]
enum Builtin {
    Unary(UnaryFn),
    Binary(BinaryFn),
}

impl Builtin {
    /// The number of operands the builtin takes.
    const fn arity(self) -> usize {
        match self {
            Self::Unary(_) => 1,
            Self::Binary(_) => 2,
        }
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry maps a string name to its implementation. The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: Builtin,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names of all builtin functions, aliases included.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "dot"         => Builtin::Binary(dot::dot),
    "matmul"      => Builtin::Binary(matmul::matmul),
    "transpose"   => Builtin::Unary(transpose::transpose),
    "determinant" => Builtin::Unary(determinant::determinant),
    "det"         => Builtin::Unary(determinant::determinant),
    "inverse"     => Builtin::Unary(inverse::inverse),
    "inv"         => Builtin::Unary(inverse::inverse),
}

impl Context<'_> {
    /// Evaluates a function call.
    ///
    /// The name is resolved against the builtin table before any operand is
    /// evaluated. Operands are then evaluated left to right and their count
    /// checked against the builtin's arity.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated operand expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup, arity or the operation
    /// itself fails.
    pub(crate) fn eval_function_call(&self,
                                     name: &str,
                                     arguments: &[Expr],
                                     line: usize)
                                     -> EvalResult<Value> {
        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.name == name)
                                   .ok_or_else(|| RuntimeError::UnknownFunction { name:
                                                                                      name.to_string(),
                                                                                  line })?;

        let operands = arguments.iter()
                                .map(|argument| self.eval(argument))
                                .collect::<EvalResult<Vec<_>>>()?;

        match (builtin.func, operands.as_slice()) {
            (Builtin::Unary(func), [operand]) => func(operand, line),
            (Builtin::Binary(func), [left, right]) => func(left, right, line),
            (func, _) => Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                                   expected: func.arity(),
                                                                   found: operands.len(),
                                                                   line }),
        }
    }
}
