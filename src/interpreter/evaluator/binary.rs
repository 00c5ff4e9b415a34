/// Dispatch of binary expressions to their implementation.
pub mod core;
/// Elementwise addition and subtraction.
///
/// Operands must have identical shapes. Two single-cell operands combine into
/// a plain scalar.
pub mod elementwise;
