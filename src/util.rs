/// Numeric conversion helpers.
///
/// Integer entries are promoted to `f64` whenever they meet a real operand or
/// take part in a division. These helpers make that promotion lossless or
/// report it as an error instead of silently rounding.
pub mod num;
