/// Keywords of the language that can never name a variable.
const KEYWORDS: &[&str] = &["matrix", "print"];

/// Checks whether a name is reserved.
///
/// Keywords and builtin function names, aliases included, cannot be bound as
/// variables.
///
/// # Example
/// ```
/// use matlang::interpreter::evaluator::utils::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("det"));
/// assert!(is_reserved_identifier("matrix"));
/// assert!(!is_reserved_identifier("A"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    use crate::interpreter::evaluator::function::core::BUILTIN_FUNCTIONS;

    BUILTIN_FUNCTIONS.contains(&name) || KEYWORDS.contains(&name)
}
