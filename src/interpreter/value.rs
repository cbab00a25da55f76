/// Runtime values and closures.
///
/// Defines the `Value` enum produced by evaluating expressions, the
/// `Closure` pairing a function declaration with its defining scope, the
/// truthiness rule used by `if` and `while`, and the textual form written by
/// `print`.
pub mod core;
