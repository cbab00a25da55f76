/// Function call dispatch.
///
/// Resolves a call to a builtin, a declared function or a variable holding a
/// function value, and runs user-defined bodies in their own scope.
pub mod core;

/// Builtin functions.
///
/// The table of functions provided by the interpreter itself, currently just
/// `input`.
pub mod builtin;

/// The `print` statement's output.
pub mod print;
