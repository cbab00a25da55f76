/// Core evaluation logic and context management.
///
/// Contains the runtime [`core::Context`], the control-flow signal returned by
/// statements and the dispatch over statement and expression kinds.
pub mod core;

/// The scope arena.
///
/// Frames of variable and function bindings addressed by index, each linked to
/// its parent frame for lexical lookup.
pub mod scope;

/// Evaluation of `while` and `loop` statements.
///
/// Runs loop bodies in fresh block scopes and catches the `break` signal.
pub mod loops;

/// Function evaluation.
///
/// Handles user-defined and builtin function calls and the `print` statement.
pub mod function;

/// Utility functions for evaluation.
///
/// Literal and name evaluation, and the block runner shared by `if`, `while`
/// and `loop`.
pub mod utils;
