/// Parser state, the program entry point and expression parsing.
///
/// Holds the [`core::Parser`] that pulls tokens from the lexer one at a time,
/// and the `parse` convenience function.
pub mod core;

/// Compound statements with bodies.
///
/// Parses `if`, `while`, `loop` and `func`, and tracks the enclosing loop and
/// function contexts that `break` and `return` are validated against.
pub mod block;

/// Simple statements.
///
/// Dispatches on the leading token and parses declarations, `print`,
/// `import`, `export`, `break`, `return` and expression statements.
pub mod statement;

/// Token matching helpers shared by all productions.
pub mod utils;
