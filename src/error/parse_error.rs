use crate::error::LexError;

/// Represents all errors that can occur while parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A specific symbol, identifier or expression was required but something
    /// else was found.
    #[error("Line {line}: expected {expected}, found {found}.")]
    ExpectedToken {
        /// Description of what the grammar required, e.g. `';'`.
        expected: String,
        /// Description of the token that was actually read.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A keyword (such as the `end` closing a block) was required but
    /// something else was found.
    #[error("Line {line}: expected keyword '{expected}', found {found}.")]
    ExpectedKeyword {
        /// The keyword the grammar required.
        expected: &'static str,
        /// Description of the token that was actually read.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// `break` was used outside of any `while` or `loop` body.
    #[error("Line {line}: 'break' outside of a loop.")]
    BreakOutsideLoop {
        /// The source line of the `break`.
        line: usize,
    },
    /// `return` was used outside of any function body.
    #[error("Line {line}: 'return' outside of a function.")]
    ReturnOutsideFunction {
        /// The source line of the `return`.
        line: usize,
    },
    /// An `import` named a module that the resolver could not find.
    #[error("Line {line}: module not found: '{module}'.")]
    ModuleNotFound {
        /// The module identifier.
        module: String,
        /// The source line of the import.
        line:   usize,
    },
    /// A number literal could not be represented as a floating-point value.
    #[error("Line {line}: invalid number literal '{literal}'.")]
    InvalidNumber {
        /// The literal as written in the source.
        literal: String,
        /// The source line of the literal.
        line:    usize,
    },
    /// Statements were nested inside one another more deeply than the
    /// configured limit.
    #[error("Line {line}: statements nested more than {limit} deep.")]
    NestingTooDeep {
        /// The configured limit.
        limit: usize,
        /// The source line of the statement that went over the limit.
        line:  usize,
    },
    /// The lexer failed while the parser was pulling the next token.
    #[error(transparent)]
    Lex(#[from] LexError),
}
