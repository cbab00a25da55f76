/// Lexical errors.
///
/// Raised by the lexer when the source text cannot be split into tokens, such
/// as a string literal that never closes or a character outside the language's
/// alphabet.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree:
/// missing terminators, unexpected tokens, misplaced `break` or `return`
/// statements and imports of modules that do not exist.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unknown names, calls to values that are not functions, runaway recursion
/// and failures of the input/output collaborators.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure that aborts a Luna run.
///
/// Each stage of the pipeline reports its own error type; this enum unifies
/// them so a host only has to handle one result. Lexical errors raised while
/// the parser pulls tokens are surfaced as [`Error::Lex`], not wrapped inside
/// [`Error::Parse`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Lex(LexError),
    /// The token stream did not match the grammar.
    #[error(transparent)]
    Parse(ParseError),
    /// Evaluation of the parsed program failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// The program finished but its output could not be flushed to the host.
    #[error("failed to flush output: {details}.")]
    Flush {
        /// The underlying I/O error message.
        details: String,
    },
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::Lex(inner) => Self::Lex(inner),
            other => Self::Parse(other),
        }
    }
}
