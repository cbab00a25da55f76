/// Errors produced while turning source text into tokens.
///
/// Both variants are fatal: the lexer does not try to resynchronize after
/// reporting one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A string literal reached the end of the source before its closing
    /// quote.
    #[error("Line {line}: unterminated string literal starting at offset {position}.")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        position: usize,
        /// The source line where the literal starts.
        line:     usize,
    },
    /// A character that does not start any token.
    #[error("Line {line}: unknown token '{text}' at offset {position}.")]
    UnknownToken {
        /// The offending text.
        text:     String,
        /// Byte offset of the lexer cursor when the character was read.
        position: usize,
        /// The source line of the character.
        line:     usize,
    },
}
