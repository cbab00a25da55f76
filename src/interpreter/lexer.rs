use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Every word the lexer classifies as a keyword rather than an identifier.
///
/// `import` is listed here but receives its own [`TokenKind::Import`] kind.
pub const KEYWORDS: &[&str] = &["if", "while", "func", "return", "end", "true", "false", "null",
                                "print", "input", "var", "let", "const", "break", "continue",
                                "import", "export", "loop"];

/// The category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A reserved word such as `if` or `print`.
    Keyword,
    /// A name that is not a keyword.
    Identifier,
    /// A number literal such as `42` or `1.5`.
    Number,
    /// A string literal; the token text holds the unescaped contents.
    String,
    /// An operator or punctuation symbol such as `==` or `;`.
    Symbol,
    /// The `import` keyword.
    Import,
    /// Produced once the source is exhausted, and on every call after that.
    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Keyword | Self::Import => "keyword",
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::Symbol => "symbol",
            Self::EndOfInput => "end of input",
        };
        f.write_str(name)
    }
}

/// A lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// For strings, `text` holds the contents with escapes already translated and
/// without the surrounding quotes; for every other kind it is the exact source
/// slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// The token's text.
    pub text:     String,
    /// Byte offset of the first character of the token.
    pub position: usize,
    /// 1-based source line of the first character of the token.
    pub line:     usize,
}

impl Token {
    /// Returns `true` if this token is the keyword `word`.
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == word
    }

    /// Returns `true` if this token is the symbol `symbol`.
    #[must_use]
    pub fn is_symbol(&self, symbol: &str) -> bool {
        self.kind == TokenKind::Symbol && self.text == symbol
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "end of input"),
            TokenKind::String => write!(f, "string {:?}", self.text),
            kind => write!(f, "{kind} '{}'", self.text),
        }
    }
}

/// State carried alongside the generated lexer.
#[derive(Default, Debug)]
pub struct LexerExtras {
    /// Current source line, starting at 1.
    pub line: usize,
}

/// Failure reported by the generated lexer for a single lexeme.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum LexFailure {
    /// No rule matched the input at the cursor.
    #[default]
    Unrecognized,
    /// A string literal ran into the end of the source.
    UnterminatedString,
}

/// Raw lexemes recognized by the generated state machine.
///
/// These are folded into [`Token`]s by [`Lexer::next_token`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFailure)]
enum Lexeme {
    /// Spaces, tabs, carriage returns and form feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// `\n`
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// `// Comments.`
    #[token("//", line_comment)]
    Comment,
    /// `/* Block comments. */`
    #[token("/*", block_comment)]
    BlockComment,
    /// `"text"` or `'text'`
    #[token("\"", lex_string)]
    #[token("'", lex_string)]
    String(String),
    /// `42`, `3.14` or `1.`
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Number,
    /// Keywords and identifiers; told apart by [`KEYWORDS`].
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,
    /// Operators and punctuation.
    #[token("==")]
    #[token("!=")]
    #[token("<=")]
    #[token(">=")]
    #[token("&&")]
    #[token("||")]
    #[token("=")]
    #[token(";")]
    #[token(".")]
    #[token(",")]
    #[token(":")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("/")]
    #[token("%")]
    #[token("<")]
    #[token(">")]
    #[token("!")]
    #[token("(")]
    #[token(")")]
    #[token("{")]
    #[token("}")]
    #[token("[")]
    #[token("]")]
    #[token("&")]
    #[token("|")]
    Symbol,
}

/// Skips the rest of a `//` comment, leaving the newline for the line counter.
fn line_comment(lex: &mut logos::Lexer<Lexeme>) -> logos::Skip {
    let length = lex.remainder().find('\n').unwrap_or(lex.remainder().len());
    lex.bump(length);
    logos::Skip
}

/// Skips a `/* ... */` comment. An unterminated comment swallows the rest of
/// the source.
fn block_comment(lex: &mut logos::Lexer<Lexeme>) -> logos::Skip {
    let length = lex.remainder()
                    .find("*/")
                    .map_or(lex.remainder().len(), |end| end + 2);
    let newlines = lex.remainder()[..length].matches('\n').count();
    lex.bump(length);
    lex.extras.line += newlines;
    logos::Skip
}

/// Outcome of scanning the body of a string literal.
struct ScannedString {
    /// Unescaped contents, or `None` if the closing quote was never found.
    contents: Option<String>,
    /// Bytes consumed after the opening quote, closing quote included.
    consumed: usize,
    /// Newlines crossed while scanning.
    newlines: usize,
}

/// Scans `rest` up to the closing `quote`, translating `\\`, `\n`, `\t` and an
/// escaped quote. Other escapes are kept as written.
fn scan_string(rest: &str, quote: char) -> ScannedString {
    let mut contents = String::new();
    let mut newlines = 0;
    let mut chars = rest.char_indices();

    while let Some((offset, c)) = chars.next() {
        if c == '\n' {
            newlines += 1;
        }
        match c {
            '\\' => match chars.next() {
                Some((_, 'n')) => contents.push('\n'),
                Some((_, 't')) => contents.push('\t'),
                Some((_, '\\')) => contents.push('\\'),
                Some((_, escaped)) if escaped == quote => contents.push(escaped),
                Some((_, other)) => {
                    if other == '\n' {
                        newlines += 1;
                    }
                    contents.push('\\');
                    contents.push(other);
                },
                None => break,
            },
            c if c == quote => {
                return ScannedString { contents: Some(contents),
                                       consumed: offset + c.len_utf8(),
                                       newlines };
            },
            c => contents.push(c),
        }
    }

    ScannedString { contents: None,
                    consumed: rest.len(),
                    newlines }
}

fn lex_string(lex: &mut logos::Lexer<Lexeme>) -> Result<String, LexFailure> {
    let quote = if lex.slice() == "'" { '\'' } else { '"' };
    let scanned = scan_string(lex.remainder(), quote);

    lex.bump(scanned.consumed);
    lex.extras.line += scanned.newlines;

    scanned.contents.ok_or(LexFailure::UnterminatedString)
}

/// Pull-based tokenizer over a complete source text.
///
/// Tokens are produced one at a time by [`Lexer::next_token`]; the cursor only
/// moves forward. Once the source is exhausted every further call returns an
/// [`TokenKind::EndOfInput`] token.
///
/// # Example
/// ```
/// use luna::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x == 'a\\n'");
///
/// let name = lexer.next_token().unwrap();
/// assert_eq!(name.kind, TokenKind::Identifier);
///
/// let equals = lexer.next_token().unwrap();
/// assert!(equals.is_symbol("=="));
///
/// let string = lexer.next_token().unwrap();
/// assert_eq!(string.text, "a\n");
///
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
/// ```
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Lexeme>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Lexeme::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }

    /// Reads the next token.
    ///
    /// Whitespace and comments are skipped first. Keywords and identifiers are
    /// told apart here, with `import` receiving its own kind.
    ///
    /// # Errors
    /// - `UnterminatedString` if a string literal reaches the end of the source.
    /// - `UnknownToken` if the cursor sits on a character no rule accepts.
    pub fn next_token(&mut self) -> LexResult<Token> {
        let Some(lexeme) = self.inner.next() else {
            return Ok(Token { kind:     TokenKind::EndOfInput,
                              text:     String::new(),
                              position: self.inner.source().len(),
                              line:     self.inner.extras.line, });
        };

        let position = self.inner.span().start;
        let slice = self.inner.slice();
        // Strings and comments move the line counter past their own newlines.
        let line = self.inner.extras.line - slice.matches('\n').count();

        let (kind, text) = match lexeme {
            Ok(Lexeme::String(contents)) => (TokenKind::String, contents),
            Ok(Lexeme::Number) => (TokenKind::Number, slice.to_string()),
            Ok(Lexeme::Word) if slice == "import" => (TokenKind::Import, slice.to_string()),
            Ok(Lexeme::Word) if KEYWORDS.contains(&slice) => {
                (TokenKind::Keyword, slice.to_string())
            },
            Ok(Lexeme::Word) => (TokenKind::Identifier, slice.to_string()),
            Ok(Lexeme::Symbol) => (TokenKind::Symbol, slice.to_string()),
            Ok(Lexeme::Ignored | Lexeme::NewLine | Lexeme::Comment | Lexeme::BlockComment) => {
                return self.next_token();
            },
            Err(LexFailure::UnterminatedString) => {
                return Err(LexError::UnterminatedString { position, line });
            },
            Err(LexFailure::Unrecognized) => {
                return Err(LexError::UnknownToken { text: slice.to_string(),
                                                    position,
                                                    line });
            },
        };

        Ok(Token { kind,
                   text,
                   position,
                   line })
    }
}

/// Collects every token of `source`, ending with the first
/// [`TokenKind::EndOfInput`].
///
/// # Errors
/// Returns the first lexical error encountered.
///
/// # Example
/// ```
/// use luna::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("1.2.3").unwrap();
/// let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
///
/// assert_eq!(texts, ["1.2", ".", "3", ""]);
/// assert_eq!(tokens[3].kind, TokenKind::EndOfInput);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
