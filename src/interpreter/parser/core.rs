use tracing::debug;

use crate::{
    ast::{Expr, LiteralValue, Program},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        module::ModuleResolver,
    },
    settings::DEFAULT_MAX_NESTING_DEPTH,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over a pull-based [`Lexer`].
///
/// The parser keeps exactly one token of lookahead in `current` and asks the
/// lexer for the next one only when a production consumes it. Parsing stops at
/// the first error; there is no recovery and no partial program.
pub struct Parser<'src, 'r> {
    pub(in crate::interpreter::parser) lexer:     Lexer<'src>,
    pub(in crate::interpreter::parser) current:   Token,
    /// Number of `while` and `loop` bodies enclosing the statement being
    /// parsed, counted from the innermost function body.
    pub(in crate::interpreter::parser) loops:     usize,
    /// Number of function bodies enclosing the statement being parsed.
    pub(in crate::interpreter::parser) functions: usize,
    /// Number of statements currently being parsed, one inside the other.
    pub(in crate::interpreter::parser) depth:     usize,
    pub(in crate::interpreter::parser) max_depth: usize,
    pub(in crate::interpreter::parser) resolver:  &'r dyn ModuleResolver,
}

impl<'src, 'r> Parser<'src, 'r> {
    /// Creates a parser and reads the first token.
    ///
    /// # Parameters
    /// - `source`: Complete program text.
    /// - `resolver`: Answers whether the modules named by `import` exist.
    ///
    /// # Errors
    /// Returns a lexical error if the very first token cannot be read.
    pub fn new(source: &'src str, resolver: &'r dyn ModuleResolver) -> ParseResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;

        Ok(Self { lexer,
                  current,
                  loops: 0,
                  functions: 0,
                  depth: 0,
                  max_depth: DEFAULT_MAX_NESTING_DEPTH,
                  resolver })
    }

    /// Sets how deeply statements may be nested before parsing fails with
    /// `NestingTooDeep`.
    #[must_use]
    pub fn with_max_nesting_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses statements until the end of input.
    ///
    /// Grammar: `program := statement* EndOfInput`
    ///
    /// # Returns
    /// The complete [`Program`].
    pub fn parse_program(mut self) -> ParseResult<Program> {
        let mut statements = Vec::new();

        while self.current.kind != TokenKind::EndOfInput {
            statements.push(self.parse_statement()?);
        }

        debug!(statements = statements.len(), "parsed program");
        Ok(Program { statements })
    }

    /// Parses a single expression.
    ///
    /// Grammar:
    /// ```text
    ///     expression := "true" | "false" | "null" | NUMBER | STRING
    ///                 | "input" [ "(" ")" ]
    ///                 | IDENT [ "(" ")" ]
    /// ```
    /// An identifier followed by `()` is a call; a bare identifier is a name
    /// lookup. `input` is always a call to the builtin of that name.
    ///
    /// # Returns
    /// The parsed expression node.
    ///
    /// # Errors
    /// - `ExpectedToken` if the current token cannot start an expression, or if
    ///   a call's `(` is not followed by `)`.
    /// - `InvalidNumber` if a number literal does not fit in a finite `f64`.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        let line = self.current.line;

        let value = match self.current.kind {
            TokenKind::Number => {
                let literal = self.advance()?.text;
                // Overflowing literals parse as infinity instead of failing.
                match literal.parse::<f64>() {
                    Ok(number) if number.is_finite() => LiteralValue::Number(number),
                    _ => return Err(ParseError::InvalidNumber { literal, line }),
                }
            },
            TokenKind::String => LiteralValue::String(self.advance()?.text),
            TokenKind::Keyword => match self.current.text.as_str() {
                "true" => {
                    self.advance()?;
                    LiteralValue::Bool(true)
                },
                "false" => {
                    self.advance()?;
                    LiteralValue::Bool(false)
                },
                "null" => {
                    self.advance()?;
                    LiteralValue::Null
                },
                "input" => {
                    let name = self.advance()?.text;
                    if self.eat_symbol("(")? {
                        self.expect_symbol(")")?;
                    }
                    return Ok(Expr::Call { name, line });
                },
                _ => return Err(self.unexpected("an expression")),
            },
            TokenKind::Identifier => {
                let name = self.advance()?.text;
                if self.eat_symbol("(")? {
                    self.expect_symbol(")")?;
                    return Ok(Expr::Call { name, line });
                }
                return Ok(Expr::Identifier { name, line });
            },
            _ => return Err(self.unexpected("an expression")),
        };

        Ok(Expr::Literal { value, line })
    }
}

/// Parses a complete program.
///
/// # Parameters
/// - `source`: Program text.
/// - `resolver`: Answers whether the modules named by `import` exist.
///
/// # Returns
/// The parsed [`Program`], or the first lexical or grammatical error.
///
/// # Example
/// ```
/// use luna::{
///     ast::{Expr, LiteralValue, Statement},
///     interpreter::parser::core::parse,
/// };
///
/// let no_modules = |_: &str| false;
/// let program = parse("var x = 5; print x;", &no_modules).unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// assert_eq!(program.statements[0],
///            Statement::Var { name:  "x".into(),
///                             value: Expr::Literal { value: LiteralValue::Number(5.0),
///                                                    line:  1, },
///                             line:  1, });
/// ```
pub fn parse(source: &str, resolver: &dyn ModuleResolver) -> ParseResult<Program> {
    Parser::new(source, resolver)?.parse_program()
}
