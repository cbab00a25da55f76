use std::mem;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_, '_> {
    /// Consumes the current token and pulls the next one from the lexer.
    ///
    /// # Returns
    /// The token that was current before the call.
    ///
    /// # Errors
    /// Propagates lexical errors raised while reading the next token.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> ParseResult<Token> {
        let next = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it is the symbol `symbol`.
    ///
    /// # Returns
    /// `true` if the symbol was present and consumed.
    pub(in crate::interpreter::parser) fn eat_symbol(&mut self, symbol: &str) -> ParseResult<bool> {
        if self.current.is_symbol(symbol) {
            self.advance()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes the symbol `symbol` or fails with `ExpectedToken`.
    pub(in crate::interpreter::parser) fn expect_symbol(&mut self, symbol: &str) -> ParseResult<()> {
        if self.eat_symbol(symbol)? {
            return Ok(());
        }
        Err(self.unexpected(&format!("'{symbol}'")))
    }

    /// Consumes the keyword `keyword` or fails with `ExpectedKeyword`.
    pub(in crate::interpreter::parser) fn expect_keyword(&mut self,
                                                         keyword: &'static str)
                                                         -> ParseResult<()> {
        if self.current.is_keyword(keyword) {
            self.advance()?;
            return Ok(());
        }
        Err(ParseError::ExpectedKeyword { expected: keyword,
                                          found:    self.current.to_string(),
                                          line:     self.current.line, })
    }

    /// Parses a plain identifier and returns its name.
    ///
    /// Keywords are not identifiers, so `let if = 1;` fails here.
    ///
    /// # Errors
    /// `ExpectedToken` if the current token is not an identifier.
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self) -> ParseResult<String> {
        if self.current.kind == TokenKind::Identifier {
            return Ok(self.advance()?.text);
        }
        Err(self.unexpected("an identifier"))
    }

    /// Builds an `ExpectedToken` error describing the current token.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::ExpectedToken { expected: expected.to_string(),
                                    found:    self.current.to_string(),
                                    line:     self.current.line, }
    }
}
