use std::mem;

use crate::{
    ast::{FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_, '_> {
    /// Parses `if <condition> <statement> end`.
    ///
    /// # Errors
    /// `ExpectedKeyword` if the body is not followed by `end`.
    pub(in crate::interpreter::parser) fn parse_if(&mut self) -> ParseResult<Statement> {
        let line = self.advance()?.line;

        let condition = self.parse_expression()?;
        let body = Box::new(self.parse_statement()?);
        self.expect_keyword("end")?;

        Ok(Statement::If { condition,
                           body,
                           line })
    }

    /// Parses `while <condition> <statement> end`.
    ///
    /// The body is parsed inside a `while` loop context so it may `break`.
    pub(in crate::interpreter::parser) fn parse_while(&mut self) -> ParseResult<Statement> {
        let line = self.advance()?.line;

        let condition = self.parse_expression()?;

        self.loops += 1;
        let body = self.parse_statement();
        self.loops -= 1;
        let body = Box::new(body?);

        self.expect_keyword("end")?;

        Ok(Statement::While { condition,
                              body,
                              line })
    }

    /// Parses `loop <statement>* end`.
    ///
    /// Statements are read until the closing `end`. Every statement is parsed
    /// inside a `loop` context so it may `break`.
    ///
    /// # Errors
    /// `ExpectedKeyword` if the input ends before `end`.
    pub(in crate::interpreter::parser) fn parse_loop(&mut self) -> ParseResult<Statement> {
        let line = self.advance()?.line;

        self.loops += 1;
        let body = self.parse_loop_body();
        self.loops -= 1;

        Ok(Statement::Loop { body: body?,
                             line })
    }

    fn parse_loop_body(&mut self) -> ParseResult<Vec<Statement>> {
        let mut body = Vec::new();

        while !self.current.is_keyword("end") {
            if self.current.kind == TokenKind::EndOfInput {
                return Err(ParseError::ExpectedKeyword { expected: "end",
                                                         found:    self.current.to_string(),
                                                         line:     self.current.line, });
            }
            body.push(self.parse_statement()?);
        }
        self.advance()?;

        Ok(body)
    }

    /// Parses `func <name> <statement> end`.
    ///
    /// A function body starts with no enclosing loops: a `break` inside it
    /// must belong to a loop inside the same body. `return` is permitted.
    ///
    /// # Errors
    /// - `ExpectedToken` if the name is missing.
    /// - `ExpectedKeyword` if the body is not followed by `end`.
    pub(in crate::interpreter::parser) fn parse_function_declaration(&mut self)
                                                                     -> ParseResult<Statement> {
        let line = self.advance()?.line;
        let name = self.parse_identifier()?;

        let enclosing_loops = mem::take(&mut self.loops);
        self.functions += 1;
        let body = self.parse_statement();
        self.functions -= 1;
        self.loops = enclosing_loops;
        let body = Box::new(body?);

        self.expect_keyword("end")?;

        Ok(Statement::FunctionDeclaration(FunctionDef { name, body, line }))
    }
}
