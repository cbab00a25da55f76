use tracing::info;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_, '_> {
    /// Parses a single statement.
    ///
    /// The statement kind is decided by the current token:
    /// - `if`, `while`, `loop` and `func` start compound statements.
    /// - `import`, `export`, `let`, `var`, `print`, `break` and `return` start
    ///   simple statements.
    /// - anything else is parsed as an expression statement.
    ///
    /// # Returns
    /// A parsed [`Statement`] node.
    ///
    /// # Errors
    /// `NestingTooDeep` if the statement would sit deeper inside other
    /// statements than the configured limit allows.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep { limit: self.max_depth,
                                                    line:  self.current.line, });
        }

        self.depth += 1;
        let statement = self.parse_statement_kind();
        self.depth -= 1;

        statement
    }

    fn parse_statement_kind(&mut self) -> ParseResult<Statement> {
        if self.current.kind == TokenKind::Import {
            return self.parse_import();
        }
        if self.current.kind != TokenKind::Keyword {
            return self.parse_expression_statement();
        }

        match self.current.text.as_str() {
            "if" => self.parse_if(),
            "while" => self.parse_while(),
            "loop" => self.parse_loop(),
            "func" => self.parse_function_declaration(),
            "export" => self.parse_export(),
            "let" | "var" => self.parse_declaration(),
            "print" => self.parse_print(),
            "break" => self.parse_break(),
            "return" => self.parse_return(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <name> = <expr>;` or `var <name> = <expr>;`.
    ///
    /// The two forms differ only in the node they produce.
    ///
    /// # Errors
    /// - `ExpectedToken` if the name, `=` or the terminating `;` is missing.
    fn parse_declaration(&mut self) -> ParseResult<Statement> {
        let keyword = self.advance()?;
        let line = keyword.line;

        let name = self.parse_identifier()?;
        self.expect_symbol("=")?;
        let value = self.parse_expression()?;
        self.expect_symbol(";")?;

        if keyword.text == "let" {
            Ok(Statement::Let { name, value, line })
        } else {
            Ok(Statement::Var { name, value, line })
        }
    }

    /// Parses `print <expr>;`.
    fn parse_print(&mut self) -> ParseResult<Statement> {
        let line = self.advance()?.line;

        let expr = self.parse_expression()?;
        self.expect_symbol(";")?;

        Ok(Statement::Print { expr, line })
    }

    /// Parses `import <module>` with an optional trailing `;`.
    ///
    /// The module resolver is asked whether the module exists as soon as the
    /// name is read, so a missing module aborts the parse before anything runs.
    /// A found module only produces a log event; no names are bound.
    ///
    /// # Errors
    /// - `ExpectedToken` if the module name is missing.
    /// - `ModuleNotFound` if the resolver does not know the module.
    fn parse_import(&mut self) -> ParseResult<Statement> {
        let line = self.advance()?.line;
        let module = self.parse_identifier()?;

        if !self.resolver.module_exists(&module) {
            return Err(ParseError::ModuleNotFound { module, line });
        }
        info!(module = %module, line, "module found");

        self.eat_symbol(";")?;
        Ok(Statement::Import { module, line })
    }

    /// Parses `export <name>;`.
    fn parse_export(&mut self) -> ParseResult<Statement> {
        let line = self.advance()?.line;

        let name = self.parse_identifier()?;
        self.expect_symbol(";")?;

        Ok(Statement::Export { name, line })
    }

    /// Parses `break` with an optional trailing `;`.
    ///
    /// # Errors
    /// `BreakOutsideLoop` if no `while` or `loop` body encloses the statement.
    fn parse_break(&mut self) -> ParseResult<Statement> {
        let line = self.current.line;
        if self.loops == 0 {
            return Err(ParseError::BreakOutsideLoop { line });
        }
        self.advance()?;
        self.eat_symbol(";")?;

        Ok(Statement::Break { line })
    }

    /// Parses `return <expr>;` or `return;`.
    ///
    /// # Errors
    /// - `ReturnOutsideFunction` if no function body encloses the statement.
    /// - `ExpectedToken` if the terminating `;` is missing.
    fn parse_return(&mut self) -> ParseResult<Statement> {
        let line = self.current.line;
        if self.functions == 0 {
            return Err(ParseError::ReturnOutsideFunction { line });
        }
        self.advance()?;

        if self.eat_symbol(";")? {
            return Ok(Statement::Return { value: None,
                                          line });
        }
        let value = self.parse_expression()?;
        self.expect_symbol(";")?;

        Ok(Statement::Return { value: Some(value),
                               line })
    }

    /// Parses an expression used as a statement, with an optional `;`.
    ///
    /// A bare identifier in statement position is a call: `greet` runs the
    /// function `greet`.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let line = self.current.line;

        let expr = match self.parse_expression()? {
            Expr::Identifier { name, line } => Expr::Call { name, line },
            expr => expr,
        };
        self.eat_symbol(";")?;

        Ok(Statement::Expression { expr, line })
    }
}
