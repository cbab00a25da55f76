use crate::{
    ast::{Expr, Statement},
    interpreter::evaluator::{
        core::{Context, EvalResult, Flow},
        scope::ScopeId,
    },
};

impl<'ast> Context<'ast, '_> {
    /// Executes a `while` statement.
    ///
    /// The condition is evaluated in `scope` before every iteration and the
    /// body runs in a fresh block scope each time. The loop ends when the
    /// condition is falsy or the body signals `break`. A `return` from inside
    /// the body ends the loop and is passed on to the enclosing call.
    ///
    /// # Parameters
    /// - `condition`: Expression tested before each iteration.
    /// - `body`: The repeated statement.
    /// - `scope`: Scope the loop runs in.
    ///
    /// # Example
    /// ```
    /// use luna::{get_output, settings::Settings};
    ///
    /// let source = "while 'yes' break end print 'done';";
    /// assert_eq!(get_output(source, &Settings::default()).unwrap(), "done\n");
    /// ```
    pub fn exec_while(&mut self,
                      condition: &'ast Expr,
                      body: &'ast Statement,
                      scope: ScopeId)
                      -> EvalResult<Flow<'ast>> {
        while self.eval(condition, scope)?.is_truthy() {
            match self.run_block(std::slice::from_ref(body), scope)? {
                Flow::Next => {},
                Flow::Break => break,
                signal @ Flow::Return(_) => return Ok(signal),
            }
        }
        Ok(Flow::Next)
    }

    /// Executes a `loop` statement.
    ///
    /// The body repeats unconditionally, each iteration in a fresh block
    /// scope, until it signals `break` or `return`.
    pub fn exec_loop(&mut self,
                     body: &'ast [Statement],
                     scope: ScopeId)
                     -> EvalResult<Flow<'ast>> {
        loop {
            match self.run_block(body, scope)? {
                Flow::Next => {},
                Flow::Break => return Ok(Flow::Next),
                signal @ Flow::Return(_) => return Ok(signal),
            }
        }
    }
}
