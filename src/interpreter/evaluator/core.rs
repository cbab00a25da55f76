use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::scope::{ScopeArena, ScopeId},
        value::core::{Closure, Value},
    },
    settings::DEFAULT_MAX_CALL_DEPTH,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// What a statement asks its enclosing construct to do next.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow<'ast> {
    /// Continue with the following statement.
    Next,
    /// Leave the nearest enclosing loop.
    Break,
    /// Leave the current function with the given value.
    Return(Value<'ast>),
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for one run: the scope arena, the
/// input and output collaborators, the current call depth and the names
/// exported so far.
///
/// ## Usage
///
/// `Context` borrows the program it runs for `'ast`, so closures can refer to
/// function declarations without copying them.
///
/// ```
/// use luna::interpreter::{evaluator::core::Context, parser::core::parse};
///
/// let program = parse("var x = 5; print x;", &|_: &str| false).unwrap();
///
/// let mut input = std::io::empty();
/// let mut output = Vec::new();
/// Context::new(&mut input, &mut output).run_program(&program).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "5\n");
/// ```
pub struct Context<'ast, 'io> {
    pub(in crate::interpreter::evaluator) scopes:         ScopeArena<'ast>,
    /// Lines read by the `input` builtin.
    pub(in crate::interpreter::evaluator) input:          &'io mut dyn BufRead,
    /// Destination of `print`.
    pub(in crate::interpreter::evaluator) output:         &'io mut dyn Write,
    /// Number of user function calls currently executing.
    pub(in crate::interpreter::evaluator) call_depth:     usize,
    pub(in crate::interpreter::evaluator) max_call_depth: usize,
    /// Names recorded by `export`, in execution order.
    exports:                                              Vec<String>,
}

impl<'ast, 'io> Context<'ast, 'io> {
    /// Creates a context with an empty global scope and the default call
    /// depth limit.
    ///
    /// # Parameters
    /// - `input`: Source of lines for the `input` builtin.
    /// - `output`: Destination of `print` output.
    #[must_use]
    pub fn new(input: &'io mut dyn BufRead, output: &'io mut dyn Write) -> Self {
        Self { scopes: ScopeArena::new(),
               input,
               output,
               call_depth: 0,
               max_call_depth: DEFAULT_MAX_CALL_DEPTH,
               exports: Vec::new() }
    }

    /// Sets how many calls may be nested before evaluation fails with
    /// `CallDepthExceeded`.
    #[must_use]
    pub fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }

    /// Names recorded by `export` statements, in execution order.
    #[must_use]
    pub fn exports(&self) -> &[String] {
        &self.exports
    }

    /// Read access to the scope arena.
    #[must_use]
    pub const fn scopes(&self) -> &ScopeArena<'ast> {
        &self.scopes
    }

    /// Executes every top-level statement of `program` in the global scope.
    ///
    /// A `break` or `return` cannot reach the top level of a parsed program;
    /// if a hand-built program produces one anyway, execution stops there.
    ///
    /// # Errors
    /// Returns the first runtime error; statements after it are not run.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn run_program(&mut self, program: &'ast Program) -> EvalResult<()> {
        for statement in &program.statements {
            if self.exec_statement(statement, ScopeId::GLOBAL)? != Flow::Next {
                debug!("control flow signal reached the top level");
                break;
            }
        }
        debug!(frames = self.scopes.len(), "program finished");
        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `scope`: Scope names are resolved from.
    ///
    /// # Returns
    /// The value of the literal, the bound value of the identifier or the
    /// result of the call.
    pub fn eval(&mut self, expr: &'ast Expr, scope: ScopeId) -> EvalResult<Value<'ast>> {
        match expr {
            Expr::Literal { value, .. } => Ok(Self::eval_literal(value)),
            Expr::Identifier { name, line } => self.eval_identifier(name, *line, scope),
            Expr::Call { name, line } => self.eval_call(name, *line, scope),
        }
    }

    /// Executes a single statement.
    ///
    /// Declarations, expression statements and `print` record their value as
    /// the scope's last value, which becomes the result of a function body
    /// that finishes without `return`.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    /// - `scope`: Scope the statement runs in.
    ///
    /// # Returns
    /// The control-flow signal for the enclosing construct.
    pub fn exec_statement(&mut self,
                          statement: &'ast Statement,
                          scope: ScopeId)
                          -> EvalResult<Flow<'ast>> {
        match statement {
            Statement::If { condition, body, .. } => {
                if self.eval(condition, scope)?.is_truthy() {
                    return self.run_block(std::slice::from_ref(&**body), scope);
                }
                Ok(Flow::Next)
            },
            Statement::While { condition, body, .. } => self.exec_while(condition, body, scope),
            Statement::Loop { body, .. } => self.exec_loop(body, scope),
            Statement::FunctionDeclaration(def) => {
                self.scopes.define_function(scope, &def.name, Closure { def, scope });
                Ok(Flow::Next)
            },
            Statement::Let { name, value, .. } | Statement::Var { name, value, .. } => {
                let value = self.eval(value, scope)?;
                self.scopes.define_variable(scope, name, value.clone());
                self.scopes.set_last_value(scope, value);
                Ok(Flow::Next)
            },
            Statement::Import { module, .. } => {
                debug!(module = %module, "import already resolved");
                Ok(Flow::Next)
            },
            Statement::Export { name, .. } => {
                info!(name = %name, "exporting");
                self.exports.push(name.clone());
                Ok(Flow::Next)
            },
            Statement::Print { expr, line } => {
                let value = self.eval(expr, scope)?;
                self.print(&value, *line)?;
                self.scopes.set_last_value(scope, value);
                Ok(Flow::Next)
            },
            Statement::Break { .. } => Ok(Flow::Break),
            Statement::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.eval(expr, scope)?,
                    None => Value::Null,
                };
                Ok(Flow::Return(value))
            },
            Statement::Expression { expr, .. } => {
                let value = self.eval(expr, scope)?;
                self.scopes.set_last_value(scope, value);
                Ok(Flow::Next)
            },
        }
    }
}
