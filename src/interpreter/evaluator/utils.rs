use crate::{
    ast::{LiteralValue, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, Flow},
            scope::ScopeId,
        },
        value::core::Value,
    },
};

impl<'ast> Context<'ast, '_> {
    /// Evaluates a literal expression.
    ///
    /// Converts the literal value directly into a `Value`. Literals never
    /// produce errors.
    ///
    /// # Example
    /// ```
    /// use luna::{
    ///     ast::LiteralValue,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let value = Context::eval_literal(&LiteralValue::Number(7.0));
    /// assert_eq!(value, Value::Number(7.0));
    /// ```
    #[must_use]
    pub fn eval_literal(value: &LiteralValue) -> Value<'ast> {
        Value::from(value)
    }

    /// Looks up a name.
    ///
    /// Variable lookup checks, in order:
    /// 1. Variables bound in `scope` and its ancestors.
    /// 2. Functions declared in `scope` and its ancestors, which evaluate to a
    ///    function value.
    ///
    /// # Errors
    /// `UndefinedVariable` if neither lookup finds the name.
    pub fn eval_identifier(&self,
                           name: &str,
                           line: usize,
                           scope: ScopeId)
                           -> EvalResult<Value<'ast>> {
        if let Some(value) = self.scopes.lookup_variable(scope, name) {
            return Ok(value.clone());
        }
        if let Some(closure) = self.scopes.lookup_function(scope, name) {
            return Ok(Value::Function(closure));
        }
        Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                              line })
    }

    /// Runs `statements` in a new block scope under `parent`.
    ///
    /// Execution stops early at the first `break` or `return`, whose signal is
    /// passed on to the caller. When the block exits its last value is carried
    /// into `parent` and the block's frame is released.
    ///
    /// # Returns
    /// [`Flow::Next`] if every statement ran, otherwise the signal that
    /// stopped the block.
    pub fn run_block(&mut self,
                     statements: &'ast [Statement],
                     parent: ScopeId)
                     -> EvalResult<Flow<'ast>> {
        let block = self.scopes.push(parent);

        let mut flow = Ok(Flow::Next);
        for statement in statements {
            flow = self.exec_statement(statement, block);
            if !matches!(flow, Ok(Flow::Next)) {
                break;
            }
        }

        let last_value = self.scopes.take_last_value(block);
        let returned = match &flow {
            Ok(Flow::Return(value)) => Some(value),
            _ => None,
        };
        self.scopes.release(block, last_value.iter().chain(returned));

        if let Some(value) = last_value {
            self.scopes.set_last_value(parent, value);
        }

        flow
    }
}
