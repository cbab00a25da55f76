use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, Flow},
            function::builtin,
            scope::ScopeId,
        },
        value::core::{Closure, Value},
    },
};

impl<'ast> Context<'ast, '_> {
    /// Evaluates a function call.
    ///
    /// The evaluator first checks whether the name matches a builtin. If not,
    /// the name is resolved to a closure and the closure is called.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `line`: Line number for error reporting.
    /// - `scope`: Scope the call is made from.
    ///
    /// # Returns
    /// The function result.
    ///
    /// # Errors
    /// - `UndefinedFunction` if nothing called `name` is in scope.
    /// - `TypeCoercionError` if `name` is a variable that does not hold a
    ///   function.
    /// - Any error raised while running the body.
    pub fn eval_call(&mut self,
                     name: &str,
                     line: usize,
                     scope: ScopeId)
                     -> EvalResult<Value<'ast>> {
        if let Some(function) = builtin::lookup(name) {
            return function(self, line);
        }

        let closure = self.resolve_function(name, line, scope)?;
        self.call_closure(closure, line)
    }

    /// Finds the closure a call refers to.
    ///
    /// Declared functions are searched along the whole scope chain first;
    /// after that, a variable holding a function value is accepted.
    fn resolve_function(&self,
                        name: &str,
                        line: usize,
                        scope: ScopeId)
                        -> EvalResult<Closure<'ast>> {
        if let Some(closure) = self.scopes.lookup_function(scope, name) {
            return Ok(closure);
        }

        match self.scopes.lookup_variable(scope, name) {
            Some(Value::Function(closure)) => Ok(*closure),
            Some(other) => {
                Err(RuntimeError::TypeCoercionError { details: format!("'{name}' is a {}, not a function",
                                                                       other.type_name()),
                                                      line })
            },
            None => Err(RuntimeError::UndefinedFunction { name: name.to_string(),
                                                          line }),
        }
    }

    /// Calls a closure.
    ///
    /// The body runs in a new scope whose parent is the closure's defining
    /// scope. The result is the value of a `return` statement if one ran,
    /// otherwise the last value the body produced, otherwise `null`.
    ///
    /// # Errors
    /// `CallDepthExceeded` if the call would nest deeper than the configured
    /// limit, or any error raised by the body.
    pub fn call_closure(&mut self, closure: Closure<'ast>, line: usize) -> EvalResult<Value<'ast>> {
        if self.call_depth >= self.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { name: closure.name().to_string(),
                                                         limit: self.max_call_depth,
                                                         line });
        }
        trace!(function = closure.name(), depth = self.call_depth + 1, "calling function");

        let frame = self.scopes.push(closure.scope);
        self.call_depth += 1;
        let flow = self.exec_statement(&closure.def.body, frame);
        self.call_depth -= 1;

        let result = match flow {
            Ok(Flow::Return(value)) => value,
            Ok(Flow::Next | Flow::Break) => {
                self.scopes.take_last_value(frame).unwrap_or(Value::Null)
            },
            Err(error) => {
                self.scopes.release(frame, []);
                return Err(error);
            },
        };

        self.scopes.release(frame, [&result]);

        Ok(result)
    }
}
