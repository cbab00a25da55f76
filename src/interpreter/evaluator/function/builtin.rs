use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluation context and the line of the call.
type BuiltinFn = for<'ast, 'io> fn(&mut Context<'ast, 'io>, usize) -> EvalResult<Value<'ast>>;

struct BuiltinDef {
    name: &'static str,
    func: BuiltinFn,
}

static BUILTIN_TABLE: &[BuiltinDef] = &[BuiltinDef { name: "input",
                                                     func: input }];

/// Finds the builtin called `name`.
pub(in crate::interpreter::evaluator) fn lookup(name: &str) -> Option<BuiltinFn> {
    BUILTIN_TABLE.iter()
                 .find(|builtin| builtin.name == name)
                 .map(|builtin| builtin.func)
}

/// Reads one line from the context's input.
///
/// Pending output is flushed first so a prompt printed just before the call
/// is visible. The line terminator is removed; at end of input the result is
/// `null`.
///
/// # Example
/// ```
/// use luna::interpreter::{
///     evaluator::{core::Context, function::builtin::input},
///     value::core::Value,
/// };
///
/// let mut lines = "Ada\n".as_bytes();
/// let mut output = Vec::new();
/// let mut context = Context::new(&mut lines, &mut output);
///
/// assert_eq!(input(&mut context, 1).unwrap(), Value::from("Ada"));
/// assert_eq!(input(&mut context, 1).unwrap(), Value::Null);
/// ```
pub fn input<'ast>(context: &mut Context<'ast, '_>, line: usize) -> EvalResult<Value<'ast>> {
    context.output
           .flush()
           .map_err(|e| RuntimeError::OutputFailed { details: e.to_string(),
                                                     line })?;

    let mut buffer = String::new();
    let read = context.input
                      .read_line(&mut buffer)
                      .map_err(|e| RuntimeError::InputFailed { details: e.to_string(),
                                                               line })?;
    if read == 0 {
        return Ok(Value::Null);
    }

    Ok(Value::from(buffer.trim_end_matches(['\n', '\r'])))
}
