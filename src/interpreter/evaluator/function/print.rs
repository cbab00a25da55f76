use std::io::Write;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context<'_, '_> {
    /// Writes the textual form of `value` followed by a newline.
    ///
    /// # Errors
    /// `OutputFailed` if the output collaborator rejects the write.
    pub(in crate::interpreter::evaluator) fn print(&mut self,
                                                   value: &Value<'_>,
                                                   line: usize)
                                                   -> EvalResult<()> {
        writeln!(self.output, "{value}").map_err(|e| RuntimeError::OutputFailed { details: e.to_string(),
                                                                                  line })
    }
}
