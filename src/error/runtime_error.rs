/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// An identifier was not bound anywhere in the active scope chain.
    #[error("Line {line}: undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call named neither a builtin, a declared function nor a variable.
    #[error("Line {line}: undefined function '{name}'.")]
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value was used in a way its type does not allow, such as calling a
    /// variable that holds a number.
    #[error("Line {line}: {details}.")]
    TypeCoercionError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Nested function calls went deeper than the configured limit.
    #[error("Line {line}: maximum call depth of {limit} exceeded calling '{name}'.")]
    CallDepthExceeded {
        /// The function whose call would have exceeded the limit.
        name:  String,
        /// The configured limit.
        limit: usize,
        /// The source line of the call.
        line:  usize,
    },
    /// Writing `print` output failed.
    #[error("Line {line}: failed to write output: {details}.")]
    OutputFailed {
        /// The underlying I/O error message.
        details: String,
        /// The source line of the `print`.
        line:    usize,
    },
    /// Reading a line for `input` failed.
    #[error("Line {line}: failed to read input: {details}.")]
    InputFailed {
        /// The underlying I/O error message.
        details: String,
        /// The source line of the `input` call.
        line:    usize,
    },
}
