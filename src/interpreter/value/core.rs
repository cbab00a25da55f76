use std::fmt;

use crate::{
    ast::{FunctionDef, LiteralValue},
    interpreter::evaluator::scope::ScopeId,
};

/// A function value: a declaration together with the scope it was declared
/// in.
///
/// Calling a closure runs its body in a new scope whose parent is `scope`, so
/// names resolve where the function was written rather than where it is
/// called.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Closure<'ast> {
    /// The declaration, borrowed from the program being run.
    pub def:   &'ast FunctionDef,
    /// The scope the declaration was evaluated in.
    pub scope: ScopeId,
}

impl Closure<'_> {
    /// The declared name of the function.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.def.name
    }
}

/// Represents a runtime value in the interpreter.
///
/// This enum models every value that can be bound to a name, printed, returned
/// from a function or tested by a condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'ast> {
    /// The absence of a value. Produced by `null`, by calls whose body yields
    /// nothing and by `input` at end of input.
    Null,
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value.
    String(String),
    /// A function, obtained by naming a declared function without calling it.
    Function(Closure<'ast>),
}

impl From<f64> for Value<'_> {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value<'_> {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value<'_> {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value<'_> {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&LiteralValue> for Value<'_> {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Null => Self::Null,
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::String(s) => Self::String(s.clone()),
        }
    }
}

impl<'ast> Value<'ast> {
    /// Coerces the value to a boolean for `if` and `while` conditions.
    ///
    /// `null`, `false`, `0`, the empty string and the string `"false"` are
    /// falsy; every other value, including every function, is truthy.
    ///
    /// # Example
    /// ```
    /// use luna::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::from(0.0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(!Value::from("false").is_truthy());
    ///
    /// assert!(Value::from(0.5).is_truthy());
    /// assert!(Value::from("0").is_truthy());
    /// assert!(Value::from(true).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::String(s) => !s.is_empty() && s != "false",
            Self::Function(_) => true,
        }
    }

    /// Returns the closure if the value is a function.
    #[must_use]
    pub const fn as_function(&self) -> Option<Closure<'ast>> {
        match self {
            Self::Function(closure) => Some(*closure),
            _ => None,
        }
    }

    /// A short name for the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Function(_) => "function",
        }
    }
}

impl fmt::Display for Value<'_> {
    /// Writes the form `print` emits: numbers in their shortest form (`5`,
    /// `1.5`), strings without quotes and functions as `<func name>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Function(closure) => write!(f, "<func {}>", closure.name()),
        }
    }
}
