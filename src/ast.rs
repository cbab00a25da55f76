/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: `null`, the booleans, numbers and strings.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `null` literal.
    Null,
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A 64-bit floating-point literal. Every number literal is stored this
    /// way, whether or not it was written with a decimal point.
    Number(f64),
    /// A string literal with its escapes already translated.
    String(String),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions are deliberately small: constants, name lookups and calls
/// without arguments. Operators are recognized by the lexer but have no
/// expression form.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (`null`, boolean, number or string).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable (or a declared function) by name.
    Identifier {
        /// Name being looked up.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A call to a builtin or user-defined function.
    Call {
        /// Name of the function.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Returns the source line of the expression.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Literal { line, .. } | Self::Identifier { line, .. } | Self::Call { line, .. } => {
                *line
            },
        }
    }
}

/// A user-defined function.
///
/// Functions take no parameters; the body is a single statement that runs in a
/// fresh scope whose parent is the scope the declaration was evaluated in.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// Name of the function.
    pub name: String,
    /// Statement executed on every call.
    pub body: Box<Statement>,
    /// Line number of the `func` keyword.
    pub line: usize,
}

/// A statement that can appear at the top level or inside a body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `if <condition> <statement> end`
    If {
        /// Evaluated once; the body runs when it is truthy.
        condition: Expr,
        /// The guarded statement.
        body:      Box<Self>,
        /// Line number of the `if` keyword.
        line:      usize,
    },
    /// `while <condition> <statement> end`
    While {
        /// Re-evaluated before every iteration.
        condition: Expr,
        /// The repeated statement.
        body:      Box<Self>,
        /// Line number of the `while` keyword.
        line:      usize,
    },
    /// `loop <statement>* end`
    Loop {
        /// Statements repeated until a `break` (or `return`) leaves the loop.
        body: Vec<Self>,
        /// Line number of the `loop` keyword.
        line: usize,
    },
    /// `func <name> <statement> end`
    FunctionDeclaration(FunctionDef),
    /// `let <name> = <expr>;`
    Let {
        /// Name being bound.
        name:  String,
        /// Initializer.
        value: Expr,
        /// Line number of the `let` keyword.
        line:  usize,
    },
    /// `var <name> = <expr>;`
    Var {
        /// Name being bound.
        name:  String,
        /// Initializer.
        value: Expr,
        /// Line number of the `var` keyword.
        line:  usize,
    },
    /// `import <module>`; resolved while parsing.
    Import {
        /// Module identifier.
        module: String,
        /// Line number of the `import` keyword.
        line:   usize,
    },
    /// `export <name>;`
    Export {
        /// Exported name.
        name: String,
        /// Line number of the `export` keyword.
        line: usize,
    },
    /// `print <expr>;`
    Print {
        /// Value to print.
        expr: Expr,
        /// Line number of the `print` keyword.
        line: usize,
    },
    /// `break`
    Break {
        /// Line number of the `break` keyword.
        line: usize,
    },
    /// `return <expr>;` or `return;`
    Return {
        /// Returned value; `None` returns `null`.
        value: Option<Expr>,
        /// Line number of the `return` keyword.
        line:  usize,
    },
    /// An expression evaluated for its value or its side effects.
    Expression {
        /// The expression.
        expr: Expr,
        /// Line number where the expression starts.
        line: usize,
    },
}

/// A parsed program: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statements executed against the global scope.
    pub statements: Vec<Statement>,
}
