/// The evaluator module executes the syntax tree.
///
/// The evaluator walks the program once, statement by statement, resolving
/// names through the scope arena, calling functions and writing `print`
/// output. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Executes statements and evaluates expressions.
/// - Manages scope frames for blocks and function calls.
/// - Propagates `break` and `return` to the construct that handles them.
/// - Reports runtime errors such as unknown names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces tokens on
/// demand, each corresponding to a keyword, identifier, number, string or
/// symbol. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Skips whitespace and comments.
/// - Translates string escapes and applies the longest-match rule to symbols.
/// - Reports lexical errors for invalid or unterminated input.
pub mod lexer;
/// The module probe consulted by `import`.
///
/// Defines the resolver trait the parser asks whether a module exists, and
/// the default resolver that looks for a directory on disk.
pub mod module;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer and constructs a `Program` by
/// recursive descent, one function per grammar rule.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Validates the grammar, reporting the first error with its line.
/// - Rejects `break` outside loops and `return` outside functions.
/// - Resolves `import` statements through the module probe.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and function closures.
/// - Implements truthiness and the printed form of values.
pub mod value;
