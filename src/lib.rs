//! # luna
//!
//! luna is an interpreter for Luna, a small scripting language, written in
//! Rust. Source text is tokenized on demand, parsed into a syntax tree by
//! recursive descent and executed by walking the tree, with lexically scoped
//! variables and functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead, Write};

use crate::{
    interpreter::{evaluator::core::Context, module::DirectoryResolver, parser::core::Parser},
    settings::Settings,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The tree is
/// built by the parser and borrowed by the evaluator for the whole run.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source lines to every node for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a program.
/// Every error carries the source line it refers to; the crate-level
/// [`error::Error`] wraps the errors of each stage.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, module resolution, evaluation
/// and value representations to provide a complete runtime.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// Run configuration.
///
/// Holds the module root used by `import` and the call depth limit, with
/// their defaults.
pub mod settings;

pub use error::Error;

/// Parses and runs a program against the given input and output.
///
/// The whole program is parsed before anything is executed, so a syntax error
/// or a missing module means no statement runs. Output written before a
/// runtime error stays in `output`, which is flushed once evaluation ends.
///
/// # Parameters
/// - `source`: Program text.
/// - `settings`: Module root, call depth and nesting depth limits.
/// - `input`: Lines read by the `input` builtin.
/// - `output`: Destination of `print` output.
///
/// # Errors
/// Returns the first lexical, parse or runtime error, or [`Error::Flush`] if
/// `output` cannot be flushed after a successful run.
///
/// # Examples
/// ```
/// use luna::{run, settings::Settings};
///
/// let mut input = "world\n".as_bytes();
/// let mut output = Vec::new();
///
/// let source = "var name = input; print 'hello'; print name;";
/// run(source, &Settings::default(), &mut input, &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "hello\nworld\n");
/// ```
pub fn run(source: &str,
           settings: &Settings,
           input: &mut dyn BufRead,
           output: &mut dyn Write)
           -> Result<(), Error> {
    let resolver = DirectoryResolver::new(&settings.modules_root);
    let program = Parser::new(source, &resolver)?.with_max_nesting_depth(settings.max_nesting_depth)
                                                 .parse_program()?;

    let outcome = Context::new(&mut *input, &mut *output).with_max_call_depth(settings.max_call_depth)
                                                         .run_program(&program);
    let flushed = output.flush();
    outcome?;

    flushed.map_err(|e| Error::Flush { details: e.to_string() })
}

/// Runs a program with no input and returns everything it printed.
///
/// # Errors
/// Returns the first lexical, parse or runtime error; the output produced
/// before it is discarded.
///
/// # Examples
/// ```
/// use luna::{get_output, settings::Settings};
///
/// let output = get_output("var x = 5; print x;", &Settings::default()).unwrap();
/// assert_eq!(output, "5\n");
///
/// // `y` is never defined.
/// assert!(get_output("print y;", &Settings::default()).is_err());
/// ```
pub fn get_output(source: &str, settings: &Settings) -> Result<String, Error> {
    let mut input = io::empty();
    let mut output = Vec::new();

    run(source, settings, &mut input, &mut output)?;

    Ok(String::from_utf8_lossy(&output).into_owned())
}

/// Runs a program against the process's standard input and output.
///
/// # Errors
/// Returns the first lexical, parse or runtime error, or [`Error::Flush`] if
/// standard output cannot be flushed at the end.
pub fn get_result(source: &str, settings: &Settings) -> Result<(), Error> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    run(source, settings, &mut input, &mut output)
}
