//! # moonlet
//!
//! moonlet is a small embeddable interpreter for a Lua-like scripting
//! language, written in Rust. It tokenizes, parses, and evaluates scripts
//! with support for variables, functions, closures, and the usual control
//! flow (`if`/`elseif`/`else`, numeric `for`, `while`, `repeat`/`until`).

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{evaluator, lexer, parser, value::Value};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Enables extensible and robust handling of parsed code.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of script execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, the environment chain, and error handling to provide a
/// complete runtime for script evaluation. It exposes the public API for
/// interpreting and executing scripts.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, scope, and
///   value types.
/// - Provides entry points for tokenizing, parsing, and evaluating user
///   code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a complete script and returns its final value.
///
/// The script is tokenized, parsed, and evaluated in a fresh root scope
/// with the built-in functions registered. The result is the value of the
/// script's last statement, or the value of a top-level `return`; an empty
/// script yields `nil`.
///
/// # Errors
/// Returns an error if tokenizing or parsing fails, or if any runtime
/// error occurs.
///
/// # Examples
/// ```
/// use moonlet::{interpreter::value::Value, run};
///
/// let result = run("return 1 + 2").unwrap();
/// assert_eq!(result, Value::Number(3.0));
///
/// // 'x' resolves to nil, and arithmetic on nil is an error.
/// let result = run("return x + 1");
/// assert!(result.is_err());
/// ```
pub fn run(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let tokens = lexer::tokenize(source)?;
    let statements = parser::core::parse(&tokens)?;

    let scope = evaluator::builtin::root_scope();
    let value = evaluator::core::evaluate(&statements, &scope)?;

    Ok(value)
}
