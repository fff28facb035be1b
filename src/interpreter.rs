/// Converts raw source text into a token stream.
///
/// The lexer recognizes keywords, identifiers, literals, operators, and
/// comments, skipping whitespace while tracking line numbers for
/// diagnostics.
pub mod lexer;

/// Converts the token stream into an abstract syntax tree.
///
/// A recursive-descent parser with one level per operator precedence,
/// split across submodules for statements, binary operators, unary
/// operators, and shared utilities.
pub mod parser;

/// The environment chain.
///
/// Defines the `Scope` type that holds variable bindings and links to its
/// enclosing scope, giving closures shared, mutable access to their
/// definition environment.
pub mod scope;

/// Runtime value representation.
///
/// Defines the `Value` enum covering `nil`, booleans, numbers, strings,
/// and functions, along with equality, truthiness, and display rules.
pub mod value;

/// Walks the syntax tree and executes it.
///
/// The evaluator dispatches over statements and expressions, threading the
/// environment chain through blocks and calls, and reporting runtime
/// errors with source lines.
pub mod evaluator;
