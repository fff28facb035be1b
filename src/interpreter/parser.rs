/// Core parsing logic for expressions.
///
/// Contains the `parse` entry point, the expression/assignment levels, and
/// the shared `ParseResult` alias.
pub mod core;

/// Statement parsing.
///
/// Implements declarations, control-flow statements, and block handling with
/// terminator keywords.
pub mod statement;

/// Binary precedence ladder.
///
/// Parses left-associative binary operators from logical `or` down to the
/// multiplicative level.
pub mod binary;

/// Unary, call, and primary parsing.
///
/// Handles `not` and unary minus, call suffixes (parenthesized argument
/// lists and the single-string-literal call form), and primary expressions.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides shared token helpers such as `expect` and comma-separated list
/// parsing.
pub mod utils;
