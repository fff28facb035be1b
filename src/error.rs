/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include lexical mistakes such as unterminated strings,
/// unexpected tokens, malformed assignment targets, and unterminated blocks.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors are type errors: arithmetic or concatenation on wrong-typed
/// operands, comparing mismatched types, or calling a value that is not a
/// function.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
