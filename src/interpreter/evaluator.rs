/// Core evaluation logic.
///
/// Contains the `evaluate` entry point, statement execution, expression
/// dispatch, and the `Flow` type that carries `return` across block
/// boundaries.
pub mod core;

/// Binary operator evaluation.
///
/// Implements arithmetic, concatenation, ordering, equality, and the
/// operand-returning `and`/`or` operators, with their type checks.
pub mod binary;

/// Unary operator evaluation (`not`, unary minus).
pub mod unary;

/// Control-flow statements: `if`/`elseif`/`else`, numeric `for`, `while`
/// and `repeat`/`until`.
pub mod control;

/// Function values: declaration, closure construction, calls, and parameter
/// binding.
pub mod function;

/// Built-in native functions (`print`, `tostring`) and root scope setup.
pub mod builtin;
