#[derive(Debug)]
/// Represents all errors that can be raised during evaluation.
///
/// The interpreter fails fast: none of these are recovered inside the core,
/// they unwind to the host boundary. Every variant carries the 1-based source
/// line of the failing construct and renders as `[line N] <message>`.
pub enum RuntimeError {
    /// An arithmetic operator was applied to a non-number operand.
    ArithmeticType {
        /// The runtime type of the offending operand.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// The concatenation operator `..` was applied to a non-string operand.
    ConcatType {
        /// The runtime type of the offending operand.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An ordering comparison was applied to a value that has no order.
    ComparisonType {
        /// The runtime type of the offending operand.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An ordering comparison was applied to operands of differing types.
    ComparisonMismatch {
        /// The runtime type of the left operand.
        left:  &'static str,
        /// The runtime type of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A call was made on a value that is not a function.
    NotCallable {
        /// The runtime type of the callee.
        type_name: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArithmeticType { type_name, line } => {
                write!(f, "[line {line}] Cannot perform arithmetic on {type_name}")
            },

            Self::ConcatType { type_name, line } => {
                write!(f, "[line {line}] Can only concat strings, got {type_name}")
            },

            Self::ComparisonType { type_name, line } => {
                write!(f,
                       "[line {line}] Can only compare numbers or strings, got {type_name}")
            },

            Self::ComparisonMismatch { left, right, line } => {
                write!(f, "[line {line}] Cannot compare {left} with {right}")
            },

            Self::NotCallable { type_name, line } => {
                write!(f, "[line {line}] Cannot call {type_name}")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
