#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the 1-based source line of the failing construct,
/// and renders as `[line N] <message>`.
pub enum ParseError {
    /// The lexer met a character that does not belong to the language.
    UnexpectedCharacter {
        /// The offending character(s).
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A string literal was not closed before the end of its line.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `--[[ ... ]]--` comment was not closed before the end of input.
    UnterminatedComment {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found a token that no grammar rule could start with.
    UnexpectedToken {
        /// A description of the token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific keyword or punctuation token was expected but not found.
    Expected {
        /// A description of what the parser expected.
        what: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The target of an assignment was not a bare variable reference.
    ExpectedVariableName {
        /// A description of what was found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A block ran out of input before meeting its terminator keyword.
    UnterminatedBlock {
        /// The source line where the block began.
        line: usize,
    },
    /// Reached the end of input in the middle of a construct.
    UnexpectedEndOfInput {
        /// The final line of the token stream, where the construct broke
        /// off.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, line } => {
                write!(f, "[line {line}] Unexpected character {found}")
            },

            Self::UnterminatedString { line } => {
                write!(f, "[line {line}] Unterminated string literal")
            },

            Self::UnterminatedComment { line } => {
                write!(f, "[line {line}] Unterminated multiline comment")
            },

            Self::UnexpectedToken { token, line } => {
                write!(f, "[line {line}] Unexpected token {token}")
            },

            Self::Expected { what, line } => write!(f, "[line {line}] {what}"),

            Self::ExpectedVariableName { found, line } => {
                write!(f, "[line {line}] Expected variable name but got {found}")
            },

            Self::UnterminatedBlock { line } => write!(f, "[line {line}] Unterminated block"),

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "[line {line}] Unexpected end of input")
            },
        }
    }
}

impl std::error::Error for ParseError {}
