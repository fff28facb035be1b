use logos::{FilterResult, Logos};

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`. No exponent or
    /// hexadecimal notation.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens delimited by `'` or `"`, with escape sequences
    /// resolved. A string must close before the end of its line.
    #[regex(r#""([^"\\\n]|\\.)*""#, unescape_string)]
    #[regex(r#"'([^'\\\n]|\\.)*'"#, unescape_string)]
    Str(String),
    /// `nil`
    #[token("nil")]
    Nil,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `local`
    #[token("local")]
    Local,
    /// `for`
    #[token("for")]
    For,
    /// `while`
    #[token("while")]
    While,
    /// `do`
    #[token("do")]
    Do,
    /// `end`
    #[token("end")]
    End,
    /// `if`
    #[token("if")]
    If,
    /// `then`
    #[token("then")]
    Then,
    /// `else`
    #[token("else")]
    Else,
    /// `elseif`
    #[token("elseif")]
    Elseif,
    /// `repeat`
    #[token("repeat")]
    Repeat,
    /// `until`
    #[token("until")]
    Until,
    /// `function`
    #[token("function")]
    Function,
    /// `return`
    #[token("return")]
    Return,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// Identifier tokens; variable or function names such as `x` or `fact`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `--` starts a line comment; `--[[` starts a multiline comment closed
    /// by `]]--`.
    #[token("--", lex_comment)]
    Comment,
    /// `..`
    #[token("..")]
    DotDot,
    /// `.`
    #[token(".")]
    Dot,
    /// `,`
    #[token(",")]
    Comma,
    /// `==`
    #[token("==")]
    EqualsEquals,
    /// `~=`
    #[token("~=")]
    NotEquals,
    /// `=`
    #[token("=")]
    Equals,
    /// `<=`
    #[token("<=")]
    LessEquals,
    /// `>=`
    #[token(">=")]
    GreaterEquals,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// Newlines advance the line counter and are otherwise skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, carriage returns and tabs.
    #[regex(r"[ \r\t]+", logos::skip)]
    Whitespace,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics,
/// incremented as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Resolves escape sequences in a quoted string literal.
///
/// The surrounding quotes are stripped. Supported escapes are `\n`, `\r`,
/// `\t`, `\\`, `\"` and `\'`; an unrecognized escape yields the escaped
/// character itself.
fn unescape_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];

    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\'
           && let Some(escaped) = chars.next()
        {
            match escaped {
                'n' => result.push('\n'),
                'r' => result.push('\r'),
                't' => result.push('\t'),
                other => result.push(other),
            }
        } else {
            result.push(ch);
        }
    }
    result
}

/// Consumes a comment after its leading `--` has been matched.
///
/// `--[[` opens a multiline comment that runs, counting newlines, until the
/// closing `]]--`; a missing close marker is a lexical error. Any other `--`
/// is a line comment running to the end of the line.
fn lex_comment(lex: &mut logos::Lexer<Token>) -> FilterResult<(), ()> {
    if lex.remainder().starts_with("[[") {
        lex.bump(2);
        let rest = lex.remainder();
        match rest.find("]]--") {
            Some(close) => {
                let newlines = rest[..close].chars().filter(|&c| c == '\n').count();
                lex.extras.line += newlines;
                lex.bump(close + 4);
                FilterResult::Skip
            },
            None => FilterResult::Error(()),
        }
    } else {
        let rest = lex.remainder();
        let length = rest.find('\n').unwrap_or(rest.len());
        lex.bump(length);
        FilterResult::Skip
    }
}

/// Tokenizes an entire source string.
///
/// Produces the token stream consumed by the parser: a sequence of
/// `(Token, line)` pairs, where `line` is the 1-based source line on which
/// the token began. Whitespace and comments are skipped.
///
/// # Errors
/// Returns a [`ParseError`] describing the first lexical error encountered:
/// an unterminated string literal, an unterminated multiline comment, or an
/// unexpected character (including a lone `~`).
///
/// # Examples
/// ```
/// use moonlet::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2.5").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(1.0), 1),
///                 (Token::Plus, 1),
///                 (Token::Number(2.5), 1)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => {
                let slice = lexer.slice();
                let line = lexer.extras.line;

                return Err(if slice.starts_with("--[[") {
                    ParseError::UnterminatedComment { line }
                } else if slice.starts_with('"') || slice.starts_with('\'') {
                    ParseError::UnterminatedString { line }
                } else {
                    ParseError::UnexpectedCharacter { found: slice.to_string(),
                                                      line }
                });
            },
        }
    }

    Ok(tokens)
}
