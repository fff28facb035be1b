use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary, statement, utils},
    },
};

/// A convenience alias for parser results.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a token stream into a list of statements.
///
/// This is the parser's entry point. The returned list is the program body,
/// in source order; executing it in order reproduces the source semantics.
///
/// # Parameters
/// - `tokens`: The `(Token, line)` pairs produced by the lexer.
///
/// # Errors
/// Returns the first [`ParseError`] encountered.
///
/// # Examples
/// ```
/// use moonlet::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("local x = 1 + 2").unwrap();
/// let statements = parse(&tokens).unwrap();
/// assert_eq!(statements.len(), 1);
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let end_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter().peekable();

    let mut statements = Vec::new();
    while iter.peek().is_some() {
        match statement::parse_declaration(&mut iter) {
            Ok(statement) => statements.push(statement),
            Err(error) => return Err(at_end_line(error, end_line)),
        }
    }

    Ok(statements)
}

/// Rewrites the placeholder line of an end-of-input error to the stream's
/// final line.
///
/// The helpers that detect a truncated stream have no token left to take a
/// position from; the last token's line is where the construct broke off.
fn at_end_line(error: ParseError, end_line: usize) -> ParseError {
    match error {
        ParseError::UnexpectedEndOfInput { .. } => {
            ParseError::UnexpectedEndOfInput { line: end_line }
        },
        other => other,
    }
}

/// Parses a single expression.
///
/// An expression is either a function literal or an assignment-level
/// expression; `parse_assignment` in turn falls through the binary
/// precedence ladder when no assignment is present.
///
/// # Errors
/// Returns a `ParseError` if the expression is malformed.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Function, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        return parse_function_expression(tokens, line);
    }

    parse_assignment(tokens)
}

/// Parses an anonymous function literal, after its `function` keyword has
/// been consumed.
///
/// # Errors
/// Returns a `ParseError` if the parameter list is malformed or the body is
/// not closed by `end`.
fn parse_function_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let params = utils::parse_parameters(tokens)?;
    let (body, _) = statement::parse_block(tokens, &[Token::End], line)?;

    Ok(Expr::Function { params, body, line })
}

/// Parses an assignment, or falls through to the binary precedence ladder.
///
/// A leading `local` keyword forces an assignment that declares a new
/// binding in the current scope. Otherwise the left-hand side is parsed as
/// an ordinary expression first; if an `=` follows, that expression must
/// have been a plain variable.
///
/// # Errors
/// Returns a `ParseError` if the assignment target is not a variable name
/// or the expression is malformed.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Local, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let target = utils::parse_identifier(tokens)?;
        utils::expect(tokens, &Token::Equals, "Expect '=' after variable name")?;
        let value = parse_expression(tokens)?;

        return Ok(Expr::Assign { target,
                                 local: true,
                                 value: Box::new(value),
                                 line });
    }

    let expr = binary::parse_logical_or(tokens)?;

    if let Some((Token::Equals, _)) = tokens.peek() {
        tokens.next();
        let value = parse_expression(tokens)?;

        return match expr {
            Expr::Variable { name, line } => {
                Ok(Expr::Assign { target: name,
                                  local: false,
                                  value: Box::new(value),
                                  line })
            },
            other => {
                Err(ParseError::ExpectedVariableName { found: expr_kind(&other).to_string(),
                                                       line:  other.line_number(), })
            },
        };
    }

    Ok(expr)
}

/// Returns a short description of an expression's kind, for diagnostics.
const fn expr_kind(expr: &Expr) -> &'static str {
    match expr {
        Expr::Literal { .. } => "literal",
        Expr::Variable { .. } => "variable",
        Expr::Unary { .. } => "unary expression",
        Expr::Binary { .. } => "binary expression",
        Expr::Assign { .. } => "assignment",
        Expr::Function { .. } => "function",
        Expr::Call { .. } => "function call",
    }
}
