use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Returns the source line of the next token, or `0` at end of input.
pub(in crate::interpreter::parser) fn peek_line<'a, I>(tokens: &mut Peekable<I>) -> usize
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.peek().map_or(0, |(_, line)| *line)
}

/// The error for a stream that ran dry in the middle of a construct.
///
/// No token remains to take a line from, so the line is a placeholder;
/// `parse` rewrites it to the stream's final line before the error escapes.
pub(in crate::interpreter::parser) fn end_of_input() -> ParseError {
    ParseError::UnexpectedEndOfInput { line: 0 }
}

/// Consumes the next token, requiring it to equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the token to check.
/// - `expected`: The token that must come next.
/// - `what`: Expectation message used in the diagnostic on mismatch.
///
/// # Returns
/// The source line of the consumed token.
///
/// # Errors
/// Returns a `ParseError` if the next token differs from `expected` or the
/// input ends.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    what: &str)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => {
            Err(ParseError::Expected { what: format!("{what}, found {tok:?}"),
                                       line: *line, })
        },
        None => Err(end_of_input()),
    }
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the
/// input ends.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        Some((tok, line)) => {
            Err(ParseError::Expected { what: format!("Expect variable name, found {tok:?}"),
                                       line: *line, })
        },
        None => Err(end_of_input()),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by parameter lists and call argument lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either a
/// comma, to continue the list, or the closing token, to end it. An
/// immediately encountered closing token produces an empty list. The closing
/// token is consumed.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((tok, line)) => {
                return Err(ParseError::Expected { what: format!("Expect ',' or {closing:?}, found {tok:?}"),
                                                  line: *line, });
            },
            None => return Err(end_of_input()),
        }
    }
    Ok(items)
}

/// Parses a parenthesized, comma-separated parameter list of identifiers.
///
/// Used by both named function declarations and function literals. An empty
/// list is written `()`.
///
/// # Errors
/// Returns a `ParseError` if the opening parenthesis is missing, a parameter
/// is not an identifier, or the closing parenthesis is missing.
pub(in crate::interpreter::parser) fn parse_parameters<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<Vec<String>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen, "Expect opening parenthesis")?;
    parse_comma_separated(tokens, parse_identifier, &Token::RParen)
}
