use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core, utils},
    },
};

/// Parses a unary expression (`not`, unary `-`), or falls through to a
/// call.
///
/// Unary operators bind tighter than every binary operator and nest, so
/// `not not x` and `--x`-style double negation (written `- -x`, since `--`
/// begins a comment) parse naturally.
///
/// # Errors
/// Returns a `ParseError` if the operand is malformed.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> core::ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Not, line)) => {
            let line = *line;
            tokens.next();
            let operand = parse_unary(tokens)?;

            Ok(Expr::Unary { op: UnaryOperator::Not,
                             operand: Box::new(operand),
                             line })
        },
        Some((Token::Minus, line)) => {
            let line = *line;
            tokens.next();
            let operand = parse_unary(tokens)?;

            Ok(Expr::Unary { op: UnaryOperator::Negate,
                             operand: Box::new(operand),
                             line })
        },
        _ => parse_call(tokens),
    }
}

/// Parses a primary expression with an optional call suffix.
///
/// A call suffix is either a parenthesized argument list or, as sugar, a
/// single string literal (`print "hi"`). At most one suffix is applied.
///
/// # Errors
/// Returns a `ParseError` if the callee or an argument is malformed.
pub fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> core::ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_primary(tokens)?;
    let line = expr.line_number();

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
            let arguments =
                utils::parse_comma_separated(tokens, core::parse_expression, &Token::RParen)?;

            Ok(Expr::Call { callee: Box::new(expr),
                            arguments,
                            line })
        },
        Some((Token::Str(text), string_line)) => {
            let argument = Expr::Literal { value: LiteralValue::Str(text.clone()),
                                           line:  *string_line, };
            tokens.next();

            Ok(Expr::Call { callee: Box::new(expr),
                            arguments: vec![argument],
                            line })
        },
        _ => Ok(expr),
    }
}

/// Parses a primary expression: a literal, a variable reference, or a
/// parenthesized expression.
///
/// # Errors
/// Returns a `ParseError` on any other token, or at end of input.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> core::ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Nil, line)) => {
            Ok(Expr::Literal { value: LiteralValue::Nil,
                               line:  *line, })
        },
        Some((Token::True, line)) => {
            Ok(Expr::Literal { value: LiteralValue::Bool(true),
                               line:  *line, })
        },
        Some((Token::False, line)) => {
            Ok(Expr::Literal { value: LiteralValue::Bool(false),
                               line:  *line, })
        },
        Some((Token::Number(n), line)) => {
            Ok(Expr::Literal { value: LiteralValue::Number(*n),
                               line:  *line, })
        },
        Some((Token::Str(s), line)) => {
            Ok(Expr::Literal { value: LiteralValue::Str(s.clone()),
                               line:  *line, })
        },
        Some((Token::Identifier(name), line)) => {
            Ok(Expr::Variable { name: name.clone(),
                                line: *line, })
        },
        Some((Token::LParen, _)) => {
            let expr = core::parse_expression(tokens)?;
            utils::expect(tokens,
                          &Token::RParen,
                          "Expect closing parenthesis after expression")?;

            Ok(expr)
        },
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                              line:  *line, })
        },
        None => Err(utils::end_of_input()),
    }
}
