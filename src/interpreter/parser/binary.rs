use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary},
    },
};

/// Maps an operator token to its binary operator, if it has one.
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::DotDot => Some(BinaryOperator::Concat),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEquals => Some(BinaryOperator::LessEqual),
        Token::GreaterEquals => Some(BinaryOperator::GreaterEqual),
        Token::EqualsEquals => Some(BinaryOperator::Equal),
        Token::NotEquals => Some(BinaryOperator::NotEqual),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Parses one left-associative level of the binary precedence ladder.
///
/// Repeatedly parses `parse_operand`-level expressions joined by operators
/// for which `accepts` returns `true`, folding them into a left-leaning
/// tree.
fn parse_binary_level<'a, I>(tokens: &mut Peekable<I>,
                             parse_operand: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>,
                             accepts: impl Fn(BinaryOperator) -> bool)
                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_operand(tokens)?;

    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && accepts(op)
    {
        let line = *line;
        tokens.next();
        let right = parse_operand(tokens)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line };
    }

    Ok(left)
}

/// Parses an `or` expression, the lowest binary precedence level.
///
/// # Errors
/// Returns a `ParseError` if an operand is malformed.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary_level(tokens, parse_logical_and, |op| matches!(op, BinaryOperator::Or))
}

/// Parses an `and` expression.
///
/// # Errors
/// Returns a `ParseError` if an operand is malformed.
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary_level(tokens, parse_equality, |op| matches!(op, BinaryOperator::And))
}

/// Parses an equality expression (`==`, `~=`).
///
/// # Errors
/// Returns a `ParseError` if an operand is malformed.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary_level(tokens, parse_comparison, |op| {
        matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
    })
}

/// Parses a comparison expression (`<`, `>`, `<=`, `>=`).
///
/// # Errors
/// Returns a `ParseError` if an operand is malformed.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary_level(tokens, parse_additive, |op| {
        matches!(op,
                 BinaryOperator::Less
                 | BinaryOperator::Greater
                 | BinaryOperator::LessEqual
                 | BinaryOperator::GreaterEqual)
    })
}

/// Parses an additive expression (`+`, `-`, and `..`, which shares this
/// level).
///
/// # Errors
/// Returns a `ParseError` if an operand is malformed.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary_level(tokens, parse_multiplicative, |op| {
        matches!(op,
                 BinaryOperator::Add | BinaryOperator::Sub | BinaryOperator::Concat)
    })
}

/// Parses a multiplicative expression (`*`, `/`), the tightest binary
/// level.
///
/// # Errors
/// Returns a `ParseError` if an operand is malformed.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary_level(tokens, unary::parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    })
}
