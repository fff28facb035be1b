use std::iter::Peekable;

use crate::{
    ast::{Expr, ForInit, LiteralValue, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core, utils},
    },
};

/// Parses a declaration or, failing that, a statement.
///
/// A `function` keyword directly followed by an identifier begins a named
/// function declaration; a `function` followed by `(` is a function literal
/// and is left for the expression parser.
///
/// # Errors
/// Returns a `ParseError` if the declaration or statement is malformed.
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> core::ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Function, _)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some((Token::Identifier(_), _)) = lookahead.peek() {
            return parse_function_declaration(tokens);
        }
    }

    parse_statement(tokens)
}

/// Parses a single statement.
///
/// # Errors
/// Returns a `ParseError` if the statement is malformed.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> core::ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::If, line)) => {
            let line = *line;
            tokens.next();
            parse_if(tokens, line)
        },
        Some((Token::For, line)) => {
            let line = *line;
            tokens.next();
            parse_for(tokens, line)
        },
        Some((Token::While, line)) => {
            let line = *line;
            tokens.next();
            parse_while(tokens, line)
        },
        Some((Token::Repeat, line)) => {
            let line = *line;
            tokens.next();
            parse_repeat(tokens, line)
        },
        Some((Token::Do, line)) => {
            let line = *line;
            tokens.next();
            let (body, _) = parse_block(tokens, &[Token::End], line)?;

            Ok(Statement::Block { body, line })
        },
        Some((Token::Return, line)) => {
            let line = *line;
            tokens.next();
            let value = core::parse_expression(tokens)?;

            Ok(Statement::Return { value, line })
        },
        _ => {
            let line = utils::peek_line(tokens);
            let expr = core::parse_expression(tokens)?;

            Ok(Statement::Expression { expr, line })
        },
    }
}

/// Parses statements until one of the given terminator keywords.
///
/// The terminator is consumed, and returned so that callers with several
/// possible terminators (`if` bodies end at `end`, `elseif` or `else`) can
/// tell which one closed the block.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the block opener.
/// - `terminators`: Keywords that may close this block.
/// - `line`: Line of the opener, reported when the block never closes.
///
/// # Errors
/// Returns [`ParseError::UnterminatedBlock`] if the input ends before any
/// terminator.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          terminators: &[Token],
                          line: usize)
                          -> core::ParseResult<(Vec<Statement>, Token)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();
    loop {
        let Some((tok, _)) = tokens.peek() else {
            return Err(ParseError::UnterminatedBlock { line });
        };

        if terminators.contains(tok) {
            let terminator = (*tok).clone();
            tokens.next();

            return Ok((statements, terminator));
        }

        statements.push(parse_declaration(tokens)?);
    }
}

/// Parses an `if` statement after its `if` keyword has been consumed.
///
/// Grammar: `if <expr> then <block> (elseif <expr> then <block>)*
/// (else <block>)? end`.
///
/// # Errors
/// Returns a `ParseError` if a condition, `then` keyword, or closing `end`
/// is missing.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> core::ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = core::parse_expression(tokens)?;
    utils::expect(tokens, &Token::Then, "Expect keyword \"then\"")?;
    let branch_terminators = [Token::End, Token::Elseif, Token::Else];
    let (then_body, mut terminator) = parse_block(tokens, &branch_terminators, line)?;

    let mut else_ifs = Vec::new();
    while terminator == Token::Elseif {
        let condition = core::parse_expression(tokens)?;
        utils::expect(tokens, &Token::Then, "Expect keyword \"then\"")?;
        let (body, next) = parse_block(tokens, &branch_terminators, line)?;
        else_ifs.push((condition, body));
        terminator = next;
    }

    let else_body = if terminator == Token::Else {
        let (body, _) = parse_block(tokens, &[Token::End], line)?;
        Some(body)
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_body,
                       else_ifs,
                       else_body,
                       line })
}

/// Parses a numeric `for` statement after its `for` keyword has been
/// consumed.
///
/// Grammar: `for [local] <name> = <expr>, <expr> (, <expr>)? do <block>
/// end`. A missing step defaults to the literal `1`.
///
/// # Errors
/// Returns a `ParseError` if the loop head or body is malformed.
fn parse_for<'a, I>(tokens: &mut Peekable<I>, line: usize) -> core::ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let init = parse_for_init(tokens)?;
    utils::expect(tokens, &Token::Comma, "Expect ',' after for start value")?;
    let end = core::parse_expression(tokens)?;

    let step = if let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        core::parse_expression(tokens)?
    } else {
        Expr::Literal { value: LiteralValue::Number(1.0),
                        line }
    };

    utils::expect(tokens, &Token::Do, "Expect keyword \"do\"")?;
    let (body, _) = parse_block(tokens, &[Token::End], line)?;

    Ok(Statement::For { init,
                        end,
                        step,
                        body,
                        line })
}

/// Parses the induction-variable assignment at the head of a `for` loop.
fn parse_for_init<'a, I>(tokens: &mut Peekable<I>) -> core::ParseResult<ForInit>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let local = if let Some((Token::Local, _)) = tokens.peek() {
        tokens.next();
        true
    } else {
        false
    };

    let line = utils::peek_line(tokens);
    let name = utils::parse_identifier(tokens)?;
    utils::expect(tokens, &Token::Equals, "Expect '=' after for variable")?;
    let value = core::parse_expression(tokens)?;

    Ok(ForInit { name,
                 local,
                 value,
                 line })
}

/// Parses a `while` statement after its `while` keyword has been consumed.
///
/// # Errors
/// Returns a `ParseError` if the condition, `do` keyword, or closing `end`
/// is missing.
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> core::ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = core::parse_expression(tokens)?;
    utils::expect(tokens, &Token::Do, "Expect keyword \"do\"")?;
    let (body, _) = parse_block(tokens, &[Token::End], line)?;

    Ok(Statement::While { condition,
                          body,
                          line })
}

/// Parses a `repeat` statement after its `repeat` keyword has been
/// consumed. The body runs until the `until` condition becomes truthy.
///
/// # Errors
/// Returns a `ParseError` if the body is not closed by `until` or the
/// condition is malformed.
fn parse_repeat<'a, I>(tokens: &mut Peekable<I>, line: usize) -> core::ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (body, _) = parse_block(tokens, &[Token::Until], line)?;
    let until = core::parse_expression(tokens)?;

    Ok(Statement::Repeat { body, until, line })
}

/// Parses a named function declaration, starting at its `function` keyword.
///
/// # Errors
/// Returns a `ParseError` if the name, parameter list, or body is
/// malformed.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> core::ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = utils::peek_line(tokens);
    tokens.next();

    let name = utils::parse_identifier(tokens)?;
    let params = utils::parse_parameters(tokens)?;
    let (body, _) = parse_block(tokens, &[Token::End], line)?;

    Ok(Statement::FunctionDeclaration { name,
                                        params,
                                        body,
                                        line })
}
