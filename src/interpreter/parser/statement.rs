use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        evaluator::utils::is_reserved_identifier,
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_identifier},
        },
    },
};

/// Parses a single statement, including its terminating `;`.
///
/// A statement may be one of:
/// - a matrix declaration (`matrix A = ...;`),
/// - a print statement (`print(...);`),
/// - an assignment (`x = ...;`),
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, l)| *l);

    let statement = if let Some(statement) = parse_matrix_declaration(tokens)? {
        statement
    } else if let Some(statement) = parse_print(tokens)? {
        statement
    } else if let Some(statement) = parse_assignment(tokens)? {
        statement
    } else {
        let expr = parse_expression(tokens, line)?;
        Statement::Expression { expr, line }
    };

    expect(tokens, &Token::Semicolon, line, |line| ParseError::ExpectedSemicolon { line })?;

    Ok(statement)
}

/// Parses a matrix declaration of the form `matrix <identifier> = <expression>`.
///
/// If the next token is not `matrix`, this function returns `Ok(None)` and
/// does not consume any input.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is reserved,
/// - `=` is missing,
/// - the expression is malformed.
fn parse_matrix_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Matrix, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    let (name, _) = parse_identifier(tokens, line)?;
    if is_reserved_identifier(&name) {
        return Err(ParseError::IdentifierReserved { name, line });
    }

    expect(tokens, &Token::Equals, line, |line| {
        ParseError::UnexpectedToken { token: "Expected '=' after the matrix name".to_string(),
                                      line }
    })?;

    let value = parse_expression(tokens, line)?;

    Ok(Some(Statement::MatrixDeclaration { name, value, line }))
}

/// Parses a print statement of the form `print(<expression>)`.
///
/// If the next token is not `print`, this function returns `Ok(None)` and
/// does not consume any input.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Print, line)) = tokens.peek() else {
        return Ok(None);
    };
    let line = *line;
    tokens.next();

    expect(tokens, &Token::LParen, line, |line| {
        ParseError::UnexpectedToken { token: "Expected '(' after print".to_string(),
                                      line }
    })?;
    let expr = parse_expression(tokens, line)?;
    expect(tokens, &Token::RParen, line, |line| ParseError::ExpectedClosingParen { line })?;

    Ok(Some(Statement::Print { expr, line }))
}

/// Parses an assignment of the form `<identifier> = <expression>`.
///
/// Looks two tokens ahead on a cloned iterator; unless they are an
/// identifier followed by `=`, returns `Ok(None)` without consuming input.
///
/// # Errors
/// Returns a `ParseError` if the identifier is reserved or the expression is
/// malformed.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let (Some((Token::Identifier(_), line)), Some((Token::Equals, _))) =
        (lookahead.next(), lookahead.next())
    else {
        return Ok(None);
    };

    let (name, line) = parse_identifier(tokens, *line)?;
    if is_reserved_identifier(&name) {
        return Err(ParseError::IdentifierReserved { name, line });
    }
    tokens.next();

    let value = parse_expression(tokens, line)?;

    Ok(Some(Statement::Assignment { name, value, line }))
}
