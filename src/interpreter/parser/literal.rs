use std::iter::Peekable;

use crate::{
    ast::{LiteralValue, MatrixLiteral, Row},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, utils::parse_comma_separated},
    },
};

/// Parses a matrix literal of the form `[[1, 2], [3, 4]]`.
///
/// An empty literal `[]` has no rows; `[[]]` has one empty row. Row lengths
/// are not compared here, the evaluator rejects irregular literals.
///
/// Grammar: `matrix_literal := "[" (row ("," row)*)? "]"`
///
/// `line` is the line of the last token consumed before the literal.
///
/// # Errors
/// Returns a `ParseError` if `[` is missing, a row fails to parse, or the
/// closing `]` is missing.
pub fn parse_matrix_literal<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<MatrixLiteral>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_open_bracket(tokens, line)?;
    let rows = parse_comma_separated(tokens, parse_row, &Token::RBracket, line)?;

    Ok(MatrixLiteral { rows, line })
}

/// Parses one row of a matrix literal.
///
/// Grammar: `row := "[" (number ("," number)*)? "]"`
fn parse_row<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Row>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect_open_bracket(tokens, line)?;
    let elements = parse_comma_separated(tokens, parse_number, &Token::RBracket, line)?;

    Ok(Row { elements, line })
}

/// Parses a numeric literal with an optional leading minus sign.
///
/// Integer tokens carry their magnitude, so `-9223372036854775808` is
/// accepted while its positive counterpart is not.
///
/// Grammar: `number := "-"? (INTEGER | REAL)`
///
/// # Errors
/// Returns a `ParseError` if no integer or real literal follows, or if the
/// signed integer does not fit in an `i64`.
pub fn parse_number<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<LiteralValue>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (negative, line) = if let Some((Token::Minus, minus_line)) = tokens.peek() {
        let minus_line = *minus_line;
        tokens.next();
        (true, minus_line)
    } else {
        (false, line)
    };

    match tokens.next() {
        Some((Token::Integer(magnitude), line)) => {
            let value = if negative {
                0_i64.checked_sub_unsigned(*magnitude)
            } else {
                i64::try_from(*magnitude).ok()
            };
            value.map(LiteralValue::Integer)
                 .ok_or(ParseError::LiteralTooLarge { line: *line })
        },
        Some((Token::Real(r), _)) => Ok(LiteralValue::Real(if negative { -r } else { *r })),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected a number, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

fn expect_open_bracket<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::LBracket, line)) => Ok(*line),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected '[', found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
