use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            literal::{parse_matrix_literal, parse_number},
            statement::parse_statement,
            utils::parse_comma_separated,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program from its tokens.
///
/// Grammar: `program := statement*`
///
/// # Example
/// ```
/// use matlang::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("matrix A = [[1, 2]]; print(A);").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        statements.push(parse_statement(&mut iter)?);
    }

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// `+` and `-` are left associative and share one precedence level.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `line`: Line of the last token consumed before the expression, reported
///   if the input ends early.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_term(tokens, line)?;

    loop {
        let (op, line) = match tokens.peek() {
            Some((Token::Plus, line)) => (BinaryOperator::Add, *line),
            Some((Token::Minus, line)) => (BinaryOperator::Sub, *line),
            _ => break,
        };
        tokens.next();

        let right = parse_term(tokens, line)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line };
    }

    Ok(left)
}

/// Parses a single operand of an expression.
///
/// Grammar:
/// ```text
/// term := IDENT "(" (expression ("," expression)*)? ")"
///       | IDENT
///       | number
///       | matrix_literal
///       | "(" expression ")"
/// ```
fn parse_term<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Identifier(name), line)) => {
            let (name, line) = (name.clone(), *line);
            tokens.next();

            if let Some((Token::LParen, paren_line)) = tokens.peek() {
                let paren_line = *paren_line;
                tokens.next();
                let arguments =
                    parse_comma_separated(tokens, parse_expression, &Token::RParen, paren_line)?;
                return Ok(Expr::FunctionCall { name,
                                               arguments,
                                               line });
            }

            Ok(Expr::Identifier { name, line })
        },
        Some((Token::Integer(_) | Token::Real(_) | Token::Minus, line)) => {
            let line = *line;
            let value = parse_number(tokens, line)?;
            Ok(Expr::Number { value, line })
        },
        Some((Token::LBracket, _)) => Ok(Expr::MatrixLiteral(parse_matrix_literal(tokens, line)?)),
        Some((Token::LParen, line)) => {
            let line = *line;
            tokens.next();
            let inner = parse_expression(tokens, line)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(inner),
                _ => Err(ParseError::ExpectedClosingParen { line }),
            }
        },
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected an expression, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
