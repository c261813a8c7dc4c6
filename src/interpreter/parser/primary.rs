use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, TokenStream},
        parser::core::{ParseResult, parse_expression},
    },
};

/// The token kinds that can begin a primary expression.
const PRIMARY_START: &[TokenKind] = &[TokenKind::Integer, TokenKind::LParen, TokenKind::Identifier];

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer literals
/// - parenthesized expressions
/// - variable references
///
/// This function dispatches to specialized parsing functions depending on
/// the leading token. There are no unary operators in the grammar, so a
/// leading `-` is a syntax error here rather than a negative literal.
///
/// Grammar:
/// ```text
///     primary := INTEGER
///              | "(" expression ")"
///              | IDENTIFIER
/// ```
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary(tokens: &mut TokenStream) -> ParseResult<Expr> {
    let Some((token, offset)) = tokens.peek()? else {
        return Err(ParseError::UnexpectedToken { expected: PRIMARY_START,
                                                 found:    TokenKind::EndOfInput,
                                                 offset:   tokens.end_offset(), });
    };

    match token {
        Token::Integer(_) => parse_literal(tokens),
        Token::LParen => parse_grouping(tokens),
        Token::Identifier(_) => parse_variable(tokens),
        other => Err(ParseError::UnexpectedToken { expected: PRIMARY_START,
                                                   found:    other.kind(),
                                                   offset:   *offset, }),
    }
}

/// Parses an integer literal.
///
/// # Parameters
/// - `tokens`: Token stream positioned at an integer token.
///
/// # Returns
/// An [`Expr::Literal`] containing the parsed value.
fn parse_literal(tokens: &mut TokenStream) -> ParseResult<Expr> {
    match tokens.advance()? {
        Some((Token::Integer(value), offset)) => Ok(Expr::Literal { value, offset }),
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
///
/// # Errors
/// Returns `UnexpectedToken` naming `)` if the group is not closed.
fn parse_grouping(tokens: &mut TokenStream) -> ParseResult<Expr> {
    tokens.advance()?; // '('
    let expr = parse_expression(tokens)?;
    match tokens.advance()? {
        Some((Token::RParen, _)) => Ok(expr),
        Some((token, offset)) => {
            Err(ParseError::UnexpectedToken { expected: &[TokenKind::RParen],
                                              found:    token.kind(),
                                              offset, })
        },
        None => Err(ParseError::UnexpectedToken { expected: &[TokenKind::RParen],
                                                  found:    TokenKind::EndOfInput,
                                                  offset:   tokens.end_offset(), }),
    }
}

/// Parses a variable reference.
///
/// An identifier in a non-assignment position always refers to a variable;
/// whether it is defined is decided at evaluation time, not here.
///
/// # Parameters
/// - `tokens`: Token stream positioned at an identifier.
///
/// # Returns
/// An [`Expr::Variable`] carrying the name.
fn parse_variable(tokens: &mut TokenStream) -> ParseResult<Expr> {
    match tokens.advance()? {
        Some((Token::Identifier(name), offset)) => Ok(Expr::Variable { name, offset }),
        _ => unreachable!(),
    }
}
