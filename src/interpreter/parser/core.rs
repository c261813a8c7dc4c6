use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{TokenKind, TokenStream},
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one full input line.
///
/// This is the entry point for the parser. It parses a single statement and
/// then requires the line to be exhausted; anything left over after a
/// complete statement is a syntax error.
///
/// Grammar: `line := statement END_OF_INPUT`
///
/// # Parameters
/// - `tokens`: Token stream over the line.
///
/// # Returns
/// The parsed statement node.
///
/// # Errors
/// - `UnexpectedToken` with `expected: [EndOfInput]` if tokens trail the
///   statement.
/// - Propagates any error from statement parsing.
pub fn parse_line(tokens: &mut TokenStream) -> ParseResult<Statement> {
    let statement = parse_statement(tokens)?;

    match tokens.advance()? {
        None => Ok(statement),
        Some((token, offset)) => {
            Err(ParseError::UnexpectedToken { expected: &[TokenKind::EndOfInput],
                                              found:    token.kind(),
                                              offset, })
        },
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token stream over the line.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(tokens: &mut TokenStream) -> ParseResult<Expr> {
    parse_additive(tokens)
}
