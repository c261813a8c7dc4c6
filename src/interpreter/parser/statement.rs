use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Token, TokenStream},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an assignment,
/// - an expression used as a statement.
///
/// Parsing is attempted in that order; if no assignment is present, the
/// input is parsed as an expression statement.
///
/// # Parameters
/// - `tokens`: Token stream over the line.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement(tokens: &mut TokenStream) -> ParseResult<Statement> {
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let offset = tokens.peek()?.map_or(0, |(_, o)| *o);
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr, offset })
}

/// Parses an assignment statement of the form `<identifier> = <expression>`.
///
/// The function performs a limited lookahead: an assignment is parsed only
/// if the next token is an identifier *and* the token after it is `=`.
/// Deciding on the second buffered token rather than peeking at raw
/// characters keeps the decision independent of whitespace between the name
/// and the `=`.
///
/// If no assignment pattern matches, the function returns `Ok(None)` and
/// does not consume tokens; the leading identifier is then parsed as a
/// variable reference by the expression grammar.
///
/// # Parameters
/// - `tokens`: Token stream positioned at a potential identifier.
///
/// # Returns
/// - `Ok(Some(Statement::Assignment))` if an assignment is parsed,
/// - `Ok(None)` if no assignment is present.
///
/// # Errors
/// Returns a `ParseError` if the assigned expression fails to parse.
fn parse_assignment(tokens: &mut TokenStream) -> ParseResult<Option<Statement>> {
    if let Some((Token::Identifier(_), _)) = tokens.peek()?
       && let Some((Token::Equals, _)) = tokens.peek_second()?
    {
        let (name, offset) = if let Some((Token::Identifier(n), o)) = tokens.advance()? {
            (n, o)
        } else {
            unreachable!()
        };
        tokens.advance()?; // '='

        let value = parse_expression(tokens)?;
        return Ok(Some(Statement::Assignment { name, value, offset }));
    }
    Ok(None)
}
