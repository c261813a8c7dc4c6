use std::collections::VecDeque;

use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; variable names such as `x` or `total_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
}

impl Token {
    /// Returns the kind of `self`, with payloads stripped.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Identifier(_) => TokenKind::Identifier,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Equals => TokenKind::Equals,
        }
    }
}

/// The kind of a [`Token`], without its payload.
///
/// Used in error reporting, where the parser names the token kinds it
/// expected against the kind it found. Unlike [`Token`], this enum has a
/// variant for the end of the input line, which the token stream represents
/// as the absence of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An integer literal.
    Integer,
    /// A variable name.
    Identifier,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `=`
    Equals,
    /// The end of the input line.
    EndOfInput,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Integer => "an integer",
            Self::Identifier => "an identifier",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Equals => "'='",
            Self::EndOfInput => "end of input",
        };
        write!(f, "{text}")
    }
}

/// A pull-based stream of tokens over one input line.
///
/// The parser consumes tokens one at a time, so tokenizing and parsing are
/// interleaved; the token sequence is never materialized up front. At most
/// two tokens are buffered, which is exactly the lookahead the grammar
/// needs: one token everywhere, plus a second to tell an assignment
/// (`name = ...`) apart from an expression that starts with a variable.
///
/// Each yielded item pairs the token with its 0-based character offset in
/// the line. Exhaustion of the stream (`None`) stands for the end of the
/// input; no explicit token is emitted for it.
pub struct TokenStream<'src> {
    lexer:     logos::Lexer<'src, Token>,
    lookahead: VecDeque<(Token, usize)>,
    end:       usize,
}

impl<'src> TokenStream<'src> {
    /// Creates a token stream over the full text of one input line.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:     Token::lexer(source),
               lookahead: VecDeque::new(),
               end:       source.len(), }
    }

    /// Returns the next token without consuming it.
    ///
    /// # Errors
    /// Returns a `ParseError` if the underlying text fails to tokenize.
    pub fn peek(&mut self) -> Result<Option<&(Token, usize)>, ParseError> {
        self.buffer(1)?;
        Ok(self.lookahead.front())
    }

    /// Returns the token after the next one without consuming anything.
    ///
    /// # Errors
    /// Returns a `ParseError` if the underlying text fails to tokenize.
    pub fn peek_second(&mut self) -> Result<Option<&(Token, usize)>, ParseError> {
        self.buffer(2)?;
        Ok(self.lookahead.get(1))
    }

    /// Consumes and returns the next token, or `None` at the end of input.
    ///
    /// # Errors
    /// Returns a `ParseError` if the underlying text fails to tokenize.
    pub fn advance(&mut self) -> Result<Option<(Token, usize)>, ParseError> {
        self.buffer(1)?;
        Ok(self.lookahead.pop_front())
    }

    /// The offset just past the last character of the line.
    ///
    /// Used as the error position when the line ends earlier than the
    /// grammar allows.
    #[must_use]
    pub const fn end_offset(&self) -> usize {
        self.end
    }

    /// Pulls tokens from the lexer until `depth` are buffered or the input
    /// is exhausted.
    fn buffer(&mut self, depth: usize) -> Result<(), ParseError> {
        while self.lookahead.len() < depth {
            match self.lexer.next() {
                Some(Ok(token)) => {
                    let offset = self.lexer.span().start;
                    self.lookahead.push_back((token, offset));
                },
                Some(Err(())) => return Err(self.lex_error()),
                None => break,
            }
        }
        Ok(())
    }

    /// Builds the error for the slice the lexer rejected.
    ///
    /// The only multi-character slice that can fail is a digit run whose
    /// value overflows `i64`; any other failure is a single character the
    /// language does not know.
    fn lex_error(&self) -> ParseError {
        let slice = self.lexer.slice();
        let offset = self.lexer.span().start;
        if slice.bytes().all(|b| b.is_ascii_digit()) && !slice.is_empty() {
            return ParseError::LiteralTooLarge { offset };
        }
        ParseError::UnrecognizedCharacter { character: slice.chars().next().unwrap_or_default(),
                                            offset }
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the digit run does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
