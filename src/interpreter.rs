/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs the arithmetic operations, and manages variable state. It is the
/// core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Owns the session's variable store and mutates it on assignment.
/// - Reports runtime errors such as division by zero or reads of unassigned
///   variables.
pub mod evaluator;
/// The lexer module tokenizes one input line for further parsing.
///
/// The lexer (tokenizer) reads the raw line text and produces a stream of
/// tokens, each corresponding to a meaningful language element: integer
/// literals, identifiers, operators, and parentheses. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, payload, and
///   character offset.
/// - Skips whitespace; it is never emitted as a token.
/// - Reports lexical errors for characters outside the language.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer on demand and constructs an AST
/// representing the single statement on the line. It performs no recovery:
/// the first structural violation aborts the whole line's parse.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, reporting errors with the offending position.
/// - Distinguishes assignments from expressions with two tokens of
///   lookahead.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types produced during execution: 64-bit
/// integers and double-precision reals, with promotion from integer to real
/// where an operation requires it.
pub mod value;
