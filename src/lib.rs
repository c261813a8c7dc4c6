//! # tinycalc
//!
//! tinycalc is a line-oriented interpreter for a tiny arithmetic language
//! with variables. Each input line holds either an expression over integers,
//! `+ - * /` and parentheses, or an assignment `name = expr`; variables
//! persist across lines within one session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::Context, lexer::TokenStream, parser::core::parse_line, value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of an input line as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches character offsets to AST nodes for error reporting.
/// - Keeps the node set closed, so the evaluator's dispatch is exhaustive
///   and checked at compile time.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating a line, plus the [`EvalError`] sum type wrapping the two
/// phases. Every error carries the 0-based character offset it arose at.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches offsets and detailed payloads for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of line evaluation.
///
/// This module ties together lexing, parsing, evaluation, and the value
/// representation to provide a complete runtime for one line of input.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates one line of input against a session's variable store.
///
/// The line is tokenized and parsed into a single statement, then evaluated.
/// An expression line yields `Some(value)`; an assignment line mutates
/// `context` and yields `None`. Any error aborts the line immediately and
/// leaves the store exactly as it was, so the caller can report it and keep
/// accepting further lines.
///
/// Evaluating a pure expression twice against an unchanged store returns the
/// same value; there is no hidden state beyond the variable store.
///
/// # Errors
/// Returns an [`EvalError`] when the line fails to tokenize, parse, or
/// evaluate.
///
/// # Examples
/// ```
/// use tinycalc::{evaluate_line, interpreter::{evaluator::core::Context, value::Value}};
///
/// let mut context = Context::new();
///
/// // An assignment mutates the store and yields no value.
/// let res = evaluate_line("x = 2 + 3", &mut context);
/// assert_eq!(res.unwrap(), None);
///
/// // A later expression line sees the stored variable.
/// let res = evaluate_line("x * 4", &mut context);
/// assert_eq!(res.unwrap(), Some(Value::Integer(20)));
///
/// // Example with an intentional error (unknown variable).
/// let res = evaluate_line("y + 1", &mut context); // 'y' is not defined
/// assert!(res.is_err());
/// ```
pub fn evaluate_line(source: &str, context: &mut Context) -> Result<Option<Value>, EvalError> {
    let mut tokens = TokenStream::new(source);
    let statement = parse_line(&mut tokens)?;
    Ok(context.eval_statement(&statement)?)
}
