/// Entry points for parsing.
///
/// Contains the parse-result alias, the whole-line entry point, and the
/// top of the expression precedence hierarchy.
pub mod core;

/// Statement parsing.
///
/// Tells assignments apart from expression statements using two tokens of
/// lookahead.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels: additive
/// (`+`, `-`) and multiplicative (`*`, `/`).
pub mod binary;

/// Primary expression parsing.
///
/// Handles the atoms of the grammar: integer literals, parenthesized
/// groupings, and variable references.
pub mod primary;
