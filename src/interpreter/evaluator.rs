/// Core evaluation logic for expressions and statements.
///
/// Contains the evaluation context, the variable store it owns, and the
/// tree-walking dispatch over AST variants.
pub mod core;

/// Binary operator evaluation.
///
/// Implements evaluation for the four arithmetic operations, including
/// numeric promotion and the division-by-zero check.
pub mod binary;
