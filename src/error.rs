/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// input line. Parse errors include unrecognized characters, grammar
/// violations, and oversized integer literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: reads of
/// unassigned variables and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced while evaluating one input line.
///
/// `EvalError` is the single error type returned by
/// [`evaluate_line`](crate::evaluate_line). It wraps the two phase-specific
/// error enums so callers can branch on the failing phase, and on the exact
/// error kind within it, without parsing message text. Every kind is
/// recoverable at line granularity: the variable store is left untouched by
/// a failing line.
#[derive(Debug)]
pub enum EvalError {
    /// The line failed to tokenize or parse.
    Parse(ParseError),
    /// The line parsed but failed to evaluate.
    Runtime(RuntimeError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
