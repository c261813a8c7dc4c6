#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UnknownVariable {
        /// The name of the variable.
        name:   String,
        /// 0-based character offset in the input line.
        offset: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// 0-based character offset in the input line.
        offset: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, offset } => {
                write!(f, "Error at offset {offset}: Unknown variable '{name}'.")
            },
            Self::DivisionByZero { offset } => {
                write!(f, "Error at offset {offset}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
