use std::collections::HashMap;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the mapping from variable names
/// to their last-assigned values. The store is created once per session and
/// survives across input lines; variable names are case-sensitive and there
/// is no way to remove one.
///
/// ## Usage
///
/// `Context` is created once and reused for evaluating every line of a
/// session. Constructing a fresh `Context` per test gives each test an
/// isolated store.
pub struct Context {
    variables: HashMap<String, Value>,
}

impl Context {
    /// Creates a new evaluation context with an empty variable store.
    #[must_use]
    pub fn new() -> Self {
        Self { variables: HashMap::new() }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: literals,
    /// variables, and binary operations. The walk is a single depth-first
    /// pass; for a binary operation the left operand is evaluated before the
    /// right, and both are always evaluated.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed [`Value`].
    ///
    /// # Errors
    /// - `UnknownVariable` for a read of a name never assigned.
    /// - `DivisionByZero` when the right operand of `/` evaluates to zero.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::Integer(*value)),
            Expr::Variable { name, offset } => self.eval_variable(name, *offset),
            Expr::BinaryOp { left,
                             op,
                             right,
                             offset, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *offset)
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// An expression statement yields its value. An assignment evaluates its
    /// right-hand side fully and only then stores the result, so a failing
    /// right-hand side leaves the store exactly as it was; it yields no
    /// value, which the driver treats as "nothing to print".
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for expression statements, `None` for assignments.
    ///
    /// # Errors
    /// Propagates any error from expression evaluation.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Expression { expr, .. } => Ok(Some(self.eval(expr)?)),
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.set_variable(name, value);
                Ok(None)
            },
        }
    }

    /// Looks up a variable read.
    ///
    /// Lookup is keyed on presence alone: a variable assigned `0` is defined.
    fn eval_variable(&self, name: &str, offset: usize) -> EvalResult<Value> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           offset })
    }

    /// Returns the current value of a variable, if one was ever assigned.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds a variable, unconditionally overwriting any prior value.
    pub fn set_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
