/// Represents a runtime value in the interpreter.
///
/// This enum models the two numeric types a line can produce or a variable
/// can hold: integers from literals and from `+ - *` over integers, and
/// reals from division, which is always true division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// Used when an operation promotes to real arithmetic: division always
    /// does, and the other operators do when either operand is already real.
    ///
    /// # Example
    /// ```
    /// use tinycalc::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(3).as_real(), 3.0);
    /// assert_eq!(Value::Real(2.5).as_real(), 2.5);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
