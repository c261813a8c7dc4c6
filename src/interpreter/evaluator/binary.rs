use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a binary arithmetic operation.
    ///
    /// The function handles integer and real operands. For `+`, `-` and `*`,
    /// two integers produce an integer and any real operand promotes the
    /// operation to reals. Division is always true division: both operands
    /// are taken as reals and the result is `Value::Real`, so `5 / 2` is
    /// `2.5` and `4 / 2` is `2.0`. A right operand equal to zero, integer or
    /// real, is checked before dividing.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `offset`: Character offset of the operator, for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use tinycalc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let x = Value::Integer(5);
    /// let y = Value::Integer(2);
    /// let offset = 0;
    ///
    /// let result = Context::eval_binary(BinaryOperator::Div, &x, &y, offset).unwrap();
    /// assert_eq!(result, Value::Real(2.5));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       offset: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Integer, Real};

        if op == Div {
            let divisor = right.as_real();
            if divisor == 0.0 {
                return Err(RuntimeError::DivisionByZero { offset });
            }
            return Ok(Real(left.as_real() / divisor));
        }

        match (left, right) {
            (Integer(a), Integer(b)) => Ok(Integer(match op {
                                               Add => a + b,
                                               Sub => a - b,
                                               Mul => a * b,
                                               Div => unreachable!(),
                                           })),
            _ => {
                let left = left.as_real();
                let right = right.as_real();

                Ok(Real(match op {
                            Add => left + right,
                            Sub => left - right,
                            Mul => left * right,
                            Div => unreachable!(),
                        }))
            },
        }
    }
}
