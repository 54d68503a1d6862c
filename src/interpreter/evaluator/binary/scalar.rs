use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates an arithmetic operation.
    ///
    /// `+` concatenates the display forms of both operands when either of them
    /// is a string. Every other case needs two numbers.
    ///
    /// Division by zero is an error. Modulo by zero is not: it yields `NaN`,
    /// and so does any other IEEE-undefined result.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul`, `Div`, `Mod` or `Pow`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The resulting number or concatenated string.
    ///
    /// # Example
    /// ```
    /// use wisam::{Interpreter, ast::BinaryOperator, interpreter::value::core::Value};
    ///
    /// let r = Interpreter::eval_arithmetic(BinaryOperator::Pow, &Value::Number(2.0), &Value::Number(10.0), 1);
    /// assert_eq!(r.unwrap(), Value::Number(1024.0));
    ///
    /// let r = Interpreter::eval_arithmetic(BinaryOperator::Div, &Value::Number(5.0), &Value::Number(0.0), 1);
    /// assert!(r.is_err());
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        if op == Add
           && (matches!(left, Value::Str(_)) || matches!(right, Value::Str(_)))
        {
            return Ok(Value::from(format!("{left}{right}")));
        }

        let operation = format!("'{op}'");
        let l = left.as_number(&operation, line)?;
        let r = right.as_number(&operation, line)?;

        let result = match op {
            Add => l + r,
            Sub => l - r,
            Mul => l * r,
            Div => {
                if r == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                l / r
            },
            Mod => l % r,
            Pow => l.powf(r),
            _ => {
                return Err(RuntimeError::TypeError { details: format!("{op} is not an arithmetic operator"),
                                                     line });
            },
        };

        Ok(Value::Number(result))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::value::core::Value, Interpreter};

    fn arithmetic(op: BinaryOperator, left: Value, right: Value) -> Result<Value, RuntimeError> {
        Interpreter::eval_arithmetic(op, &left, &right, 3)
    }

    #[test]
    fn numbers() {
        assert_eq!(arithmetic(BinaryOperator::Sub, 7.0.into(), 2.5.into()).unwrap(),
                   Value::Number(4.5));
        assert_eq!(arithmetic(BinaryOperator::Mul, 3.0.into(), (-2.0).into()).unwrap(),
                   Value::Number(-6.0));
        assert_eq!(arithmetic(BinaryOperator::Mod, (-7.0).into(), 3.0.into()).unwrap(),
                   Value::Number(-1.0));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(arithmetic(BinaryOperator::Div, 5.0.into(), 0.0.into()),
                   Err(RuntimeError::DivisionByZero { line: 3 }));
    }

    #[test]
    fn modulo_by_zero_is_nan() {
        let Value::Number(n) = arithmetic(BinaryOperator::Mod, 5.0.into(), 0.0.into()).unwrap() else {
            panic!("expected a number");
        };
        assert!(n.is_nan());
    }

    #[test]
    fn plus_concatenates_display_forms() {
        assert_eq!(arithmetic(BinaryOperator::Add, 1.5.into(), "x".into()).unwrap(),
                   Value::from("1.5x"));
        assert_eq!(arithmetic(BinaryOperator::Add, "ع: ".into(), true.into()).unwrap(),
                   Value::from("ع: صحيح"));
        assert_eq!(arithmetic(BinaryOperator::Add, "".into(), Value::Null).unwrap(),
                   Value::from("فارغ"));
    }

    #[test]
    fn plus_without_strings_needs_numbers() {
        let error = arithmetic(BinaryOperator::Add, true.into(), 1.0.into()).unwrap_err();

        assert_eq!(error.to_string(),
                   "Error on line 3: Type error: '+' expects a number, found boolean.");
    }

    #[test]
    fn other_operators_reject_strings() {
        let error = arithmetic(BinaryOperator::Sub, "5".into(), 1.0.into()).unwrap_err();

        assert_eq!(error.to_string(),
                   "Error on line 3: Type error: '-' expects a number, found string.");
    }
}
