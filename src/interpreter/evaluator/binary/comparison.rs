use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a comparison of the form `Value <Operator> Value`.
    ///
    /// `==` and `!=` accept any two values: different kinds are never equal,
    /// and arrays and functions are only equal to themselves. The relational
    /// operators need two numbers.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean result.
    ///
    /// # Example
    /// ```
    /// use wisam::{Interpreter, ast::BinaryOperator, interpreter::value::core::Value};
    ///
    /// let result = Interpreter::eval_comparison(BinaryOperator::Less, &Value::Number(3.0), &Value::Number(5.0), 1);
    /// assert_eq!(result.unwrap(), Value::Bool(true));
    ///
    /// let result = Interpreter::eval_comparison(BinaryOperator::Equal, &Value::from("1"), &Value::Number(1.0), 1);
    /// assert_eq!(result.unwrap(), Value::Bool(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        if matches!(op, Equal | NotEqual) {
            return Ok(Value::Bool((left == right) == (op == Equal)));
        }

        let operation = format!("'{op}'");
        let l = left.as_number(&operation, line)?;
        let r = right.as_number(&operation, line)?;

        Ok(Value::Bool(match op {
                           Less => l < r,
                           Greater => l > r,
                           LessEqual => l <= r,
                           GreaterEqual => l >= r,
                           _ => {
                               return Err(RuntimeError::TypeError { details: format!("{op} is not a comparison"),
                                                                    line });
                           },
                       }))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{ast::BinaryOperator, interpreter::value::core::Value, run_source, Interpreter};

    fn compare(op: BinaryOperator, left: &Value, right: &Value) -> bool {
        match Interpreter::eval_comparison(op, left, right, 1).unwrap() {
            Value::Bool(b) => b,
            other => panic!("expected a boolean, found {other}"),
        }
    }

    #[test]
    fn relational_operators() {
        let one = Value::Number(1.0);
        let two = Value::Number(2.0);

        assert!(compare(BinaryOperator::Less, &one, &two));
        assert!(!compare(BinaryOperator::Greater, &one, &two));
        assert!(compare(BinaryOperator::LessEqual, &two, &two));
        assert!(compare(BinaryOperator::GreaterEqual, &two, &one));
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        let nan = Value::Number(f64::NAN);

        assert!(!compare(BinaryOperator::Equal, &nan, &nan));
        assert!(compare(BinaryOperator::NotEqual, &nan, &nan));
    }

    #[test]
    fn different_kinds_are_never_equal() {
        assert!(!compare(BinaryOperator::Equal, &Value::Number(0.0), &Value::Bool(false)));
        assert!(!compare(BinaryOperator::Equal, &Value::Null, &Value::from("")));
        assert!(compare(BinaryOperator::Equal, &Value::Null, &Value::Null));
    }

    #[test]
    fn arrays_compare_by_identity() {
        let outcome = run_source("ليكن أ = [1]\nليكن ب = أ\nاكتب أ == ب\nاكتب أ == [1]").unwrap();

        assert_eq!(outcome.output, ["صحيح", "خطأ"]);
    }

    #[test]
    fn relational_operators_need_numbers() {
        let error = Interpreter::eval_comparison(BinaryOperator::Less, &Value::from("أ"), &Value::from("ب"), 4)
            .unwrap_err();

        assert_eq!(error.to_string(),
                   "Error on line 4: Type error: '<' expects a number, found string.");
    }
}
