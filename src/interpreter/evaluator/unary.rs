use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation. Any other kind is a type error.
    /// - `Not`: the negated truthiness of any value.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use wisam::{Interpreter, ast::UnaryOperator, interpreter::value::core::Value};
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Negate, &Value::Number(5.0), 1).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Not, &Value::from(""), 1).unwrap();
    /// assert_eq!(v, Value::Bool(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => Ok(Value::Number(-value.as_number("negation", line)?)),
            UnaryOperator::Not => Ok(Value::Bool(!value.is_truthy())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::run_source;

    #[test]
    fn negation_needs_a_number() {
        let outcome = run_source("اكتب -\"نص\"").unwrap();

        assert_eq!(outcome.errors,
                   ["Error on line 1: Type error: negation expects a number, found string."]);
    }

    #[test]
    fn not_keyword_and_bang_agree() {
        let outcome = run_source("اكتب ليس 0\nاكتب !1\nاكتب - -2").unwrap();

        assert_eq!(outcome.output, ["صحيح", "خطأ", "2"]);
    }
}
