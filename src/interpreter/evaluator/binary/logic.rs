use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Interpreter, value::core::Value},
};

impl Interpreter {
    /// Combines the truthiness of two already evaluated operands.
    ///
    /// The result is always a boolean, never one of the operands.
    ///
    /// # Parameters
    /// - `op`: `And` or `Or`. Any other operator is treated as `Or`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Example
    /// ```
    /// use wisam::{Interpreter, ast::BinaryOperator, interpreter::value::core::Value};
    ///
    /// let result = Interpreter::eval_logic(BinaryOperator::And, &Value::Number(3.0), &Value::from(""));
    /// assert_eq!(result, Value::Bool(false));
    /// ```
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Value {
        match op {
            BinaryOperator::And => Value::Bool(left.is_truthy() && right.is_truthy()),
            _ => Value::Bool(left.is_truthy() || right.is_truthy()),
        }
    }
}
