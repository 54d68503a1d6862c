use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        environment::Env,
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation node.
    ///
    /// Both operands are always evaluated, left first, before the operator is
    /// applied. This holds for `و` and `أو` too: neither short-circuits.
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The operator.
    /// - `right`: Right operand expression.
    /// - `line`: Line number for error reporting.
    /// - `env`: The scope the operands are evaluated in.
    ///
    /// # Returns
    /// The result of applying `op` to both operand values.
    pub(in crate::interpreter::evaluator) fn eval_binary_op(&mut self,
                                                            left: &Expr,
                                                            op: BinaryOperator,
                                                            right: &Expr,
                                                            line: usize,
                                                            env: &Env)
                                                            -> EvalResult<Value> {
        let left = self.eval(left, env)?;
        let right = self.eval(right, env)?;

        Self::eval_binary(op, &left, &right, line)
    }

    /// Applies a binary operator to two values.
    ///
    /// Arithmetic goes to `eval_arithmetic`, comparisons to
    /// `eval_comparison` and the logical operators to `eval_logic`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use wisam::{
    ///     Interpreter,
    ///     ast::BinaryOperator,
    ///     interpreter::value::core::Value,
    /// };
    ///
    /// let sum = Interpreter::eval_binary(BinaryOperator::Add, &Value::Number(3.0), &Value::Number(4.0), 1);
    /// assert_eq!(sum.unwrap(), Value::Number(7.0));
    ///
    /// let text = Interpreter::eval_binary(BinaryOperator::Add, &Value::from("ع"), &Value::Number(1.0), 1);
    /// assert_eq!(text.unwrap(), Value::from("ع1"));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or, Pow, Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod | Pow => Self::eval_arithmetic(op, left, right, line),
            Less | Greater | LessEqual | GreaterEqual | Equal | NotEqual => {
                Self::eval_comparison(op, left, right, line)
            },
            And | Or => Ok(Self::eval_logic(op, left, right)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::run_source;

    #[test]
    fn logical_operators_evaluate_both_sides() {
        let source = "ليكن عداد = 0\n\
                      دالة لمس\nعداد += 1\nأعد صحيح\nانتهى\n\
                      ليكن أ = خطأ و لمس 0\n\
                      ليكن ب = صحيح أو لمس 0\n\
                      اكتب عداد";
        let outcome = run_source(source).unwrap();

        assert!(outcome.success, "{:?}", outcome.errors);
        assert_eq!(outcome.output, ["2"]);
    }

    #[test]
    fn left_operand_errors_first() {
        let outcome = run_source("اكتب أ + ب").unwrap();

        assert_eq!(outcome.errors, ["Error on line 1: Unknown variable 'أ'."]);
    }
}
