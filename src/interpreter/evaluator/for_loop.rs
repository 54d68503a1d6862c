use crate::{
    ast::{Expr, Program},
    error::RuntimeError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Executes a `لكل` loop.
    ///
    /// Both bounds are evaluated once, before the first iteration, and must be
    /// numbers. The counter starts at `start` and grows by one while it is at
    /// most `end`, so both bounds are included.
    ///
    /// One scope is created for the whole loop and shared by every iteration.
    /// The loop variable is redefined in it from the counter at the start of
    /// each iteration, so assigning to it inside the body does not change how
    /// many times the loop runs. Closures created in the body all see that one
    /// shared binding.
    ///
    /// # Parameters
    /// - `var`: Loop variable name.
    /// - `start`: Expression for the first value.
    /// - `end`: Expression for the last value.
    /// - `body`: The loop body.
    /// - `line`: Line number for error reporting.
    /// - `env`: The enclosing scope.
    ///
    /// # Returns
    /// `Flow::Returned` if the body returned, otherwise `Flow::Normal`.
    ///
    /// # Errors
    /// `InvalidLoopBounds` if either bound is not a number.
    pub(super) fn exec_for(&mut self,
                           var: &str,
                           start: &Expr,
                           end: &Expr,
                           body: &Program,
                           line: usize,
                           env: &Env)
                           -> EvalResult<Flow> {
        let start = self.eval(start, env)?;
        let end = self.eval(end, env)?;

        let (Value::Number(start), Value::Number(end)) = (&start, &end) else {
            return Err(RuntimeError::InvalidLoopBounds { details: format!("expected two numbers, found {} and {}",
                                                                          start.type_name(),
                                                                          end.type_name()),
                                                         line });
        };

        let scope = Environment::child(env);
        let mut counter = *start;

        while counter <= *end {
            scope.borrow_mut().define(var, Value::Number(counter), false);

            match self.exec_block(body, &scope)? {
                Flow::Broke => break,
                Flow::Returned(value) => return Ok(Flow::Returned(value)),
                Flow::Normal(_) | Flow::Continued => {},
            }

            counter += 1.0;
        }

        Ok(Flow::Normal(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::run_source;

    fn output(source: &str) -> Vec<String> {
        let outcome = run_source(source).unwrap();
        assert!(outcome.success, "{:?}", outcome.errors);
        outcome.output
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(output("لكل س من 1 إلى 3 اكتب س انتهى"), ["1", "2", "3"]);
    }

    #[test]
    fn empty_range_runs_zero_times() {
        assert_eq!(output("لكل س من 5 إلى 1\nاكتب س\nانتهى\nاكتب \"تم\""), ["تم"]);
    }

    #[test]
    fn fractional_start_steps_by_one() {
        assert_eq!(output("لكل س من 0.5 إلى 2 اكتب س انتهى"), ["0.5", "1.5"]);
    }

    #[test]
    fn assigning_the_loop_variable_does_not_change_iterations() {
        assert_eq!(output("لكل س من 1 إلى 3\nس = 100\nاكتب س\nانتهى"),
                   ["100", "100", "100"]);
    }

    #[test]
    fn loop_variable_is_scoped_to_the_loop() {
        let outcome = run_source("لكل س من 1 إلى 2 انتهى\nاكتب س").unwrap();

        assert!(!outcome.success);
        assert_eq!(outcome.errors, ["Error on line 2: Unknown variable 'س'."]);
    }

    #[test]
    fn break_and_continue() {
        let source = "لكل س من 1 إلى 10\n\
                      إذا س == 2 إذن استمر انتهى\n\
                      إذا س == 4 إذن توقف انتهى\n\
                      اكتب س\n\
                      انتهى";

        assert_eq!(output(source), ["1", "3"]);
    }

    #[test]
    fn non_numeric_bounds_fail() {
        let outcome = run_source("لكل س من \"أ\" إلى 3 انتهى").unwrap();

        assert_eq!(outcome.errors,
                   ["Error on line 1: Invalid loop bounds: expected two numbers, found string and number."]);
    }

    #[test]
    fn closures_share_the_loop_binding() {
        let source = "ليكن آخر = فارغ\n\
                      لكل س من 1 إلى 3\n\
                      دالة قراءة\nأعد س\nانتهى\n\
                      آخر = قراءة\n\
                      انتهى\n\
                      اكتب آخر\n\
                      اكتب آخر 0";

        assert_eq!(output(source), ["<دالة قراءة>", "3"]);
    }
}
