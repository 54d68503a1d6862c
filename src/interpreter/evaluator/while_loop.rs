use crate::{
    ast::{Expr, Program},
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Executes a `طالما` loop.
    ///
    /// The condition is re-evaluated before every iteration and the loop ends
    /// as soon as it is falsy. One scope is created for the whole loop; the
    /// condition and the body both run in it.
    ///
    /// There is no iteration limit.
    ///
    /// # Parameters
    /// - `condition`: Tested for truthiness before each iteration.
    /// - `body`: The loop body.
    /// - `env`: The enclosing scope.
    ///
    /// # Returns
    /// `Flow::Returned` if the body returned, otherwise `Flow::Normal`.
    pub(super) fn exec_while(&mut self, condition: &Expr, body: &Program, env: &Env) -> EvalResult<Flow> {
        let scope = Environment::child(env);

        while self.eval(condition, &scope)?.is_truthy() {
            match self.exec_block(body, &scope)? {
                Flow::Broke => break,
                Flow::Returned(value) => return Ok(Flow::Returned(value)),
                Flow::Normal(_) | Flow::Continued => {},
            }
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
    fn condition_is_rechecked_each_iteration() {
        assert_eq!(output("ليكن ع = 0\nطالما ع < 3\nاكتب ع\nع = ع + 1\nانتهى"),
                   ["0", "1", "2"]);
    }

    #[test]
    fn break_ends_the_loop_at_the_expected_iteration() {
        let source = "ليكن ع = 0\n\
                      طالما صحيح\n\
                      ع += 1\n\
                      إذا ع == 4 إذن توقف انتهى\n\
                      انتهى\n\
                      اكتب ع";

        assert_eq!(output(source), ["4"]);
    }

    #[test]
    fn continue_skips_only_the_rest_of_the_iteration() {
        let source = "ليكن ع = 0\n\
                      طالما ع < 5\n\
                      ع += 1\n\
                      إذا ع % 2 == 0 إذن استمر انتهى\n\
                      اكتب ع\n\
                      انتهى";

        assert_eq!(output(source), ["1", "3", "5"]);
    }

    #[test]
    fn break_leaves_only_the_innermost_loop() {
        let source = "لكل أ من 1 إلى 2\n\
                      ليكن ب = 0\n\
                      طالما صحيح\n\
                      ب += 1\n\
                      إذا ب > 1 إذن توقف انتهى\n\
                      انتهى\n\
                      اكتب أ * 10 + ب\n\
                      انتهى";

        assert_eq!(output(source), ["12", "22"]);
    }

    #[test]
    fn declarations_in_the_body_stay_in_the_loop() {
        let outcome = run_source("ليكن ع = 0\nطالما ع < 1\nليكن داخلي = 1\nع += 1\nانتهى\nاكتب داخلي")
            .unwrap();

        assert_eq!(outcome.errors, ["Error on line 6: Unknown variable 'داخلي'."]);
    }
}
