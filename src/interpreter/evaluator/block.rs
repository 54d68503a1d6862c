use crate::{
    ast::{Expr, Program},
    interpreter::{
        environment::Env,
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Executes the statements of a block in order.
    ///
    /// Execution stops at the first statement that does not finish normally,
    /// and that flow is returned so an enclosing loop or call can act on it.
    ///
    /// # Parameters
    /// - `program`: The block to run.
    /// - `env`: The scope to run it in. Blocks do not open a scope of their
    ///   own.
    ///
    /// # Returns
    /// `Flow::Normal` with the value of the last statement (or `فارغ` for an
    /// empty block), or the first non-normal flow.
    pub fn exec_block(&mut self, program: &Program, env: &Env) -> EvalResult<Flow> {
        let mut last = Value::Null;

        for statement in &program.statements {
            match self.exec_statement(statement, env)? {
                Flow::Normal(value) => last = value,
                flow => return Ok(flow),
            }
        }

        Ok(Flow::Normal(last))
    }

    /// Executes an `إذا` statement.
    ///
    /// The branches run in the current scope; a variable declared inside a
    /// branch stays visible after the statement.
    ///
    /// # Parameters
    /// - `condition`: Tested for truthiness.
    /// - `then_branch`: Runs when the condition holds.
    /// - `else_branch`: Runs otherwise, if present.
    /// - `env`: The current scope.
    pub(super) fn exec_if(&mut self,
                          condition: &Expr,
                          then_branch: &Program,
                          else_branch: Option<&Program>,
                          env: &Env)
                          -> EvalResult<Flow> {
        if self.eval(condition, env)?.is_truthy() {
            self.exec_block(then_branch, env)
        } else if let Some(else_branch) = else_branch {
            self.exec_block(else_branch, env)
        } else {
            Ok(Flow::Normal(Value::Null))
        }
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
    fn if_takes_the_then_branch() {
        assert_eq!(output("إذا صحيح إذن اكتب \"a\" وإلا اكتب \"b\" انتهى"), ["a"]);
    }

    #[test]
    fn if_takes_the_else_branch() {
        assert_eq!(output("إذا 0 إذن اكتب \"a\" وإلا اكتب \"b\" انتهى"), ["b"]);
    }

    #[test]
    fn if_without_else_does_nothing_when_false() {
        assert_eq!(output("إذا فارغ إذن اكتب 1 انتهى\nاكتب 2"), ["2"]);
    }

    #[test]
    fn branches_share_the_enclosing_scope() {
        assert_eq!(output("إذا صحيح إذن\nليكن س = 5\nانتهى\nاكتب س"), ["5"]);
    }

    #[test]
    fn else_if_chains_nest() {
        let source = "ليكن ن = 2\n\
                      إذا ن == 1 إذن\n  اكتب \"واحد\"\n\
                      وإلا\n  إذا ن == 2 إذن\n    اكتب \"اثنان\"\n  وإلا\n    اكتب \"غير ذلك\"\n  انتهى\n\
                      انتهى";

        assert_eq!(output(source), ["اثنان"]);
    }
}
