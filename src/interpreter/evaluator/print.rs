use crate::{
    ast::Statement,
    interpreter::{
        environment::Env,
        evaluator::core::{Flow, Interpreter},
        lexer::Lexer,
        parser::Parser,
        value::core::Value,
    },
};

impl Interpreter {
    /// Formats a value for `اكتب`.
    ///
    /// Strings have their `{...}` spans interpolated; every other value is
    /// printed in its display form.
    ///
    /// # Parameters
    /// - `value`: The evaluated operand of `اكتب`.
    /// - `env`: The scope interpolated spans are evaluated in.
    ///
    /// # Returns
    /// The line to append to the output.
    pub(super) fn format_for_print(&mut self, value: &Value, env: &Env) -> String {
        match value {
            Value::Str(text) => self.interpolate(text, env),
            other => other.to_string(),
        }
    }

    /// Replaces each `{fragment}` in `text` with the value of the fragment.
    ///
    /// A span ends at the first `}` after its `{` and must not be empty.
    /// Each fragment is lexed, parsed and its first statement executed in
    /// `env`, so it may be any expression, including a call. If that fails,
    /// the trimmed fragment is looked up as a plain variable name, and if
    /// that fails too the span is kept as written. Failures never abort the
    /// run.
    fn interpolate(&mut self, text: &str, env: &Env) -> String {
        let mut result = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(open) = rest.find('{') {
            result.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            match after.find('}') {
                Some(close) if close > 0 => {
                    let fragment = &after[..close];
                    match self.eval_fragment(fragment, env) {
                        Some(value) => result.push_str(&value.to_string()),
                        None => result.push_str(&rest[open..open + close + 2]),
                    }
                    rest = &after[close + 1..];
                },
                _ => {
                    result.push('{');
                    rest = after;
                },
            }
        }

        result.push_str(rest);
        result
    }

    /// Evaluates one interpolated fragment, falling back to a variable
    /// lookup of the trimmed fragment.
    fn eval_fragment(&mut self, fragment: &str, env: &Env) -> Option<Value> {
        let tokens = Lexer::new(fragment).tokenize();
        let (program, errors) = Parser::new(&tokens).parse();

        let evaluated = program.statements
                               .first()
                               .filter(|_| errors.is_empty())
                               .and_then(|statement| match statement {
                                   Statement::Expression { expr, .. } => self.eval(expr, env).ok(),
                                   statement => match self.exec_statement(statement, env).ok()? {
                                       Flow::Normal(value) | Flow::Returned(value) => Some(value),
                                       Flow::Broke | Flow::Continued => Some(Value::Null),
                                   },
                               });

        evaluated.or_else(|| {
                     tracing::trace!(fragment, "interpolation fell back to a variable lookup");
                     env.borrow().get(fragment.trim())
                 })
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
    fn interpolates_variables() {
        assert_eq!(output("ليكن س = 10\nاكتب \"القيمة: {س}\""), ["القيمة: 10"]);
    }

    #[test]
    fn interpolates_expressions_and_calls() {
        assert_eq!(output("ليكن س = 4\nاكتب \"{س * 2}، {جذر س}، { س + 1 }\""),
                   ["8، 2، 5"]);
    }

    #[test]
    fn unknown_names_stay_as_written() {
        assert_eq!(output("اكتب \"مرحبا {مجهول}\""), ["مرحبا {مجهول}"]);
    }

    #[test]
    fn failed_fragments_do_not_abort_the_run() {
        assert_eq!(output("اكتب \"{1 / 0}\"\nاكتب \"بعد\""), ["{1 / 0}", "بعد"]);
    }

    #[test]
    fn syntax_errors_fall_back_to_the_literal_span() {
        assert_eq!(output("اكتب \"{ليكن}\""), ["{ليكن}"]);
    }

    #[test]
    fn braces_without_a_fragment_are_kept() {
        assert_eq!(output("اكتب \"{} و { و }\""), ["{} و { و }"]);
    }

    #[test]
    fn unclosed_brace_is_kept() {
        assert_eq!(output("ليكن س = 1\nاكتب \"{س} {س\""), ["1 {س"]);
    }

    #[test]
    fn interpolated_strings_are_not_reinterpolated() {
        assert_eq!(output("ليكن س = \"{ص}\"\nليكن ص = 2\nاكتب \"{س}\""), ["{ص}"]);
    }

    #[test]
    fn only_printed_strings_are_interpolated() {
        assert_eq!(output("ليكن س = 1\nليكن ن = \"{س}\" + \"\"\nاكتب [ن]"), ["[{س}]"]);
    }

    #[test]
    fn statements_in_fragments_run_in_the_current_scope() {
        assert_eq!(output("اكتب \"{ليكن ج = 3}\"\nاكتب ج"), ["3", "3"]);
    }
}
