use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{core::Parser, utils::can_start_expression},
    },
    util::stack::ensure_sufficient_stack,
};

impl Parser<'_> {
    /// Parses a unary expression.
    ///
    /// Supports prefix negation (`-x`) and logical not (`!x`, `ليس x`), both
    /// right-recursive so they can be stacked.
    ///
    /// The rule is: `unary := ("-" | "!") unary | primary`
    ///
    /// # Returns
    /// The parsed expression.
    pub(in crate::interpreter::parser) fn parse_unary(&mut self) -> Expr {
        let op = match self.peek_kind() {
            TokenKind::Minus => UnaryOperator::Negate,
            TokenKind::Not => UnaryOperator::Not,
            _ => return self.parse_primary(),
        };

        let line = self.advance().line;
        let expr = ensure_sufficient_stack(|| self.parse_unary());
        Expr::UnaryOp { op,
                        expr: Box::new(expr),
                        line }
    }

    /// Parses primary expressions.
    ///
    /// These include:
    /// - number, string, boolean and null literals,
    /// - identifiers and bare function calls,
    /// - parenthesised expressions,
    /// - array literals,
    /// - `ادخل` input requests.
    ///
    /// A token that cannot start an expression is recorded as an error, skipped,
    /// and replaced by a null literal so parsing can continue.
    fn parse_primary(&mut self) -> Expr {
        let token = self.advance();
        let line = token.line;
        let literal = |value| Expr::Literal { value, line };

        match token.kind {
            TokenKind::Number => match token.text.parse::<f64>() {
                Ok(n) => literal(LiteralValue::Number(n)),
                Err(_) => {
                    self.errors.push(ParseError::InvalidNumber { text: token.text,
                                                                 line,
                                                                 column: token.column });
                    literal(LiteralValue::Null)
                },
            },
            TokenKind::String => literal(LiteralValue::Str(token.text)),
            TokenKind::True => literal(LiteralValue::Bool(true)),
            TokenKind::False => literal(LiteralValue::Bool(false)),
            TokenKind::Null => literal(LiteralValue::Null),
            TokenKind::Identifier => self.parse_identifier_or_call(token.text, line),
            TokenKind::LParen => {
                self.skip_newlines();
                let expr = ensure_sufficient_stack(|| self.parse_expression_with_calls(true));
                self.skip_newlines();
                self.consume(TokenKind::RParen, "')'");
                expr
            },
            TokenKind::LBracket => self.parse_array(line),
            TokenKind::Input => {
                let prompt = self.check(TokenKind::String).then(|| self.advance().text);
                Expr::Input { prompt, line }
            },
            _ => {
                self.error_unexpected(&token);
                literal(LiteralValue::Null)
            },
        }
    }

    /// Parses an identifier, turning it into a call when an argument follows.
    ///
    /// An identifier is a call exactly when bare calls are enabled and the
    /// next token can begin an expression. Arguments are full expressions with
    /// optional commas between them, read with bare calls disabled, so
    /// `f g 1` passes `g` and `1` to `f` while `f (g 1)` passes `g(1)`.
    ///
    /// # Parameters
    /// - `name`: The identifier already consumed.
    /// - `line`: Line of the identifier.
    fn parse_identifier_or_call(&mut self, name: String, line: usize) -> Expr {
        if !self.bare_calls || !can_start_expression(self.peek_kind()) {
            return Expr::Identifier { name, line };
        }

        let mut arguments = Vec::new();
        while can_start_expression(self.peek_kind()) {
            arguments.push(self.parse_expression_with_calls(false));
            self.matches(TokenKind::Comma);
        }

        Expr::FunctionCall { name,
                             arguments,
                             line }
    }

    /// Parses the rest of an array literal after `[`.
    ///
    /// Elements are separated by commas; newlines are allowed anywhere inside
    /// the brackets.
    ///
    /// Grammar: `array := "[" (expression ("," expression)*)? "]"`
    fn parse_array(&mut self, line: usize) -> Expr {
        let mut elements = Vec::new();

        self.skip_newlines();
        if !self.matches(TokenKind::RBracket) {
            loop {
                self.skip_newlines();
                elements.push(self.parse_expression_with_calls(true));
                self.skip_newlines();
                if !self.matches(TokenKind::Comma) {
                    break;
                }
            }
            self.skip_newlines();
            self.consume(TokenKind::RBracket, "']' to close the array");
        }

        Expr::Array { elements, line }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ast::tree::render, interpreter::lexer::Lexer};

    fn parse_source(source: &str) -> (String, Vec<ParseError>) {
        let tokens = Lexer::new(source).tokenize();
        let (program, errors) = Parser::new(&tokens).parse();
        (render(&program), errors)
    }

    fn tree(source: &str) -> String {
        let (tree, errors) = parse_source(source);
        assert!(errors.is_empty(), "{errors:?}");
        tree
    }

    #[test]
    fn bare_call_takes_following_arguments() {
        assert_eq!(tree("جمع 2 3"),
                   "Program\n  Expression\n    Call جمع\n      Number 2\n      Number 3\n");
    }

    #[test]
    fn identifier_before_operator_is_not_a_call() {
        assert_eq!(tree("أ + ب"),
                   "Program\n  Expression\n    BinaryOp +\n      Identifier أ\n      Identifier ب\n");
    }

    #[test]
    fn nested_identifiers_are_arguments_not_calls() {
        assert_eq!(tree("ف ج 1"),
                   "Program\n  Expression\n    Call ف\n      Identifier ج\n      Number 1\n");
        assert_eq!(tree("ف (ج 1)"),
                   "Program\n  Expression\n    Call ف\n      Call ج\n        Number 1\n");
    }

    #[test]
    fn arguments_are_full_expressions() {
        assert_eq!(tree("أعد ن * مضروب ن - 1"),
                   "Program\n  Return\n    BinaryOp *\n      Identifier ن\n      Call مضروب\n        \
                    BinaryOp -\n          Identifier ن\n          Number 1\n");
    }

    #[test]
    fn commas_between_arguments_are_optional() {
        assert_eq!(tree("أس 2، 10"),
                   "Program\n  Expression\n    Call أس\n      Number 2\n      Number 10\n");
    }

    #[test]
    fn unary_operators_stack() {
        assert_eq!(tree("- -5"),
                   "Program\n  Expression\n    UnaryOp -\n      UnaryOp -\n        Number 5\n");
        assert_eq!(tree("ليس صحيح"),
                   "Program\n  Expression\n    UnaryOp !\n      Bool true\n");
    }

    #[test]
    fn arrays_may_span_lines() {
        assert_eq!(tree("[1،\n 2,\n 3\n]"),
                   "Program\n  Expression\n    Array\n      Number 1\n      Number 2\n      Number 3\n");
        assert_eq!(tree("[]"), "Program\n  Expression\n    Array\n");
    }

    #[test]
    fn input_with_and_without_prompt() {
        assert_eq!(tree("ليكن س = ادخل \"الاسم\"\nادخل"),
                   "Program\n  Let س\n    Input \"الاسم\"\n  Expression\n    Input\n");
    }

    #[test]
    fn unexpected_token_becomes_null_and_parsing_continues() {
        let (tree, errors) = parse_source("اكتب )\nاكتب 1");

        assert_eq!(tree, "Program\n  Print\n    Null\n  Print\n    Number 1\n");
        assert_eq!(errors,
                   [ParseError::UnexpectedToken { token:  "')'".to_string(),
                                                  line:   1,
                                                  column: 6, }]);
    }

    #[test]
    fn missing_closing_paren_is_reported() {
        let (_, errors) = parse_source("اكتب (1 + 2");

        assert!(matches!(&errors[..], [ParseError::Expected { expected, .. }] if expected == "')'"));
    }
}
