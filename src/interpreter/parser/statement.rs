use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Expr, FunctionDef, LiteralValue, Statement},
    interpreter::{lexer::TokenKind, parser::core::Parser},
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// Dispatch happens on the leading token:
    /// - `ليكن` / `ثابت` declare a variable or constant,
    /// - an identifier followed by `=` (or a compound operator, `++`, `--`)
    ///   is an assignment,
    /// - `إذا`, `لكل`, `طالما`, `دالة` open a block closed by `انتهى`,
    /// - `أعد`, `توقف`, `استمر`, `اكتب` are statement-terminal keywords,
    /// - anything else is an expression statement.
    ///
    /// # Returns
    /// The parsed statement. Errors are recorded on the parser.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Statement {
        let line = self.peek().line;

        match self.peek_kind() {
            TokenKind::Let => self.parse_declaration(false),
            TokenKind::Const => self.parse_declaration(true),
            TokenKind::If => self.parse_if(),
            TokenKind::For => self.parse_for(),
            TokenKind::While => self.parse_while(),
            TokenKind::Function => self.parse_function(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Break => {
                self.advance();
                Statement::Break { line }
            },
            TokenKind::Continue => {
                self.advance();
                Statement::Continue { line }
            },
            TokenKind::Print => {
                self.advance();
                self.skip_newlines();
                Statement::Print { value: self.parse_expression(),
                                   line }
            },
            TokenKind::Identifier if is_assignment(self.peek_next_kind()) => self.parse_assignment(),
            _ => Statement::Expression { expr: self.parse_expression(),
                                         line },
        }
    }

    /// Parses `ليكن name = value` or `ثابت name = value`.
    fn parse_declaration(&mut self, constant: bool) -> Statement {
        let line = self.advance().line;
        let keyword = if constant { "ثابت" } else { "ليكن" };

        let name = self.consume_identifier(&format!("a name after '{keyword}'"));
        self.consume(TokenKind::Assign, "'=' after the name");
        self.skip_newlines();
        let value = self.parse_expression();

        if constant {
            Statement::Const { name, value, line }
        } else {
            Statement::Let { name, value, line }
        }
    }

    /// Parses `name = value`, `name op= value`, `name++` and `name--`.
    ///
    /// The caller has already checked that an assignment operator follows the
    /// identifier.
    fn parse_assignment(&mut self) -> Statement {
        let target = self.advance();
        let operator = self.advance();
        let (name, line) = (target.text, target.line);

        let one = || Expr::Literal { value: LiteralValue::Number(1.0),
                                     line };

        match operator.kind {
            TokenKind::Increment => Statement::CompoundAssign { name,
                                                                op: BinaryOperator::Add,
                                                                value: one(),
                                                                line },
            TokenKind::Decrement => Statement::CompoundAssign { name,
                                                                op: BinaryOperator::Sub,
                                                                value: one(),
                                                                line },
            kind => {
                self.skip_newlines();
                let value = self.parse_expression();
                match compound_operator(kind) {
                    Some(op) => Statement::CompoundAssign { name, op, value, line },
                    None => Statement::Assign { name, value, line },
                }
            },
        }
    }

    /// Parses an `إذا` statement with an optional `وإلا` branch.
    ///
    /// Syntax:
    /// ```text
    ///     إذا <condition> إذن
    ///         <statements>
    ///     وإلا
    ///         <statements>
    ///     انتهى
    /// ```
    fn parse_if(&mut self) -> Statement {
        let line = self.advance().line;

        let condition = self.parse_expression();
        self.consume(TokenKind::Then, "'إذن' after the condition");

        let then_branch = self.parse_block(&[TokenKind::Else, TokenKind::End]);
        let else_branch = self.matches(TokenKind::Else)
                              .then(|| self.parse_block(&[TokenKind::End]));

        self.consume(TokenKind::End, "'انتهى' to close 'إذا'");

        Statement::If { condition,
                        then_branch,
                        else_branch,
                        line }
    }

    /// Parses `لكل var من start إلى end ... انتهى`.
    fn parse_for(&mut self) -> Statement {
        let line = self.advance().line;

        let var = self.consume_identifier("a loop variable after 'لكل'");
        self.consume(TokenKind::From, "'من' after the loop variable");
        let start = self.parse_expression();
        self.consume(TokenKind::To, "'إلى' after the start value");
        let end = self.parse_expression();

        let body = self.parse_block(&[TokenKind::End]);
        self.consume(TokenKind::End, "'انتهى' to close 'لكل'");

        Statement::For { var,
                         start,
                         end,
                         body,
                         line }
    }

    /// Parses `طالما condition ... انتهى`.
    fn parse_while(&mut self) -> Statement {
        let line = self.advance().line;

        let condition = self.parse_expression();
        let body = self.parse_block(&[TokenKind::End]);
        self.consume(TokenKind::End, "'انتهى' to close 'طالما'");

        Statement::While { condition,
                           body,
                           line }
    }

    /// Parses `دالة name params... body انتهى`.
    ///
    /// Parameters are identifiers separated by whitespace, commas, or both,
    /// read until the first token that is neither.
    fn parse_function(&mut self) -> Statement {
        let line = self.advance().line;

        let name = self.consume_identifier("a function name after 'دالة'");

        let mut params = Vec::new();
        while self.check(TokenKind::Identifier) {
            params.push(self.advance().text);
            self.matches(TokenKind::Comma);
        }

        let body = self.parse_block(&[TokenKind::End]);
        self.consume(TokenKind::End, "'انتهى' to close 'دالة'");

        Statement::Function(FunctionDef { name,
                                          params,
                                          body: Rc::new(body),
                                          line })
    }

    /// Parses `أعد [value]`. The value is omitted when the statement ends
    /// right after the keyword.
    fn parse_return(&mut self) -> Statement {
        let line = self.advance().line;

        let value = match self.peek_kind() {
            TokenKind::Newline
            | TokenKind::Semicolon
            | TokenKind::End
            | TokenKind::Else
            | TokenKind::Eof => None,
            _ => Some(self.parse_expression()),
        };

        Statement::Return { value, line }
    }
}

/// Tests whether `kind` turns a leading identifier into an assignment.
const fn is_assignment(kind: TokenKind) -> bool {
    matches!(kind,
             TokenKind::Assign
             | TokenKind::PlusAssign
             | TokenKind::MinusAssign
             | TokenKind::MulAssign
             | TokenKind::DivAssign
             | TokenKind::ModAssign
             | TokenKind::Increment
             | TokenKind::Decrement)
}

/// Maps a compound assignment token to the operator it applies.
const fn compound_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::PlusAssign => Some(BinaryOperator::Add),
        TokenKind::MinusAssign => Some(BinaryOperator::Sub),
        TokenKind::MulAssign => Some(BinaryOperator::Mul),
        TokenKind::DivAssign => Some(BinaryOperator::Div),
        TokenKind::ModAssign => Some(BinaryOperator::Mod),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ast::Program, error::ParseError, interpreter::lexer::Lexer};

    fn parse_source(source: &str) -> (Program, Vec<ParseError>) {
        let tokens = Lexer::new(source).tokenize();
        Parser::new(&tokens).parse()
    }

    fn single(source: &str) -> Statement {
        let (mut program, errors) = parse_source(source);
        assert!(errors.is_empty(), "{errors:?}");
        assert_eq!(program.statements.len(), 1);
        program.statements.remove(0)
    }

    fn number(value: f64, line: usize) -> Expr {
        Expr::Literal { value: LiteralValue::Number(value),
                        line }
    }

    #[test]
    fn let_and_const() {
        assert_eq!(single("ليكن س = 5"),
                   Statement::Let { name:  "س".to_string(),
                                    value: number(5.0, 1),
                                    line:  1, });
        assert_eq!(single("ثابت ط = 3.14"),
                   Statement::Const { name:  "ط".to_string(),
                                      value: number(3.14, 1),
                                      line:  1, });
    }

    #[test]
    fn if_with_else_on_one_line() {
        let Statement::If { then_branch,
                            else_branch,
                            .. } = single("إذا صحيح إذن اكتب \"a\" وإلا اكتب \"b\" انتهى")
        else {
            panic!("expected an if statement");
        };

        assert_eq!(then_branch.statements,
                   [Statement::Print { value: Expr::Literal { value: LiteralValue::Str("a".to_string()),
                                                              line:  1, },
                                       line:  1, }]);
        assert_eq!(else_branch.map(|b| b.statements.len()), Some(1));
    }

    #[test]
    fn if_without_then_is_an_error() {
        let (_, errors) = parse_source("إذا صحيح اكتب 1 انتهى");

        assert_eq!(errors.len(), 1);
        assert!(matches!(&errors[0], ParseError::Expected { found, .. } if found == "'اكتب'"));
    }

    #[test]
    fn missing_end_is_reported_at_eof() {
        let (program, errors) = parse_source("طالما صحيح\nاكتب 1\n");

        assert_eq!(program.statements.len(), 1);
        assert!(matches!(&errors[..],
                         [ParseError::Expected { found, .. }] if found == "end of input"));
    }

    #[test]
    fn for_loop_parts() {
        assert_eq!(single("لكل س من 1 إلى 3 اكتب س انتهى"),
                   Statement::For { var:   "س".to_string(),
                                    start: number(1.0, 1),
                                    end:   number(3.0, 1),
                                    body:  Program { statements:
                                                         vec![Statement::Print { value:
                                                                                     Expr::Identifier { name: "س".to_string(),
                                                                                                        line: 1, },
                                                                                 line:  1, }], },
                                    line:  1, });
    }

    #[test]
    fn function_parameters_with_and_without_commas() {
        for source in ["دالة جمع أ ب\nأعد أ + ب\nانتهى", "دالة جمع أ، ب أعد أ + ب انتهى"] {
            let Statement::Function(def) = single(source) else {
                panic!("expected a function definition");
            };
            assert_eq!(def.name, "جمع");
            assert_eq!(def.params, ["أ", "ب"]);
            assert_eq!(def.body.statements.len(), 1);
        }
    }

    #[test]
    fn bare_return_before_end() {
        let Statement::Function(def) = single("دالة لا_شيء\nأعد\nانتهى") else {
            panic!("expected a function definition");
        };

        assert_eq!(def.body.statements, [Statement::Return { value: None,
                                                             line:  2, }]);
    }

    #[test]
    fn compound_assignments() {
        assert_eq!(single("س += 2"),
                   Statement::CompoundAssign { name:  "س".to_string(),
                                               op:    BinaryOperator::Add,
                                               value: number(2.0, 1),
                                               line:  1, });
        assert_eq!(single("س--"),
                   Statement::CompoundAssign { name:  "س".to_string(),
                                               op:    BinaryOperator::Sub,
                                               value: number(1.0, 1),
                                               line:  1, });
        assert!(matches!(single("س %= 3"),
                         Statement::CompoundAssign { op: BinaryOperator::Mod, .. }));
    }

    #[test]
    fn plain_assignment_spans_a_newline_after_equals() {
        assert_eq!(single("س =\n 4"),
                   Statement::Assign { name:  "س".to_string(),
                                       value: number(4.0, 2),
                                       line:  1, });
    }

    #[test]
    fn reserved_keywords_are_syntax_errors() {
        let (_, errors) = parse_source("صنف شيء");

        assert!(matches!(&errors[0], ParseError::UnexpectedToken { token, .. } if token == "'صنف'"));
    }
}
