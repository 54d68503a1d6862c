use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{lexer::TokenKind, parser::core::Parser},
};

impl Parser<'_> {
    /// Parses logical OR expressions.
    ///
    /// The rule is: `logical_or := logical_and ("أو" logical_and)*`
    ///
    /// # Returns
    /// An `Expr::BinaryOp` chain or the lower-level expression.
    pub(in crate::interpreter::parser) fn parse_logical_or(&mut self) -> Expr {
        self.parse_left_assoc(&[BinaryOperator::Or], Self::parse_logical_and)
    }

    /// Parses logical AND expressions.
    ///
    /// The rule is: `logical_and := equality ("و" equality)*`
    fn parse_logical_and(&mut self) -> Expr {
        self.parse_left_assoc(&[BinaryOperator::And], Self::parse_equality)
    }

    /// Parses `==` and `!=`.
    ///
    /// The rule is: `equality := relational (("==" | "!=") relational)*`
    fn parse_equality(&mut self) -> Expr {
        self.parse_left_assoc(&[BinaryOperator::Equal, BinaryOperator::NotEqual],
                              Self::parse_relational)
    }

    /// Parses comparison expressions.
    ///
    /// The rule is: `relational := additive ((">" | "<" | ">=" | "<=") additive)*`
    fn parse_relational(&mut self) -> Expr {
        self.parse_left_assoc(&[BinaryOperator::Greater,
                                BinaryOperator::Less,
                                BinaryOperator::GreaterEqual,
                                BinaryOperator::LessEqual],
                              Self::parse_additive)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    fn parse_additive(&mut self) -> Expr {
        self.parse_left_assoc(&[BinaryOperator::Add, BinaryOperator::Sub],
                              Self::parse_multiplicative)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Exponentiation shares this level, so `2 * 3 ^ 2` is `(2 * 3) ^ 2` and
    /// `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
    ///
    /// The rule is: `multiplicative := unary (("*" | "/" | "%" | "^") unary)*`
    fn parse_multiplicative(&mut self) -> Expr {
        self.parse_left_assoc(&[BinaryOperator::Mul,
                                BinaryOperator::Div,
                                BinaryOperator::Mod,
                                BinaryOperator::Pow],
                              Self::parse_unary)
    }

    /// Parses one left-associative precedence level.
    ///
    /// # Parameters
    /// - `operators`: The operators handled at this level.
    /// - `next`: Parser for the next-higher precedence level.
    ///
    /// # Returns
    /// The left fold of operands and operators.
    fn parse_left_assoc(&mut self, operators: &[BinaryOperator], next: fn(&mut Self) -> Expr) -> Expr {
        let mut left = next(self);
        loop {
            let line = self.peek().line;
            if let Some(op) = token_to_binary_operator(self.peek_kind())
               && operators.contains(&op)
            {
                self.advance();
                let right = next(self);
                left = Expr::BinaryOp { left: Box::new(left),
                                        op,
                                        right: Box::new(right),
                                        line };
                continue;
            }
            break;
        }
        left
    }
}

/// Converts a token into a binary operator if applicable.
///
/// # Parameters
/// - `kind`: The token kind to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token is a binary operator, otherwise `None`.
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Multiply => Some(BinaryOperator::Mul),
        TokenKind::Divide => Some(BinaryOperator::Div),
        TokenKind::Modulo => Some(BinaryOperator::Mod),
        TokenKind::Power => Some(BinaryOperator::Pow),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::GreaterEq => Some(BinaryOperator::GreaterEqual),
        TokenKind::LessEq => Some(BinaryOperator::LessEqual),
        TokenKind::Equal => Some(BinaryOperator::Equal),
        TokenKind::NotEqual => Some(BinaryOperator::NotEqual),
        TokenKind::And => Some(BinaryOperator::And),
        TokenKind::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ast::tree::render, interpreter::lexer::Lexer};

    fn tree(source: &str) -> String {
        let tokens = Lexer::new(source).tokenize();
        let (program, errors) = Parser::new(&tokens).parse();
        assert!(errors.is_empty(), "{errors:?}");
        render(&program)
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(tree("1 + 2 * 3"),
                   "Program\n  Expression\n    BinaryOp +\n      Number 1\n      BinaryOp *\n        \
                    Number 2\n        Number 3\n");
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(tree("8 - 4 - 2"),
                   "Program\n  Expression\n    BinaryOp -\n      BinaryOp -\n        Number 8\n        \
                    Number 4\n      Number 2\n");
    }

    #[test]
    fn power_shares_the_multiplicative_level() {
        assert_eq!(tree("2 ^ 3 ^ 2"),
                   "Program\n  Expression\n    BinaryOp ^\n      BinaryOp ^\n        Number 2\n        \
                    Number 3\n      Number 2\n");
    }

    #[test]
    fn logical_levels_sit_below_comparisons() {
        assert_eq!(tree("أ > 1 و ب < 2 أو ج"),
                   "Program\n  Expression\n    BinaryOp أو\n      BinaryOp و\n        BinaryOp >\n          \
                    Identifier أ\n          Number 1\n        BinaryOp <\n          Identifier ب\n          \
                    Number 2\n      Identifier ج\n");
    }

    #[test]
    fn equality_is_below_relational() {
        assert_eq!(tree("1 < 2 == صحيح"),
                   "Program\n  Expression\n    BinaryOp ==\n      BinaryOp <\n        Number 1\n        \
                    Number 2\n      Bool true\n");
    }
}
