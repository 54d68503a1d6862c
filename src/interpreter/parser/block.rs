use crate::{
    ast::Program,
    interpreter::{lexer::TokenKind, parser::core::Parser},
};

impl Parser<'_> {
    /// Parses statements until one of `terminators` or the end of input.
    ///
    /// Newlines and semicolons between statements are skipped. The terminating
    /// token is left for the caller to consume, since only the caller knows
    /// whether it is required (`انتهى`) or optional (`وإلا`).
    ///
    /// Grammar: `block := (separator* statement)* separator*`
    ///
    /// # Parameters
    /// - `terminators`: Token kinds that end the block. Empty for a whole
    ///   program, which only ends at `EOF`.
    ///
    /// # Returns
    /// The statements as a `Program` node.
    pub(in crate::interpreter::parser) fn parse_block(&mut self, terminators: &[TokenKind]) -> Program {
        let mut statements = Vec::new();

        loop {
            self.skip_separators();

            let kind = self.peek_kind();
            if kind == TokenKind::Eof || terminators.contains(&kind) {
                break;
            }

            let start = self.position;
            statements.push(self.parse_statement());

            if self.position == start {
                let token = self.advance();
                self.error_unexpected(&token);
            }
        }

        Program { statements }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::Statement, interpreter::lexer::Lexer};

    #[test]
    fn block_stops_before_terminator() {
        let tokens = Lexer::new("اكتب 1\nاكتب 2\nانتهى اكتب 3").tokenize();
        let mut parser = Parser::new(&tokens);
        let block = parser.parse_block(&[TokenKind::End]);

        assert_eq!(block.statements.len(), 2);
        assert!(block.statements.iter().all(|s| matches!(s, Statement::Print { .. })));
        assert_eq!(parser.peek_kind(), TokenKind::End);
        assert!(parser.errors.is_empty());
    }

    #[test]
    fn unterminated_block_ends_at_eof() {
        let tokens = Lexer::new("اكتب 1\n").tokenize();
        let mut parser = Parser::new(&tokens);
        let block = parser.parse_block(&[TokenKind::End]);

        assert_eq!(block.statements.len(), 1);
        assert_eq!(parser.peek_kind(), TokenKind::Eof);
    }
}
