use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::Parser,
    },
};

/// Tests whether a token of `kind` can begin an expression.
///
/// Used to decide whether an identifier starts a bare call and where its
/// argument list ends.
pub(in crate::interpreter::parser) const fn can_start_expression(kind: TokenKind) -> bool {
    matches!(kind,
             TokenKind::Number
             | TokenKind::String
             | TokenKind::Identifier
             | TokenKind::True
             | TokenKind::False
             | TokenKind::Null
             | TokenKind::LParen
             | TokenKind::LBracket
             | TokenKind::Not)
}

impl Parser<'_> {
    /// Returns the current token without consuming it.
    pub(in crate::interpreter::parser) fn peek(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&self.eof)
    }

    /// Returns the kind of the current token.
    pub(in crate::interpreter::parser) fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Returns the kind of the token after the current one.
    pub(in crate::interpreter::parser) fn peek_next_kind(&self) -> TokenKind {
        self.tokens
            .get(self.position + 1)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    /// Consumes the current token and returns it. At the end of input the
    /// `EOF` token is returned repeatedly.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    /// Tests whether the current token is of `kind`.
    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Consumes the current token if it is of `kind`.
    ///
    /// # Returns
    /// `true` if a token was consumed.
    pub(in crate::interpreter::parser) fn matches(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }
        false
    }

    /// Requires a token of `kind`.
    ///
    /// On a match the token is consumed. Otherwise an `Expected` error naming
    /// `expected` is recorded and the position is left unchanged, so parsing
    /// can carry on as if the token had been there.
    ///
    /// # Parameters
    /// - `kind`: The required token kind.
    /// - `expected`: Human readable description used in the error message.
    ///
    /// # Returns
    /// `true` if the token was present.
    pub(in crate::interpreter::parser) fn consume(&mut self, kind: TokenKind, expected: &str) -> bool {
        if self.matches(kind) {
            return true;
        }
        self.error_expected(expected);
        false
    }

    /// Requires an identifier and returns its name.
    ///
    /// Behaves like [`Parser::consume`]; on a mismatch the returned name is
    /// empty.
    pub(in crate::interpreter::parser) fn consume_identifier(&mut self, expected: &str) -> String {
        if self.check(TokenKind::Identifier) {
            return self.advance().text;
        }
        self.error_expected(expected);
        String::new()
    }

    /// Records an `Expected` error at the current token.
    pub(in crate::interpreter::parser) fn error_expected(&mut self, expected: &str) {
        let token = self.peek();
        let error = ParseError::Expected { expected: expected.to_string(),
                                           found:    describe(token),
                                           line:     token.line,
                                           column:   token.column, };
        self.errors.push(error);
    }

    /// Records an `UnexpectedToken` error for `token`.
    pub(in crate::interpreter::parser) fn error_unexpected(&mut self, token: &Token) {
        self.errors
            .push(ParseError::UnexpectedToken { token:  describe(token),
                                                line:   token.line,
                                                column: token.column, });
    }

    /// Skips newlines and semicolons.
    pub(in crate::interpreter::parser) fn skip_separators(&mut self) {
        while matches!(self.peek_kind(), TokenKind::Newline | TokenKind::Semicolon) {
            self.advance();
        }
    }

    /// Skips newlines only.
    pub(in crate::interpreter::parser) fn skip_newlines(&mut self) {
        while self.matches(TokenKind::Newline) {}
    }
}

/// Describes a token for an error message.
fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::Eof => "end of input".to_string(),
        TokenKind::Newline => "newline".to_string(),
        TokenKind::String => format!("\"{}\"", token.text),
        _ => format!("'{}'", token.text),
    }
}
