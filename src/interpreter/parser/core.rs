use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
};

/// A recursive-descent parser over a token slice.
///
/// The parser never stops at the first problem. Syntax errors are recorded and
/// parsing continues on a best-effort basis, so one pass reports as many
/// errors as it can find. A non-empty error list means the returned program is
/// partial and must not be executed.
///
/// Parsing methods are spread over the sibling modules (`statement`, `block`,
/// `binary`, `unary`, `utils`), each adding an `impl Parser` block.
///
/// # Example
/// ```
/// use wisam::interpreter::{lexer::Lexer, parser::Parser};
///
/// let tokens = Lexer::new("اكتب 1 + 2").tokenize();
/// let (program, errors) = Parser::new(&tokens).parse();
///
/// assert_eq!(program.statements.len(), 1);
/// assert!(errors.is_empty());
/// ```
pub struct Parser<'t> {
    pub(super) tokens:     &'t [Token],
    pub(super) position:   usize,
    pub(super) errors:     Vec<ParseError>,
    /// Whether an identifier followed by an argument may become a call.
    /// Cleared while reading the arguments of a bare call.
    pub(super) bare_calls: bool,
    pub(super) eof:        Token,
}

impl<'t> Parser<'t> {
    /// Creates a parser over `tokens`.
    ///
    /// The slice normally ends with an `EOF` token, as produced by
    /// [`Lexer::tokenize`](crate::interpreter::lexer::Lexer::tokenize); a
    /// missing one is treated as present after the last token.
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        let eof = tokens.last()
                        .map_or_else(|| Token::new(TokenKind::Eof, "", 1, 1),
                                     |last| Token::new(TokenKind::Eof, "", last.line, last.column));
        Self { tokens,
               position: 0,
               errors: Vec::new(),
               bare_calls: true,
               eof }
    }

    /// Parses the whole token stream into a program.
    ///
    /// # Returns
    /// The program together with every syntax error found along the way.
    #[must_use]
    pub fn parse(mut self) -> (Program, Vec<ParseError>) {
        let program = self.parse_block(&[]);

        tracing::debug!(statements = program.statements.len(),
                        errors = self.errors.len(),
                        "parsed program");
        (program, self.errors)
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing.
    /// It begins at the lowest-precedence level, logical OR, and recursively
    /// descends through the precedence hierarchy.
    ///
    /// Grammar: `expression := logical_or`
    ///
    /// # Returns
    /// The parsed expression node.
    pub fn parse_expression(&mut self) -> Expr {
        self.parse_logical_or()
    }

    /// Parses an expression with bare calls enabled or disabled, restoring the
    /// previous setting afterwards.
    pub(super) fn parse_expression_with_calls(&mut self, bare_calls: bool) -> Expr {
        let saved = std::mem::replace(&mut self.bare_calls, bare_calls);
        let expr = self.parse_expression();
        self.bare_calls = saved;
        expr
    }
}
