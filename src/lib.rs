//! # wisam
//!
//! wisam is an interpreter for Wisam, a small scripting language whose
//! keywords are Arabic words. Source text goes through a lexer, a recursive
//! descent parser and a tree-walking evaluator with lexical scopes and
//! closures.
//!
//! ```
//! let outcome = wisam::run_source("لكل س من 1 إلى 3 اكتب س انتهى").unwrap();
//!
//! assert!(outcome.success);
//! assert_eq!(outcome.output, ["1", "2", "3"]);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{LexError, ParseError, SyntaxErrors},
    interpreter::{
        lexer::{Lexer, Token},
        parser::Parser,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a program as a tree, plus an indented text
/// rendering of that tree. The AST is built by the parser and walked by the
/// evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Runtime settings.
pub mod config;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every error carries its source location and renders as
/// `Error on line L: ...`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, scopes and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General helpers shared by several phases.
///
/// # Responsibilities
/// - Number formatting and rounding with the language's conventions.
/// - Growing the stack for deeply nested programs.
pub mod util;

pub use config::Config;
pub use interpreter::evaluator::core::{Flow, InputSource, Interpreter, RunOutcome};

/// The tokens of a source text and the lexical errors found on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Tokenized {
    /// Every token, ending with `EOF`.
    pub tokens: Vec<Token>,
    /// Unknown characters that were skipped.
    pub errors: Vec<LexError>,
}

/// A parsed program with the errors of both front-end phases.
///
/// The program is only trustworthy when `parse_errors` is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// The program tree, partial if there were syntax errors.
    pub program:      ast::Program,
    /// Unknown characters that were skipped.
    pub lex_errors:   Vec<LexError>,
    /// Syntax errors, in source order.
    pub parse_errors: Vec<ParseError>,
}

/// Splits `source` into tokens.
///
/// Never fails: unknown characters are skipped and reported in
/// [`Tokenized::errors`].
///
/// # Example
/// ```
/// use wisam::{interpreter::lexer::TokenKind, tokenize};
///
/// let tokenized = tokenize("اكتب 1 @");
///
/// assert_eq!(tokenized.tokens.len(), 3);
/// assert_eq!(tokenized.tokens[0].kind, TokenKind::Print);
/// assert_eq!(tokenized.errors.len(), 1);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Tokenized {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize();
    let errors = lexer.into_errors();

    Tokenized { tokens, errors }
}

/// Tokenizes and parses `source`.
///
/// # Example
/// ```
/// let parsed = wisam::parse("ليكن س = 1\nليكن = 2");
///
/// assert_eq!(parsed.program.statements.len(), 2);
/// assert_eq!(parsed.parse_errors.len(), 1);
/// ```
#[must_use]
pub fn parse(source: &str) -> Parsed {
    let Tokenized { tokens, errors } = tokenize(source);
    let (program, parse_errors) = Parser::new(&tokens).parse();

    Parsed { program,
             lex_errors: errors,
             parse_errors }
}

/// Runs `source` with the default [`Config`].
///
/// See [`run_source_with`].
pub fn run_source(source: &str) -> Result<RunOutcome, SyntaxErrors> {
    run_source_with(source, &Config::default())
}

/// Tokenizes, parses and runs `source`.
///
/// Lexical errors do not stop the program: the offending characters are
/// logged by the lexer and left out. Syntax errors do: a program with any of
/// them is not run at all.
///
/// # Parameters
/// - `source`: The program text.
/// - `config`: Runtime settings for this run.
///
/// # Returns
/// The outcome of the run. A runtime error is reported inside the outcome,
/// not as `Err`.
///
/// # Example
/// ```
/// use wisam::{Config, run_source_with};
///
/// let outcome = run_source_with("اكتب \"قبل\"\nاكتب 5 / 0", &Config::default()).unwrap();
/// assert!(!outcome.success);
/// assert_eq!(outcome.output, ["قبل"]);
/// assert_eq!(outcome.errors, ["Error on line 2: Division by zero."]);
///
/// let refused = run_source_with("ليكن = 1", &Config::default());
/// assert!(refused.is_err());
/// ```
pub fn run_source_with(source: &str, config: &Config) -> Result<RunOutcome, SyntaxErrors> {
    let parsed = parse(source);

    if !parsed.parse_errors.is_empty() {
        tracing::debug!(errors = parsed.parse_errors.len(), "refusing to run a program with syntax errors");
        return Err(SyntaxErrors(parsed.parse_errors));
    }

    Ok(Interpreter::with_config(*config).run(&parsed.program))
}
