/// Lexical errors.
///
/// Raised while turning source text into tokens. They never stop the lexer:
/// the offending character is skipped and recorded.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree.
/// The parser records them and keeps going, so one pass can report several.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include things like division by zero, type mismatches,
/// reassigning constants, or calling something that is not a function.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::{ParseError, SyntaxErrors};
pub use runtime_error::RuntimeError;
