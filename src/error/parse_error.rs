use thiserror::Error;

/// Represents all errors that can occur during parsing.
///
/// Every variant carries the position of the token the parser was looking at
/// when the problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A specific token was required but something else was found.
    #[error("Error on line {line}, column {column}: Expected {expected}, found {found}.")]
    Expected {
        /// Human readable description of what was required.
        expected: String,
        /// The text of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Found a token that cannot start an expression.
    #[error("Error on line {line}, column {column}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A numeric literal could not be converted to a number.
    #[error("Error on line {line}, column {column}: Invalid number literal '{text}'.")]
    InvalidNumber {
        /// The raw literal text.
        text:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl ParseError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Expected { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::InvalidNumber { line, .. } => *line,
        }
    }

    /// Gets the column number from `self`.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Expected { column, .. }
            | Self::UnexpectedToken { column, .. }
            | Self::InvalidNumber { column, .. } => *column,
        }
    }
}

/// The refusal returned when a program has syntax errors and is therefore
/// not executed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} syntax error(s):\n{}", .0.len(), render(.0))]
pub struct SyntaxErrors(pub Vec<ParseError>);

fn render(errors: &[ParseError]) -> String {
    errors.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join("\n")
}
