use thiserror::Error;

/// Represents all errors that can occur during tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that does not start any token.
    #[error("Error on line {line}, column {column}: Unknown character '{character}'.")]
    UnknownCharacter {
        /// The character that was skipped.
        character: char,
        /// The source line where the character was found.
        line:      usize,
        /// The source column where the character was found.
        column:    usize,
    },
}

impl LexError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownCharacter { line, .. } => *line,
        }
    }

    /// Gets the column number from `self`.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnknownCharacter { column, .. } => *column,
        }
    }
}
