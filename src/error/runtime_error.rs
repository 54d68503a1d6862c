use thiserror::Error;

/// Represents all errors that can occur during evaluation and runtime.
///
/// The first runtime error aborts the current run; its message becomes the
/// single entry of the run's error list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    #[error("Error on line {line}: Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a name bound to nothing at all.
    #[error("Error on line {line}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a name bound to a value that is not a function.
    #[error("Error on line {line}: '{name}' is not a function.")]
    NotAFunction {
        /// The name that was called.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to assign to a name declared with `ثابت`.
    #[error("Error on line {line}: Cannot reassign constant '{name}'.")]
    ConstantReassignment {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error on line {line}: Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Loop bounds did not evaluate to numbers.
    #[error("Error on line {line}: Invalid loop bounds: {details}.")]
    InvalidLoopBounds {
        /// Details describing why the bounds are invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A built-in received fewer arguments than it needs.
    #[error("Error on line {line}: '{name}' expects at least {expected} argument(s), found {found}.")]
    ArgumentCountMismatch {
        /// The name of the built-in.
        name:     String,
        /// The minimum number of arguments.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Nested function calls went deeper than the configured limit.
    #[error("Error on line {line}: Maximum call depth of {limit} exceeded.")]
    RecursionLimit {
        /// The configured limit.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl RuntimeError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::UnknownFunction { line, .. }
            | Self::NotAFunction { line, .. }
            | Self::ConstantReassignment { line, .. }
            | Self::TypeError { line, .. }
            | Self::DivisionByZero { line }
            | Self::InvalidLoopBounds { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::RecursionLimit { line, .. } => *line,
        }
    }
}
