/// Default limit on nested user-function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Interpreter settings.
///
/// Loops are never limited; only the depth of nested user-function calls is,
/// so runaway recursion ends in a [`RuntimeError::RecursionLimit`] instead of
/// exhausting the host stack.
///
/// [`RuntimeError::RecursionLimit`]: crate::error::RuntimeError::RecursionLimit
///
/// # Example
/// ```
/// use wisam::{Config, run_source_with};
///
/// let config = Config { max_call_depth: 50 };
/// let source = "دالة ف ن\nأعد ف ن + 1\nانتهى\nف 1";
/// let outcome = run_source_with(source, &config).unwrap();
///
/// assert!(!outcome.success);
/// assert!(outcome.errors[0].contains("50"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// The deepest allowed nesting of user-function calls.
    pub max_call_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }
}
