/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic,
/// string concatenation, comparisons and the eager logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, the `Flow` signal that carries return, break
/// and continue through nested blocks, and statement and expression dispatch.
pub mod core;

/// Block and conditional execution.
///
/// Runs statement lists and stops at the first non-normal flow.
pub mod block;

/// Evaluation of counted loops.
///
/// Runs `لكل` loops with inclusive numeric bounds.
pub mod for_loop;

/// Evaluation of conditional loops.
///
/// Runs `طالما` loops until their condition turns false.
pub mod while_loop;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;

/// Printing and string interpolation.
///
/// Formats printed values and expands `{...}` spans inside printed strings.
pub mod print;
