/// Operator dispatch.
///
/// Evaluates both operands and routes the operator to its handler.
pub mod core;
/// Arithmetic on numbers and string concatenation.
pub mod scalar;
/// Relational and equality comparisons.
pub mod comparison;
/// The eager logical operators `و` and `أو`.
pub mod logic;
