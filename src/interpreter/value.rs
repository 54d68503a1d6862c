/// User-defined function values.
///
/// Defines `Function`, the closure created when a `دالة` statement runs: its
/// parameters, its body, and the scope it was defined in.
pub mod function;

/// The `Value` type and its conversions, printing, truthiness and equality.
pub mod core;
