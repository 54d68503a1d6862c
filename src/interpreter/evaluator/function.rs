/// Built-in function implementations.
///
/// The math functions and `الطول`, available in every program.
pub mod builtin;

/// Call dispatch.
///
/// The built-in table, user-defined calls, and the call depth limit.
pub mod core;
