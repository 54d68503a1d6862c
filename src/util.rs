/// Number helpers.
///
/// Printing numbers in the language's format, rounding the way the `قريب`
/// built-in rounds, and lossless count conversions.
pub mod num;
/// Stack growth for deep recursion.
pub mod stack;
