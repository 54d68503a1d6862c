/// Parser state and entry points.
///
/// Defines the `Parser` struct, the whole-program entry point and the
/// expression entry point shared by every other parsing module.
pub mod core;

/// Unary and primary expressions.
///
/// Handles negation, logical not, literals, identifiers, bare function calls,
/// parenthesised expressions, array literals and input requests.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the left-associative precedence levels from logical or down to
/// multiplication.
pub mod binary;

/// Block parsing.
///
/// Collects statements up to a terminating keyword, producing the `Program`
/// nodes used for every body.
pub mod block;

/// Utility functions for the parser.
///
/// Token inspection, consumption with error recording, and separator
/// skipping.
pub mod utils;

/// Statement parsing.
///
/// Dispatches on the leading token of a statement: declarations, assignments,
/// conditionals, loops, functions and the statement-terminal keywords.
pub mod statement;

pub use core::Parser;
