/// The environment module holds variable scopes.
///
/// Scopes form a chain from the innermost block out to the global scope.
/// Each maps names to values and remembers which names are constants.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the syntax tree, evaluates expressions and statements,
/// binds variables, calls functions and collects printed output. It is the
/// core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Carries `أعد`, `توقف` and `استمر` through nested blocks as explicit
///   flow values.
/// - Reports runtime errors such as division by zero or unknown names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens, each
/// corresponding to a language element such as a number, an identifier, an
/// operator or one of the Arabic keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input characters into tokens with kind, text and source
///   location.
/// - Maps every accepted spelling of a keyword to its token kind.
/// - Records unknown characters as lexical errors and keeps going.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs the program tree by recursive descent.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Reports syntax errors with their location and recovers to report more.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Numbers, strings, booleans, `فارغ`, arrays and functions, with their
/// display forms, truthiness and equality.
pub mod value;
