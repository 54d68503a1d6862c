use std::rc::Rc;

/// Indented rendering of a parsed program.
///
/// Used by the CLI's `--ast` flag and by anything else that wants to look at
/// a tree without walking it by hand.
pub mod tree;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: numbers, strings, booleans and `فارغ`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A double-precision number.
    Number(f64),
    /// A string, already unescaped.
    Str(String),
    /// `صحيح` or `خطأ`.
    Bool(bool),
    /// `فارغ`.
    Null,
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Each variant models one syntactic construct and carries the source line it
/// started on, which runtime errors report.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or null).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation or logical not).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression, written without parentheses (`جمع 2 3`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Array literal expression (`[1، 2، 3]`).
    Array {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A request for a line of input (`ادخل "الاسم"`).
    Input {
        /// The optional prompt shown to the user.
        prompt: Option<String>,
        /// Line number in the source code.
        line:   usize,
    },
}

/// An ordered list of statements.
///
/// The whole source file is a `Program`, and so is every block: both branches
/// of an `إذا`, loop bodies and function bodies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents a user-defined function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, bound positionally on each call.
    pub params: Vec<String>,
    /// The body, shared with every function value created from it.
    pub body:   Rc<Program>,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `ليكن name = value`, a mutable binding in the current scope.
    Let {
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `ثابت name = value`, a constant binding in the current scope.
    Const {
        /// The name of the constant.
        name:  String,
        /// The value of the constant.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `name = value`, rebinding the nearest existing variable.
    Assign {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `name += value` and friends, including `name++` and `name--`.
    CompoundAssign {
        /// The name of the variable.
        name:  String,
        /// The binary operation (e.g., `+=`, `-=`, etc.).
        op:    BinaryOperator,
        /// The value to be combined with the current variable value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `إذا condition إذن ... وإلا ... انتهى`.
    If {
        /// The condition, tested for truthiness.
        condition:   Expr,
        /// Statements run when the condition holds.
        then_branch: Program,
        /// Statements run otherwise, if an `وإلا` is present.
        else_branch: Option<Program>,
        /// Line number in the source code.
        line:        usize,
    },
    /// `لكل var من start إلى end ... انتهى`, an inclusive counted loop.
    For {
        /// The loop variable name.
        var:   String,
        /// The first value of the loop variable.
        start: Expr,
        /// The last value of the loop variable.
        end:   Expr,
        /// The loop body.
        body:  Program,
        /// Line number in the source code.
        line:  usize,
    },
    /// `طالما condition ... انتهى`.
    While {
        /// The condition, re-tested before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Program,
        /// Line number in the source code.
        line:      usize,
    },
    /// A user-defined function declaration.
    Function(FunctionDef),
    /// `أعد [value]`.
    Return {
        /// The returned value; `None` returns `فارغ`.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// `اكتب value`.
    Print {
        /// The value to print.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `توقف`.
    Break {
        /// Line number in the source code.
        line: usize,
    },
    /// `استمر`.
    Continue {
        /// Line number in the source code.
        line: usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and the two eager logical
/// connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`و`)
    And,
    /// Logical or (`أو`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x` or `ليس x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "و",
            Or => "أو",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}
