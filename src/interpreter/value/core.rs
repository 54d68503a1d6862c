use std::rc::Rc;

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::function::Function},
    util::num::format_number,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value a program can compute, bind, pass or print.
/// Strings, arrays and functions are reference counted, so cloning a value is
/// always cheap.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// An immutable string.
    Str(Rc<str>),
    /// A boolean value, produced by comparisons and `ليس`.
    Bool(bool),
    /// The absence of a value, `فارغ`.
    Null,
    /// An array of `Value` elements.
    Array(Rc<Vec<Self>>),
    /// A user-defined function with its closure.
    Function(Rc<Function>),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::from(s.as_str()),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Null => Self::Null,
        }
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if it is not a
    /// number.
    ///
    /// # Parameters
    /// - `operation`: What the number is needed for, used in the error message.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::TypeError)`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use wisam::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number("test", 1).unwrap(), 2.5);
    /// assert!(Value::from("نص").as_number("test", 1).is_err());
    /// ```
    pub fn as_number(&self, operation: &str, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(RuntimeError::TypeError { details: format!("{operation} expects a number, found {}",
                                                                    other.type_name()),
                                                   line }),
        }
    }

    /// Converts the value to a boolean by the truthiness rule.
    ///
    /// `فارغ` is false, booleans are themselves, numbers are false only at
    /// zero, strings and arrays are false only when empty, and functions are
    /// always true.
    ///
    /// # Example
    /// ```
    /// use wisam::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Number(0.0).is_truthy());
    /// assert!(Value::from("٠").is_truthy());
    /// assert!(!Value::from(Vec::new()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::Array(a) => !a.is_empty(),
            Self::Function(_) => true,
        }
    }

    /// The name of the value's kind, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Null => "null",
            Self::Array(_) => "array",
            Self::Function(_) => "function",
        }
    }
}

/// Values of different kinds are never equal. Scalars compare by value,
/// while arrays and functions compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(true) => write!(f, "صحيح"),
            Self::Bool(false) => write!(f, "خطأ"),
            Self::Null => write!(f, "فارغ"),
            Self::Array(values) => {
                write!(f, "[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, "، ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            },
            Self::Function(function) => write!(f, "<دالة {}>", function.name),
        }
    }
}
