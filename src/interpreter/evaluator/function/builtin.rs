use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::{count_to_f64, round_half_up},
};

/// Defines a built-in that applies an `f64` function to its first argument.
///
/// The argument must be a number. Extra arguments are ignored; the call
/// site has already checked that there is at least one.
///
/// # Example
/// ```
/// use wisam::interpreter::{evaluator::function::builtin::sqrt, value::core::Value};
///
/// assert_eq!(sqrt(&[Value::Number(9.0)], 1).unwrap(), Value::Number(3.0));
/// assert!(sqrt(&[Value::from("9")], 1).is_err());
/// ```
macro_rules! unary_math_builtin {
    ($(#[$meta:meta])* $fname:ident, $arabic:literal, $real_fn:expr) => {
        $(#[$meta])*
        pub fn $fname(args: &[Value], line: usize) -> EvalResult<Value> {
            let x = number_arg(args, 0, $arabic, line)?;
            Ok(Value::Number($real_fn(x)))
        }
    };
}

unary_math_builtin!(
    /// `جذر`: square root.
    sqrt, "جذر", f64::sqrt
);
unary_math_builtin!(
    /// `مطلق`: absolute value.
    abs, "مطلق", f64::abs
);
unary_math_builtin!(
    /// `أرض`: largest integer not above the argument.
    floor, "أرض", f64::floor
);
unary_math_builtin!(
    /// `سقف`: smallest integer not below the argument.
    ceil, "سقف", f64::ceil
);
unary_math_builtin!(
    /// `قريب`: nearest integer, halves rounded toward positive infinity.
    round, "قريب", round_half_up
);
unary_math_builtin!(
    /// `جيب`: sine of an angle in radians.
    sin, "جيب", f64::sin
);
unary_math_builtin!(
    /// `جيب_التام`: cosine of an angle in radians.
    cos, "جيب_التام", f64::cos
);
unary_math_builtin!(
    /// `ظل`: tangent of an angle in radians.
    tan, "ظل", f64::tan
);
unary_math_builtin!(
    /// `لوغاريتم`: natural logarithm.
    ln, "لوغاريتم", f64::ln
);
unary_math_builtin!(
    /// `لوغاريتم10`: base 10 logarithm.
    log10, "لوغاريتم10", f64::log10
);

/// `أس`: raises the first argument to the power of the second.
///
/// # Example
/// ```
/// use wisam::interpreter::{evaluator::function::builtin::pow, value::core::Value};
///
/// let r = pow(&[Value::Number(2.0), Value::Number(0.5)], 1).unwrap();
/// assert_eq!(r, Value::Number(2f64.sqrt()));
/// ```
pub fn pow(args: &[Value], line: usize) -> EvalResult<Value> {
    let base = number_arg(args, 0, "أس", line)?;
    let exponent = number_arg(args, 1, "أس", line)?;

    Ok(Value::Number(base.powf(exponent)))
}

/// `الطول`: the number of characters in a string or elements in an array.
///
/// Characters are Unicode scalar values, so every Arabic letter counts once.
///
/// # Example
/// ```
/// use wisam::interpreter::{evaluator::function::builtin::length, value::core::Value};
///
/// assert_eq!(length(&[Value::from("سلام")], 1).unwrap(), Value::Number(4.0));
/// assert_eq!(length(&[Value::from(vec![Value::Null; 3])], 1).unwrap(), Value::Number(3.0));
/// ```
pub fn length(args: &[Value], line: usize) -> EvalResult<Value> {
    match args.first() {
        Some(Value::Str(s)) => Ok(Value::Number(count_to_f64(s.chars().count()))),
        Some(Value::Array(items)) => Ok(Value::Number(count_to_f64(items.len()))),
        other => {
            let found = other.map_or("nothing", Value::type_name);
            Err(RuntimeError::TypeError { details: format!("'الطول' expects a string or an array, found {found}"),
                                          line })
        },
    }
}

/// Reads argument `index` as a number, naming the built-in in the error.
fn number_arg(args: &[Value], index: usize, name: &str, line: usize) -> EvalResult<f64> {
    args.get(index)
        .unwrap_or(&Value::Null)
        .as_number(&format!("'{name}'"), line)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rounding_family() {
        assert_eq!(floor(&[Value::Number(-2.5)], 1).unwrap(), Value::Number(-3.0));
        assert_eq!(ceil(&[Value::Number(-2.5)], 1).unwrap(), Value::Number(-2.0));
        assert_eq!(round(&[Value::Number(-2.5)], 1).unwrap(), Value::Number(-2.0));
        assert_eq!(round(&[Value::Number(2.5)], 1).unwrap(), Value::Number(3.0));
    }

    #[test]
    fn logarithms() {
        assert_eq!(ln(&[Value::Number(1.0)], 1).unwrap(), Value::Number(0.0));
        assert_eq!(log10(&[Value::Number(1000.0)], 1).unwrap(), Value::Number(3.0));
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let r = abs(&[Value::Number(-4.0), Value::from("ignored")], 1).unwrap();

        assert_eq!(r, Value::Number(4.0));
    }

    #[test]
    fn wrong_kind_names_the_builtin() {
        let error = sqrt(&[Value::Bool(true)], 7).unwrap_err();

        assert_eq!(error.to_string(),
                   "Error on line 7: Type error: 'جذر' expects a number, found boolean.");
    }

    #[test]
    fn length_rejects_numbers() {
        let error = length(&[Value::Number(12.0)], 2).unwrap_err();

        assert_eq!(error.to_string(),
                   "Error on line 2: Type error: 'الطول' expects a string or an array, found number.");
    }
}
