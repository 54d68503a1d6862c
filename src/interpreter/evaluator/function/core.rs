use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::{
            core::{EvalResult, Flow, Interpreter},
            function::builtin,
        },
        value::{core::Value, function::Function},
    },
    util::stack::ensure_sufficient_stack,
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and the line number.
type BuiltinFn = fn(&[Value], usize) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - the Arabic name programs call it by,
/// - the fewest arguments a call must pass (extra ones are ignored),
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (list of builtin names, for tests).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                min_args: $min_args:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:     &'static str,
            min_args: usize,
            func:     BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, min_args: $min_args, func: $func },
            )*
        ];
        #[cfg(test)]
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "جذر"        => { min_args: 1, func: builtin::sqrt },
    "أس"         => { min_args: 2, func: builtin::pow },
    "مطلق"       => { min_args: 1, func: builtin::abs },
    "أرض"        => { min_args: 1, func: builtin::floor },
    "سقف"        => { min_args: 1, func: builtin::ceil },
    "قريب"       => { min_args: 1, func: builtin::round },
    "جيب"        => { min_args: 1, func: builtin::sin },
    "جيب_التام"  => { min_args: 1, func: builtin::cos },
    "ظل"         => { min_args: 1, func: builtin::tan },
    "لوغاريتم"   => { min_args: 1, func: builtin::ln },
    "لوغاريتم10" => { min_args: 1, func: builtin::log10 },
    "الطول"      => { min_args: 1, func: builtin::length },
}

impl Interpreter {
    /// Evaluates a function call.
    ///
    /// Built-in names win over any binding of the same name: a built-in is
    /// applied to its evaluated arguments directly, without a new scope.
    /// Any other name must resolve to a function value in `env`.
    ///
    /// # Parameters
    /// - `name`: The called name.
    /// - `arguments`: Argument expressions, evaluated left to right.
    /// - `line`: Line number for error reporting.
    /// - `env`: The caller's scope.
    ///
    /// # Returns
    /// The function result.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if a built-in gets too few arguments.
    /// - `UnknownFunction` if `name` is not bound.
    /// - `NotAFunction` if `name` is bound to something else.
    /// - `RecursionLimit` if the call would exceed the configured depth.
    pub(in crate::interpreter::evaluator) fn eval_function_call(&mut self,
                                                                name: &str,
                                                                arguments: &[Expr],
                                                                line: usize,
                                                                env: &Env)
                                                                -> EvalResult<Value> {
        if let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) {
            let args = self.eval_arguments(arguments, env)?;
            let expected = builtin.min_args;
            if args.len() < expected {
                return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                                 expected,
                                                                 found: args.len(),
                                                                 line });
            }
            tracing::trace!(name, args = args.len(), "builtin call");
            return (builtin.func)(&args, line);
        }

        let callee = env.borrow()
                        .get(name)
                        .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                       line })?;
        let Value::Function(function) = callee else {
            return Err(RuntimeError::NotAFunction { name: name.to_string(),
                                                    line });
        };

        let args = self.eval_arguments(arguments, env)?;
        self.call_user_defined_function(&function, args, line)
    }

    /// Evaluates call arguments left to right.
    fn eval_arguments(&mut self, arguments: &[Expr], env: &Env) -> EvalResult<Vec<Value>> {
        arguments.iter().map(|argument| self.eval(argument, env)).collect()
    }

    /// Executes a user-defined function.
    ///
    /// A new scope whose parent is the function's closure is created, so the
    /// body sees the bindings of the place it was defined in, not of the
    /// caller. Parameters are bound positionally: extra arguments are
    /// dropped and parameters without an argument stay unbound.
    ///
    /// # Returns
    /// The value of the body's `أعد`, or `فارغ` if it finished without one.
    fn call_user_defined_function(&mut self,
                                  function: &Rc<Function>,
                                  args: Vec<Value>,
                                  line: usize)
                                  -> EvalResult<Value> {
        if self.depth >= self.config.max_call_depth {
            return Err(RuntimeError::RecursionLimit { limit: self.config.max_call_depth,
                                                      line });
        }

        tracing::trace!(name = %function.name, args = args.len(), depth = self.depth, "call");

        let scope = Environment::child(&function.closure);
        {
            let mut scope = scope.borrow_mut();
            for (param, value) in function.params.iter().zip(args) {
                scope.define(param, value, false);
            }
        }

        self.depth += 1;
        let flow = ensure_sufficient_stack(|| self.exec_block(&function.body, &scope));
        self.depth -= 1;

        match flow? {
            Flow::Returned(value) => Ok(value),
            Flow::Normal(_) | Flow::Broke | Flow::Continued => Ok(Value::Null),
        }
    }
}
