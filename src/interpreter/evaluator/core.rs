use std::rc::Rc;

use crate::{
    ast::{Expr, Program, Statement},
    config::Config,
    error::RuntimeError,
    interpreter::{
        environment::{AssignError, Env, Environment},
        value::{core::Value, function::Function},
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement or block finished.
///
/// Every statement reports its flow; blocks stop at the first non-normal one
/// and hand it to their caller. Loops consume `Broke` and `Continued`, and
/// function calls consume `Returned`.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Finished normally, with the value of the last statement.
    Normal(Value),
    /// `أعد` ran with this value.
    Returned(Value),
    /// `توقف` ran.
    Broke,
    /// `استمر` ran.
    Continued,
}

/// The result of running a program.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunOutcome {
    /// Whether the program ran to completion without a runtime error.
    pub success: bool,
    /// Every printed line, in order, including lines printed before a
    /// runtime error.
    pub output:  Vec<String>,
    /// The runtime error message, if the run failed. Holds at most one
    /// entry.
    pub errors:  Vec<String>,
}

/// A source of input lines for `ادخل`.
///
/// Without one, `ادخل` evaluates to `فارغ`.
pub trait InputSource {
    /// Reads one line, showing `prompt` first if there is one.
    ///
    /// # Returns
    /// The line without its terminator, or `None` if no input is available.
    fn read_line(&mut self, prompt: Option<&str>) -> Option<String>;
}

/// Stores the runtime evaluation state.
///
/// An `Interpreter` can run any number of programs. Each [`Interpreter::run`]
/// starts from a fresh global scope and an empty output buffer.
///
/// # Example
/// ```
/// use wisam::{Interpreter, parse};
///
/// let parsed = parse("ليكن س = 10\nاكتب \"القيمة: {س}\"");
/// let outcome = Interpreter::new().run(&parsed.program);
///
/// assert!(outcome.success);
/// assert_eq!(outcome.output, ["القيمة: 10"]);
/// ```
pub struct Interpreter {
    pub(super) config: Config,
    pub(super) output: Vec<String>,
    pub(super) input:  Option<Box<dyn InputSource>>,
    pub(super) depth:  usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter with the default [`Config`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an interpreter with the given settings.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { config,
               output: Vec::new(),
               input: None,
               depth: 0 }
    }

    /// Installs the source `ادخل` reads from.
    pub fn set_input(&mut self, input: Box<dyn InputSource>) {
        self.input = Some(input);
    }

    /// Runs `program` from a fresh global scope.
    ///
    /// The first runtime error stops the run. Lines printed before it are
    /// kept in the outcome. A `أعد`, `توقف` or `استمر` at the top level ends
    /// the program successfully.
    ///
    /// # Parameters
    /// - `program`: A program without syntax errors.
    ///
    /// # Returns
    /// The success flag, the printed lines and the error, if any.
    pub fn run(&mut self, program: &Program) -> RunOutcome {
        self.output.clear();
        self.depth = 0;

        let global = Environment::global();
        let result = self.exec_block(program, &global);
        global.borrow_mut().clear();

        let output = std::mem::take(&mut self.output);
        match result {
            Ok(flow) => {
                tracing::debug!(lines = output.len(), ?flow, "run finished");
                RunOutcome { success: true,
                             output,
                             errors: Vec::new() }
            },
            Err(error) => {
                tracing::debug!(lines = output.len(), %error, "run failed");
                RunOutcome { success: false,
                             output,
                             errors: vec![error.to_string()] }
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant:
    /// literals, identifiers, unary and binary operations, function calls,
    /// array literals and input requests.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: The scope names resolve in.
    ///
    /// # Returns
    /// The value of the expression.
    pub fn eval(&mut self, expr: &Expr, env: &Env) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Identifier { name, line } => {
                env.borrow()
                   .get(name)
                   .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                  line: *line, })
            },
            Expr::UnaryOp { op, expr, line } => {
                let value = ensure_sufficient_stack(|| self.eval(expr, env))?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => ensure_sufficient_stack(|| self.eval_binary_op(left, *op, right, *line, env)),
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line, env),
            Expr::Array { elements, .. } => {
                let values = elements.iter()
                                     .map(|element| self.eval(element, env))
                                     .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::from(values))
            },
            Expr::Input { prompt, .. } => Ok(self.read_input(prompt.as_deref())),
        }
    }

    /// Executes a single statement.
    ///
    /// Handles declarations, assignments, conditionals, loops, function
    /// definitions, the flow keywords, printing and expression statements.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    /// - `env`: The current scope.
    ///
    /// # Returns
    /// How the statement finished.
    pub fn exec_statement(&mut self, statement: &Statement, env: &Env) -> EvalResult<Flow> {
        match statement {
            Statement::Let { name, value, .. } => {
                let value = self.eval(value, env)?;
                env.borrow_mut().define(name, value.clone(), false);
                Ok(Flow::Normal(value))
            },
            Statement::Const { name, value, .. } => {
                let value = self.eval(value, env)?;
                env.borrow_mut().define(name, value.clone(), true);
                Ok(Flow::Normal(value))
            },
            Statement::Assign { name, value, line } => {
                let value = self.eval(value, env)?;
                Self::assign(env, name, value.clone(), *line)?;
                Ok(Flow::Normal(value))
            },
            Statement::CompoundAssign { name,
                                        op,
                                        value,
                                        line, } => {
                let current =
                    env.borrow()
                       .get(name)
                       .ok_or_else(|| RuntimeError::UnknownVariable { name: name.clone(),
                                                                      line: *line, })?;
                let operand = self.eval(value, env)?;
                let result = Self::eval_binary(*op, &current, &operand, *line)?;
                Self::assign(env, name, result.clone(), *line)?;
                Ok(Flow::Normal(result))
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => self.exec_if(condition, then_branch, else_branch.as_ref(), env),
            Statement::For { var,
                             start,
                             end,
                             body,
                             line, } => self.exec_for(var, start, end, body, *line, env),
            Statement::While { condition, body, .. } => self.exec_while(condition, body, env),
            Statement::Function(def) => {
                let function = Function { name:    def.name.clone(),
                                          params:  def.params.clone(),
                                          body:    Rc::clone(&def.body),
                                          closure: Rc::clone(env), };
                env.borrow_mut()
                   .define(&def.name, Value::Function(Rc::new(function)), false);
                Ok(Flow::Normal(Value::Null))
            },
            Statement::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.eval(expr, env)?,
                    None => Value::Null,
                };
                Ok(Flow::Returned(value))
            },
            Statement::Print { value, .. } => {
                let value = self.eval(value, env)?;
                let line = self.format_for_print(&value, env);
                self.output.push(line);
                Ok(Flow::Normal(Value::Null))
            },
            Statement::Break { .. } => Ok(Flow::Broke),
            Statement::Continue { .. } => Ok(Flow::Continued),
            Statement::Expression { expr, .. } => Ok(Flow::Normal(self.eval(expr, env)?)),
        }
    }

    /// Replaces the nearest binding of `name`, translating refusals into
    /// runtime errors.
    fn assign(env: &Env, name: &str, value: Value, line: usize) -> EvalResult<()> {
        env.borrow_mut()
           .assign(name, value)
           .map_err(|error| match error {
               AssignError::Undefined => RuntimeError::UnknownVariable { name: name.to_string(),
                                                                         line },
               AssignError::Constant => {
                   RuntimeError::ConstantReassignment { name: name.to_string(),
                                                        line }
               },
           })
    }

    /// Reads a line from the installed input source.
    ///
    /// # Returns
    /// The line as a string, or `فارغ` when there is no source or it has no
    /// more input.
    fn read_input(&mut self, prompt: Option<&str>) -> Value {
        let Some(input) = self.input.as_mut() else {
            tracing::warn!(?prompt, "no input source attached, input reads as null");
            return Value::Null;
        };
        input.read_line(prompt).map_or(Value::Null, Value::from)
    }
}
