use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    f64::consts,
    rc::Rc,
};

use crate::interpreter::value::core::Value;

/// A shared, mutable handle to a scope.
///
/// Child scopes, running code and closures all hold handles to their scope;
/// a scope lives as long as any of them does.
pub type Env = Rc<RefCell<Environment>>;

/// Why an assignment was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignError {
    /// No scope in the chain binds the name.
    Undefined,
    /// The nearest binding of the name is a constant.
    Constant,
}

/// One scope in the chain of variable scopes.
///
/// `ليكن` and `ثابت` always bind in the current scope, replacing any binding
/// of the same name there. Plain assignment searches outward through the
/// parents and updates the nearest binding, unless it is a constant.
#[derive(Debug, Default)]
pub struct Environment {
    bindings:  HashMap<String, Value>,
    constants: HashSet<String>,
    parent:    Option<Env>,
}

impl Environment {
    /// Creates the global scope, seeded with the constants `صحيح`, `خطأ`,
    /// `فارغ`, `PI` and `E`.
    #[must_use]
    pub fn global() -> Env {
        let mut global = Self::default();
        global.define("صحيح", Value::Bool(true), true);
        global.define("خطأ", Value::Bool(false), true);
        global.define("فارغ", Value::Null, true);
        global.define("PI", Value::Number(consts::PI), true);
        global.define("E", Value::Number(consts::E), true);
        Rc::new(RefCell::new(global))
    }

    /// Creates an empty scope whose parent is `parent`.
    #[must_use]
    pub fn child(parent: &Env) -> Env {
        Rc::new(RefCell::new(Self { parent: Some(Rc::clone(parent)),
                                    ..Self::default() }))
    }

    /// Binds `name` in this scope.
    ///
    /// # Parameters
    /// - `name`: The variable name.
    /// - `value`: The value to bind.
    /// - `constant`: Whether later assignments are refused. Once a name is
    ///   constant in a scope it stays constant there, even if it is defined
    ///   again without the flag.
    pub fn define(&mut self, name: &str, value: Value, constant: bool) {
        if constant {
            self.constants.insert(name.to_string());
        }
        self.bindings.insert(name.to_string(), value);
    }

    /// Looks `name` up in this scope and then in each parent.
    ///
    /// # Returns
    /// A clone of the nearest binding, or `None` if no scope binds `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref()?.borrow().get(name)
    }

    /// Replaces the nearest binding of `name`.
    ///
    /// # Errors
    /// - [`AssignError::Undefined`] if no scope binds `name`.
    /// - [`AssignError::Constant`] if the nearest binding is a constant.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), AssignError> {
        if let Some(slot) = self.bindings.get_mut(name) {
            if self.constants.contains(name) {
                return Err(AssignError::Constant);
            }
            *slot = value;
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(AssignError::Undefined),
        }
    }

    /// Tests whether `name` is bound in this scope or any parent.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
        || self.parent
               .as_ref()
               .is_some_and(|parent| parent.borrow().contains(name))
    }

    /// Drops every binding of this scope.
    ///
    /// Functions hold their defining scope, which in turn holds them; clearing
    /// the scope breaks that cycle.
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.constants.clear();
    }
}
