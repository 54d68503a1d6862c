use std::rc::Rc;

use crate::{ast::Program, interpreter::environment::Env};

/// A user-defined function together with the scope it closes over.
///
/// Calls run the body in a fresh scope whose parent is `closure`, not the
/// caller's scope, which gives lexical scoping and lets a function call itself
/// through the binding it was defined with.
pub struct Function {
    /// The name the function was declared with.
    pub name:    String,
    /// Parameter names, bound positionally.
    pub params:  Vec<String>,
    /// The body, shared with the AST.
    pub body:    Rc<Program>,
    /// The scope active where the function was defined.
    pub closure: Env,
}

// The closure scope usually holds this very function, so it is left out.
impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
         .field("name", &self.name)
         .field("params", &self.params)
         .finish_non_exhaustive()
    }
}
