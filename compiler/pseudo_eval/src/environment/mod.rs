//! Variable scopes.
//!
//! Every program or module invocation gets a fresh scope that sees only the
//! built-in constants and its own bindings. There is no parent chain: the
//! environment is a stack so the caller's scope comes back when the callee
//! returns.

use rustc_hash::FxHashMap;

use pseudo_ir::Value;

use crate::errors::{assign_to_constant, undefined_variable, EvalError};

/// Whether a binding can be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    Mutable,
    /// Built-in constants such as `TRUE` and `INF`.
    Immutable,
}

impl Mutability {
    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

/// Names pre-bound in every scope, with their spelling variants.
const CONSTANTS: [(&str, Constant); 12] = [
    ("TRUE", Constant::True),
    ("true", Constant::True),
    ("True", Constant::True),
    ("FALSE", Constant::False),
    ("false", Constant::False),
    ("False", Constant::False),
    ("NULL", Constant::Null),
    ("null", Constant::Null),
    ("None", Constant::Null),
    ("INF", Constant::Inf),
    ("inf", Constant::Inf),
    ("Infinity", Constant::Inf),
];

#[derive(Clone, Copy)]
enum Constant {
    True,
    False,
    Null,
    Inf,
}

impl Constant {
    fn value(self) -> Value {
        match self {
            Constant::True => Value::Number(1.0),
            Constant::False => Value::Number(0.0),
            Constant::Null => Value::Symbol,
            Constant::Inf => Value::Number(f64::INFINITY),
        }
    }
}

/// True if `name` is one of the built-in constants.
pub fn is_constant(name: &str) -> bool {
    CONSTANTS.iter().any(|(n, _)| *n == name)
}

#[derive(Clone, Debug)]
struct Binding {
    value: Value,
    mutability: Mutability,
}

/// The variable bindings of one invocation.
#[derive(Clone, Debug)]
pub struct Scope {
    bindings: FxHashMap<String, Binding>,
}

impl Scope {
    /// A scope holding only the built-in constants.
    pub fn new() -> Self {
        let mut scope = Scope {
            bindings: FxHashMap::default(),
        };
        for (name, constant) in CONSTANTS {
            scope.define(name, constant.value(), Mutability::Immutable);
        }
        scope
    }

    /// Bind `name` unconditionally.
    #[inline]
    pub fn define(&mut self, name: &str, value: Value, mutability: Mutability) {
        self.bindings
            .insert(name.to_string(), Binding { value, mutability });
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).map(|b| b.value.clone())
    }

    /// Create or overwrite a variable. Constants cannot be overwritten.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), EvalError> {
        match self.bindings.get_mut(name) {
            Some(binding) if !binding.mutability.is_mutable() => Err(assign_to_constant(name)),
            Some(binding) => {
                binding.value = value;
                Ok(())
            }
            None => {
                self.define(name, value, Mutability::Mutable);
                Ok(())
            }
        }
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

/// The top-level session scope plus a stack of invocation scopes.
pub struct Environment {
    global: Scope,
    frames: Vec<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            global: Scope::new(),
            frames: Vec::new(),
        }
    }

    /// Number of live scopes, including the top-level one.
    pub fn depth(&self) -> usize {
        self.frames.len() + 1
    }

    /// Enter a fresh invocation scope.
    #[inline]
    pub fn push_scope(&mut self, scope: Scope) {
        self.frames.push(scope);
    }

    /// Leave the current invocation scope. The top-level scope is never popped.
    #[inline]
    pub fn pop_scope(&mut self) {
        self.frames.pop();
    }

    #[inline]
    fn current(&self) -> &Scope {
        self.frames.last().unwrap_or(&self.global)
    }

    #[inline]
    fn current_mut(&mut self) -> &mut Scope {
        match self.frames.last_mut() {
            Some(scope) => scope,
            None => &mut self.global,
        }
    }

    pub fn lookup(&self, name: &str) -> Result<Value, EvalError> {
        self.current()
            .lookup(name)
            .ok_or_else(|| undefined_variable(name))
    }

    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), EvalError> {
        self.current_mut().assign(name, value)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
