//! Registry of defined programs and modules.
//!
//! One registry lives for a whole session and is shared by every scope.
//! Definitions are write-once, and programs and modules share one
//! namespace: a name defined as either cannot be defined again as either.

use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use pseudo_ir::{ModuleDef, ProgramDef, Value};

use crate::errors::{already_defined, EvalError};

/// Host function behind a native binding. Receives exactly `arity` values.
pub type NativeFn = fn(&[Value]) -> Result<Value, String>;

/// A module-like callable implemented by the interpreter itself.
#[derive(Clone, Copy)]
pub struct NativeBinding {
    pub name: &'static str,
    pub arity: usize,
    pub func: NativeFn,
}

impl NativeBinding {
    pub const fn new(name: &'static str, arity: usize, func: NativeFn) -> Self {
        NativeBinding { name, arity, func }
    }
}

impl fmt::Debug for NativeBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeBinding")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Anything that can be invoked by name.
#[derive(Debug)]
pub enum Callable {
    Program(ProgramDef),
    Module(ModuleDef),
    Native(NativeBinding),
}

impl Callable {
    pub fn name(&self) -> &str {
        match self {
            Callable::Program(p) => &p.name,
            Callable::Module(m) => &m.name,
            Callable::Native(n) => n.name,
        }
    }
}

/// Programs and modules by name.
#[derive(Default)]
pub struct Registry {
    programs: FxHashMap<String, Rc<Callable>>,
    modules: FxHashMap<String, Rc<Callable>>,
    /// Program names in definition order.
    program_order: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.programs.contains_key(name) || self.modules.contains_key(name)
    }

    fn check_free(&self, name: &str) -> Result<(), EvalError> {
        if self.contains(name) {
            Err(already_defined(name))
        } else {
            Ok(())
        }
    }

    pub fn def_program(&mut self, program: ProgramDef) -> Result<(), EvalError> {
        self.check_free(&program.name)?;
        tracing::debug!(name = %program.name, "defined program");
        self.program_order.push(program.name.clone());
        self.programs
            .insert(program.name.clone(), Rc::new(Callable::Program(program)));
        Ok(())
    }

    pub fn def_module(&mut self, module: ModuleDef) -> Result<(), EvalError> {
        self.check_free(&module.name)?;
        tracing::debug!(name = %module.name, params = module.params.len(), "defined module");
        self.modules
            .insert(module.name.clone(), Rc::new(Callable::Module(module)));
        Ok(())
    }

    pub fn def_native(&mut self, binding: NativeBinding) -> Result<(), EvalError> {
        self.check_free(binding.name)?;
        self.modules
            .insert(binding.name.to_string(), Rc::new(Callable::Native(binding)));
        Ok(())
    }

    /// A program by name.
    pub fn program(&self, name: &str) -> Option<Rc<Callable>> {
        self.programs.get(name).cloned()
    }

    /// A user module or native binding by name.
    pub fn module(&self, name: &str) -> Option<Rc<Callable>> {
        self.modules.get(name).cloned()
    }

    /// Names of all defined programs, oldest first.
    pub fn program_names(&self) -> &[String] {
        &self.program_order
    }
}
