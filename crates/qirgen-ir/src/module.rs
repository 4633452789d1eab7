use crate::context::Context;
use crate::error::{IrError, Result};
use crate::types::{Type, Value};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

/// A string function attribute, optionally with a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub key: String,
    pub value: Option<String>,
}

impl Attribute {
    pub fn flag(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    pub fn pair(key: impl Into<String>, value: impl ToString) -> Self {
        Self {
            key: key.into(),
            value: Some(value.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagValue {
    I32(i32),
    Bool(bool),
}

/// An entry of `!llvm.module.flags`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleFlag {
    pub behavior: u32,
    pub key: String,
    pub value: FlagValue,
}

impl ModuleFlag {
    pub fn new(behavior: u32, key: impl Into<String>, value: FlagValue) -> Self {
        Self {
            behavior,
            key: key.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Instruction {
    Call { callee: String, args: Vec<Value> },
    RetVoid,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Function {
    pub(crate) name: String,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) body: Vec<Instruction>,
}

impl Function {
    fn is_terminated(&self) -> bool {
        matches!(self.body.last(), Some(Instruction::RetVoid))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Declaration {
    pub(crate) params: Vec<Type>,
    pub(crate) attributes: Vec<Attribute>,
}

#[derive(Debug)]
pub(crate) struct ModuleData {
    pub(crate) context: Context,
    pub(crate) source_filename: String,
    pub(crate) functions: Vec<Function>,
    pub(crate) declarations: IndexMap<String, Declaration>,
    pub(crate) flags: Vec<ModuleFlag>,
}

impl ModuleData {
    fn function_mut(&mut self, name: &str) -> Result<&mut Function> {
        self.functions
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| IrError::UnknownFunction(name.to_string()))
    }
}

/// Shared handle to an IR module.
///
/// Cloning the handle does not copy the module; all clones observe the same
/// contents.
#[derive(Debug, Clone)]
pub struct Module {
    inner: Rc<RefCell<ModuleData>>,
}

impl Module {
    pub fn new(context: &Context, name: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ModuleData {
                context: context.clone(),
                source_filename: name.to_string(),
                functions: Vec::new(),
                declarations: IndexMap::new(),
                flags: Vec::new(),
            })),
        }
    }

    pub fn source_filename(&self) -> String {
        self.inner.borrow().source_filename.clone()
    }

    pub fn set_source_filename(&self, name: &str) {
        self.inner.borrow_mut().source_filename = name.to_string();
    }

    pub fn context(&self) -> Context {
        self.inner.borrow().context.clone()
    }

    /// Whether both handles refer to the same module.
    pub fn same_as(&self, other: &Module) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Define a new `void()` function with an empty body.
    pub fn add_function(&self, name: &str, attributes: Vec<Attribute>) -> Result<()> {
        let mut data = self.inner.borrow_mut();
        if data.functions.iter().any(|f| f.name == name) {
            return Err(IrError::DuplicateFunction(name.to_string()));
        }
        data.functions.push(Function {
            name: name.to_string(),
            attributes,
            body: Vec::new(),
        });
        Ok(())
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.inner.borrow().functions.iter().any(|f| f.name == name)
    }

    pub fn function_names(&self) -> Vec<String> {
        self.inner
            .borrow()
            .functions
            .iter()
            .map(|f| f.name.clone())
            .collect()
    }

    /// Set (or replace) a string attribute on a defined function.
    pub fn set_function_attribute(&self, function: &str, attribute: Attribute) -> Result<()> {
        let mut data = self.inner.borrow_mut();
        let f = data.function_mut(function)?;
        match f.attributes.iter_mut().find(|a| a.key == attribute.key) {
            Some(existing) => *existing = attribute,
            None => f.attributes.push(attribute),
        }
        Ok(())
    }

    pub fn function_attribute(&self, function: &str, key: &str) -> Option<Attribute> {
        let data = self.inner.borrow();
        data.functions
            .iter()
            .find(|f| f.name == function)?
            .attributes
            .iter()
            .find(|a| a.key == key)
            .cloned()
    }

    /// Declare an external `void` function. Re-declaring with the same
    /// parameters is a no-op; different parameters are an error.
    pub fn declare(&self, name: &str, params: &[Type], attributes: Vec<Attribute>) -> Result<()> {
        let mut data = self.inner.borrow_mut();
        if let Some(existing) = data.declarations.get(name) {
            if existing.params != params {
                return Err(IrError::SignatureMismatch {
                    name: name.to_string(),
                    expected: join_types(&existing.params),
                    actual: join_types(params),
                });
            }
            return Ok(());
        }
        data.declarations.insert(
            name.to_string(),
            Declaration {
                params: params.to_vec(),
                attributes,
            },
        );
        Ok(())
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.inner.borrow().declarations.contains_key(name)
    }

    pub fn add_flag(&self, flag: ModuleFlag) {
        self.inner.borrow_mut().flags.push(flag);
    }

    /// Number of instructions in a defined function.
    pub fn instruction_count(&self, function: &str) -> Option<usize> {
        let data = self.inner.borrow();
        data.functions
            .iter()
            .find(|f| f.name == function)
            .map(|f| f.body.len())
    }

    pub(crate) fn push_instruction(&self, function: &str, instruction: Instruction) -> Result<()> {
        let mut data = self.inner.borrow_mut();
        let f = data.function_mut(function)?;
        if f.is_terminated() {
            return Err(IrError::Terminated(function.to_string()));
        }
        f.body.push(instruction);
        Ok(())
    }

    /// Render the module as LLVM textual IR.
    pub fn ir(&self) -> String {
        crate::render::render_module(&self.inner.borrow())
    }
}

pub(crate) fn join_types(types: &[Type]) -> String {
    types
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_share_state() {
        let ctx = Context::new();
        let module = Module::new(&ctx, "circuit-abc");
        let alias = module.clone();

        alias.set_source_filename("renamed");
        assert_eq!(module.source_filename(), "renamed");
        assert!(module.same_as(&alias));
        assert!(module.context().same_as(&ctx));
    }

    #[test]
    fn test_duplicate_function_is_rejected() {
        let module = Module::new(&Context::new(), "m");
        module.add_function("main", vec![]).unwrap();
        assert_eq!(
            module.add_function("main", vec![]),
            Err(IrError::DuplicateFunction("main".into()))
        );
    }

    #[test]
    fn test_attribute_is_replaced_in_place() {
        let module = Module::new(&Context::new(), "m");
        module
            .add_function(
                "main",
                vec![Attribute::flag("entry_point"), Attribute::pair("required_num_results", 0)],
            )
            .unwrap();
        module
            .set_function_attribute("main", Attribute::pair("required_num_results", 3))
            .unwrap();

        assert_eq!(
            module.function_attribute("main", "required_num_results"),
            Some(Attribute::pair("required_num_results", "3"))
        );
        assert!(module
            .set_function_attribute("missing", Attribute::flag("x"))
            .is_err());
    }

    #[test]
    fn test_redeclaration_checks_signature() {
        let module = Module::new(&Context::new(), "m");
        module.declare("f", &[Type::QubitPtr], vec![]).unwrap();
        module.declare("f", &[Type::QubitPtr], vec![]).unwrap();

        let err = module.declare("f", &[Type::Double], vec![]).unwrap_err();
        assert!(matches!(err, IrError::SignatureMismatch { .. }));
    }
}
