use crate::error::{IrError, Result};
use crate::module::{Instruction, Module};
use crate::types::{Type, Value};

/// Appends instructions to the end of one function of a module.
#[derive(Debug, Clone)]
pub struct Builder {
    module: Module,
    function: Option<String>,
}

impl Builder {
    pub fn new(module: &Module) -> Self {
        Self {
            module: module.clone(),
            function: None,
        }
    }

    pub fn position_at_end(&mut self, function: &str) -> Result<()> {
        if !self.module.has_function(function) {
            return Err(IrError::UnknownFunction(function.to_string()));
        }
        self.function = Some(function.to_string());
        Ok(())
    }

    pub fn module(&self) -> &Module {
        &self.module
    }

    /// Emit `call void @callee(args)`, declaring the callee on first use.
    pub fn call(&self, callee: &str, args: &[Value]) -> Result<()> {
        let function = self.insertion_point()?;
        let params: Vec<Type> = args.iter().map(Value::ty).collect();
        self.module.declare(callee, &params, Vec::new())?;
        self.module.push_instruction(
            function,
            Instruction::Call {
                callee: callee.to_string(),
                args: args.to_vec(),
            },
        )
    }

    pub fn ret_void(&self) -> Result<()> {
        let function = self.insertion_point()?;
        self.module.push_instruction(function, Instruction::RetVoid)
    }

    fn insertion_point(&self) -> Result<&str> {
        self.function.as_deref().ok_or(IrError::NoInsertionPoint)
    }
}
