//! The circuit module: a circuit's structure paired with its IR module.

use crate::circuit::QuantumCircuit;
use crate::elements::CircuitElement;
use crate::error::Result;
use crate::module_id::generate_module_id;
use crate::traversal::{walker, Visitor};
use qirgen_ir::{Context, Module};
use tracing::debug;

/// Where a circuit module's IR handle comes from.
#[derive(Debug, Clone)]
pub enum ModuleTarget {
    /// Allocate a module in a new context, named by the circuit's module ID.
    Fresh,
    /// Use the caller's module; its `source_filename` becomes the name and
    /// no module ID is computed.
    Existing(Module),
}

#[derive(Debug, Clone)]
pub struct CircuitModule<C: QuantumCircuit> {
    name: String,
    module: Module,
    num_qubits: usize,
    elements: Vec<CircuitElement<C>>,
}

impl<C: QuantumCircuit> CircuitModule<C> {
    pub fn new(
        name: String,
        module: Module,
        num_qubits: usize,
        elements: Vec<CircuitElement<C>>,
    ) -> Self {
        Self {
            name,
            module,
            num_qubits,
            elements,
        }
    }

    /// Build a module for `circuit` in a fresh IR context.
    pub fn from_circuit(circuit: &C) -> Result<Self> {
        Self::build(circuit, ModuleTarget::Fresh)
    }

    /// Build a module for `circuit` around an existing IR module handle.
    pub fn from_circuit_with_module(circuit: &C, module: Module) -> Self {
        Self::assemble(circuit, module)
    }

    pub fn build(circuit: &C, target: ModuleTarget) -> Result<Self> {
        let module = match target {
            ModuleTarget::Fresh => {
                let id = generate_module_id(circuit)?;
                Module::new(&Context::new(), &id)
            }
            ModuleTarget::Existing(module) => module,
        };
        Ok(Self::assemble(circuit, module))
    }

    fn assemble(circuit: &C, module: Module) -> Self {
        let qubits = circuit.all_qubits();
        let num_qubits = qubits.len();

        let mut elements = CircuitElement::registers([qubits]);
        elements.extend(CircuitElement::operations(circuit.all_operations()));

        let name = module.source_filename();
        debug!(
            module = %name,
            num_qubits,
            operations = elements.len() - 1,
            "built circuit module"
        );
        Self::new(name, module, num_qubits, elements)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The IR module handle visitors emit into.
    pub fn module(&self) -> &Module {
        &self.module
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn elements(&self) -> &[CircuitElement<C>] {
        &self.elements
    }

    /// Run `visitor` over this module: module enter, every element in
    /// order, record output, finalize.
    pub fn accept<V>(&self, visitor: &mut V) -> Result<()>
    where
        V: Visitor<C> + ?Sized,
    {
        walker::walk_module(visitor, self)
    }
}
