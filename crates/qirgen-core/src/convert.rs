//! Conversion entry points.

use crate::emit::{EmitterOptions, QirEmitter};
use crate::error::Result;
use crate::module::{CircuitModule, ModuleTarget};
use qirgen_circuit::Circuit;
use qirgen_ir::{Context, Module};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Module name. When unset the content-derived module ID is used.
    pub name: Option<String>,
    pub emit: EmitterOptions,
}

impl ConversionOptions {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Convert `circuit` into a QIR module.
pub fn circuit_to_qir(circuit: &Circuit, options: &ConversionOptions) -> Result<Module> {
    let target = match &options.name {
        Some(name) => ModuleTarget::Existing(Module::new(&Context::new(), name)),
        None => ModuleTarget::Fresh,
    };
    let module = CircuitModule::build(circuit, target)?;

    let mut emitter = QirEmitter::new(options.emit.clone());
    module.accept(&mut emitter)?;

    debug!(
        module = %module.name(),
        num_qubits = module.num_qubits(),
        num_results = emitter.result_keys().len(),
        "converted circuit to QIR"
    );
    Ok(module.module().clone())
}

/// Parse a circuit from its JSON form, rejecting anything that is not a
/// well-formed circuit.
pub fn circuit_from_json(json: &str) -> Result<Circuit> {
    Ok(Circuit::from_json(json)?)
}

pub fn json_to_qir(json: &str, options: &ConversionOptions) -> Result<Module> {
    let circuit = circuit_from_json(json)?;
    circuit_to_qir(&circuit, options)
}
