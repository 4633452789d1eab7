use super::visitor::Visitor;
use crate::circuit::QuantumCircuit;
use crate::elements::CircuitElement;
use crate::error::{Error, Phase, Result};
use crate::module::CircuitModule;
use tracing::{debug, trace};

/// Drive `visitor` through the four traversal phases of `module`.
pub fn walk_module<C, V>(visitor: &mut V, module: &CircuitModule<C>) -> Result<()>
where
    C: QuantumCircuit,
    V: Visitor<C> + ?Sized,
{
    debug!(
        module = %module.name(),
        elements = module.elements().len(),
        "entering circuit module"
    );
    visitor
        .visit_circuit_module(module)
        .map_err(failed_in(Phase::ModuleEnter))?;

    for (index, element) in module.elements().iter().enumerate() {
        walk_element(visitor, index, element)?;
    }

    debug!(module = %module.name(), "recording output");
    visitor
        .record_output(module)
        .map_err(failed_in(Phase::RecordOutput))?;

    visitor.finalize().map_err(failed_in(Phase::Finalize))?;
    debug!(module = %module.name(), "circuit module finalized");
    Ok(())
}

pub fn walk_element<C, V>(visitor: &mut V, index: usize, element: &CircuitElement<C>) -> Result<()>
where
    C: QuantumCircuit,
    V: Visitor<C> + ?Sized,
{
    trace!(index, kind = element.kind(), "visiting element");
    element
        .accept(visitor)
        .map_err(failed_in(Phase::Element(index)))
}

fn failed_in(phase: Phase) -> impl FnOnce(anyhow::Error) -> Error {
    move |source| Error::Visitor { phase, source }
}
