use crate::circuit::QuantumCircuit;
use crate::module::CircuitModule;
use std::collections::BTreeSet;

/// Receives a circuit module's structure in traversal order.
///
/// [`CircuitModule::accept`] calls, in this order and exactly once each
/// unless a call fails: `visit_circuit_module`, then `visit_register` or
/// `visit_operation` per element, then `record_output`, then `finalize`.
/// Returning an error aborts the remaining phases.
pub trait Visitor<C: QuantumCircuit> {
    /// Module entry, typically where the entry point is created.
    fn visit_circuit_module(&mut self, module: &CircuitModule<C>) -> anyhow::Result<()>;

    fn visit_register(&mut self, qubits: &BTreeSet<C::Qubit>) -> anyhow::Result<()>;

    fn visit_operation(&mut self, operation: &C::Operation) -> anyhow::Result<()>;

    /// Called after every element has been visited.
    fn record_output(&mut self, module: &CircuitModule<C>) -> anyhow::Result<()>;

    fn finalize(&mut self) -> anyhow::Result<()>;
}
