//! The circuit interface the traversal core consumes.

use qirgen_circuit::{Circuit, Operation, Qid};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// What the core needs from a circuit: its qubit set, its operations in
/// order, and a canonical serialized form.
pub trait QuantumCircuit: Serialize {
    type Qubit: Clone + Ord + fmt::Debug;
    type Operation: Clone + fmt::Debug;

    fn all_qubits(&self) -> BTreeSet<Self::Qubit>;

    fn all_operations(&self) -> Vec<Self::Operation>;

    /// Canonical textual form hashed into the module ID.
    fn canonical_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl QuantumCircuit for Circuit {
    type Qubit = Qid;
    type Operation = Operation;

    fn all_qubits(&self) -> BTreeSet<Qid> {
        Circuit::all_qubits(self)
    }

    fn all_operations(&self) -> Vec<Operation> {
        Circuit::all_operations(self).cloned().collect()
    }
}
