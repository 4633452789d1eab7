use crate::error::{CircuitError, Result};
use crate::operation::Operation;
use crate::qid::Qid;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A time slice of operations acting on disjoint qubits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cirq_type", rename = "Moment")]
pub struct Moment {
    operations: Vec<Operation>,
}

impl Moment {
    pub fn new(operations: Vec<Operation>) -> Result<Self> {
        let moment = Self { operations };
        moment.validate()?;
        Ok(moment)
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn qubits(&self) -> BTreeSet<&Qid> {
        self.operations.iter().flat_map(|op| op.qubits()).collect()
    }

    /// Whether any operation in this moment touches one of `qubits`.
    pub fn operates_on(&self, qubits: &[Qid]) -> bool {
        self.operations
            .iter()
            .any(|op| op.qubits().iter().any(|q| qubits.contains(q)))
    }

    fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for op in &self.operations {
            op.validate()?;
            for q in op.qubits() {
                if !seen.insert(q) {
                    return Err(CircuitError::MomentOverlap(q.clone()));
                }
            }
        }
        Ok(())
    }
}

/// An ordered sequence of moments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cirq_type", rename = "Circuit")]
pub struct Circuit {
    moments: Vec<Moment>,
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_moments(moments: Vec<Moment>) -> Result<Self> {
        let circuit = Self { moments };
        circuit.validate()?;
        Ok(circuit)
    }

    /// Append `op` to the earliest moment after the last one that touches
    /// any of its qubits, creating a new moment when needed.
    pub fn append(&mut self, op: Operation) {
        let target = self
            .moments
            .iter()
            .rposition(|m| m.operates_on(op.qubits()))
            .map_or(0, |i| i + 1);

        if target == self.moments.len() {
            self.moments.push(Moment::default());
        }
        self.moments[target].operations.push(op);
    }

    pub fn moments(&self) -> &[Moment] {
        &self.moments
    }

    /// Every qubit referenced by any operation.
    pub fn all_qubits(&self) -> BTreeSet<Qid> {
        self.moments
            .iter()
            .flat_map(|m| m.operations())
            .flat_map(|op| op.qubits().iter().cloned())
            .collect()
    }

    /// Operations in moment order, then in insertion order within a moment.
    pub fn all_operations(&self) -> impl Iterator<Item = &Operation> {
        self.moments.iter().flat_map(|m| m.operations())
    }

    pub fn num_operations(&self) -> usize {
        self.moments.iter().map(|m| m.operations().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.num_operations() == 0
    }

    /// Canonical JSON form. Fails for circuits holding opaque gates.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let circuit: Circuit = serde_json::from_str(json)?;
        circuit.validate()?;
        Ok(circuit)
    }

    fn validate(&self) -> Result<()> {
        self.moments.iter().try_for_each(Moment::validate)
    }
}

impl FromIterator<Operation> for Circuit {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        let mut circuit = Circuit::new();
        for op in iter {
            circuit.append(op);
        }
        circuit
    }
}
