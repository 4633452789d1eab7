use crate::error::{CircuitError, Result};
use crate::gate::Gate;
use crate::qid::Qid;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A gate applied to an ordered list of qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cirq_type", rename = "GateOperation")]
pub struct Operation {
    gate: Gate,
    qubits: Vec<Qid>,
}

impl Operation {
    pub fn new(gate: Gate, qubits: Vec<Qid>) -> Result<Self> {
        let op = Self { gate, qubits };
        op.validate()?;
        Ok(op)
    }

    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    pub fn qubits(&self) -> &[Qid] {
        &self.qubits
    }

    /// Check that the qubit count matches the gate and no qubit repeats.
    pub fn validate(&self) -> Result<()> {
        let expected = self.gate.num_qubits();
        if self.qubits.len() != expected {
            return Err(CircuitError::ArityMismatch {
                gate: self.gate.name().to_string(),
                expected,
                actual: self.qubits.len(),
            });
        }
        let mut seen = BTreeSet::new();
        for q in &self.qubits {
            if !seen.insert(q) {
                return Err(CircuitError::DuplicateQubit(q.clone()));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let qubits: Vec<String> = self.qubits.iter().map(|q| q.to_string()).collect();
        write!(f, "{}({})", self.gate, qubits.join(", "))
    }
}
