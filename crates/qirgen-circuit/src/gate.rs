use crate::error::Result;
use crate::operation::Operation;
use crate::qid::Qid;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A quantum gate, measurement or reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cirq_type")]
pub enum Gate {
    H,
    X,
    Y,
    Z,
    S,
    #[serde(rename = "S**-1")]
    SDagger,
    T,
    #[serde(rename = "T**-1")]
    TDagger,
    Rx {
        rads: f64,
    },
    Ry {
        rads: f64,
    },
    Rz {
        rads: f64,
    },
    #[serde(rename = "CNOT")]
    Cnot,
    #[serde(rename = "CZ")]
    Cz,
    #[serde(rename = "SWAP")]
    Swap,
    #[serde(rename = "CCX")]
    Ccx,
    #[serde(rename = "I")]
    Identity,
    #[serde(rename = "MeasurementGate")]
    Measure {
        key: String,
    },
    #[serde(rename = "ResetChannel")]
    Reset,
    /// A user-defined gate with no canonical serialized form.
    #[serde(skip)]
    Opaque {
        name: String,
        num_qubits: usize,
    },
}

impl Gate {
    pub fn num_qubits(&self) -> usize {
        match self {
            Gate::Cnot | Gate::Cz | Gate::Swap => 2,
            Gate::Ccx => 3,
            Gate::Opaque { num_qubits, .. } => *num_qubits,
            _ => 1,
        }
    }

    /// Short label used in diagnostics and statistics.
    pub fn name(&self) -> &str {
        match self {
            Gate::H => "H",
            Gate::X => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
            Gate::S => "S",
            Gate::SDagger => "S**-1",
            Gate::T => "T",
            Gate::TDagger => "T**-1",
            Gate::Rx { .. } => "Rx",
            Gate::Ry { .. } => "Ry",
            Gate::Rz { .. } => "Rz",
            Gate::Cnot => "CNOT",
            Gate::Cz => "CZ",
            Gate::Swap => "SWAP",
            Gate::Ccx => "CCX",
            Gate::Identity => "I",
            Gate::Measure { .. } => "M",
            Gate::Reset => "R",
            Gate::Opaque { name, .. } => name,
        }
    }

    pub fn is_measurement(&self) -> bool {
        matches!(self, Gate::Measure { .. })
    }

    /// Apply the gate to `qubits`, checking arity.
    pub fn on<I>(self, qubits: I) -> Result<Operation>
    where
        I: IntoIterator<Item = Qid>,
    {
        Operation::new(self, qubits.into_iter().collect())
    }

    pub fn measure(key: impl Into<String>) -> Self {
        Gate::Measure { key: key.into() }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Rx { rads } | Gate::Ry { rads } | Gate::Rz { rads } => {
                write!(f, "{}({})", self.name(), rads)
            }
            Gate::Measure { key } => write!(f, "M('{}')", key),
            _ => write!(f, "{}", self.name()),
        }
    }
}
