//! Error types for circuit conversion
//!
//! Failures are never recovered or logged here; they are returned to the
//! caller of `from_circuit` / `accept` / `circuit_to_qir`.

use std::fmt;
use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Traversal phase in which a visitor failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    ModuleEnter,
    /// Visiting the element at this index.
    Element(usize),
    RecordOutput,
    Finalize,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::ModuleEnter => write!(f, "module enter"),
            Phase::Element(i) => write!(f, "element {}", i),
            Phase::RecordOutput => write!(f, "record output"),
            Phase::Finalize => write!(f, "finalize"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid circuit: {0}")]
    InvalidCircuit(#[from] qirgen_circuit::CircuitError),

    #[error("Circuit serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Visitor failed during {phase}: {source}")]
    Visitor {
        phase: Phase,
        #[source]
        source: anyhow::Error,
    },

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("IR error: {0}")]
    Ir(#[from] qirgen_ir::IrError),
}

impl Error {
    /// The phase a visitor failed in, if this is a visitor failure.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Error::Visitor { phase, .. } => Some(*phase),
            _ => None,
        }
    }
}
