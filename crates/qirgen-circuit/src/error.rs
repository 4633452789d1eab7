//! Error types for circuit construction and (de)serialization.

use crate::qid::Qid;
use thiserror::Error;

/// Result type alias for circuit operations
pub type Result<T> = std::result::Result<T, CircuitError>;

#[derive(Error, Debug)]
pub enum CircuitError {
    #[error("gate {gate} acts on {expected} qubit(s) but was applied to {actual}")]
    ArityMismatch {
        gate: String,
        expected: usize,
        actual: usize,
    },

    #[error("qubit {0} appears more than once in a single operation")]
    DuplicateQubit(Qid),

    #[error("qubit {0} is used by more than one operation in the same moment")]
    MomentOverlap(Qid),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
