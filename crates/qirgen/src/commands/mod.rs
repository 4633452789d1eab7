pub mod convert;
pub mod id;
pub mod inspect;

pub use convert::*;
pub use id::*;
pub use inspect::*;

use crate::error::{CliError, Result};
use qirgen_circuit::Circuit;
use std::path::Path;

/// Read and validate a circuit JSON file.
pub fn read_circuit(path: &Path) -> Result<Circuit> {
    let json = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    qirgen_core::circuit_from_json(&json).map_err(|source| CliError::Convert {
        path: path.to_path_buf(),
        source,
    })
}
