//! Content-addressed module identifiers.
//!
//! A module ID is `circuit-` followed by the first seven alphanumeric
//! characters of the hex SHA-256 digest of the circuit's canonical JSON.
//! Seven hex characters give 2^28 distinct IDs, so distinct circuits can
//! collide; the ID names a module, it does not identify a circuit.

use crate::circuit::QuantumCircuit;
use crate::error::Result;
use sha2::{Digest, Sha256};

pub const MODULE_ID_PREFIX: &str = "circuit-";
pub const MODULE_ID_HASH_LEN: usize = 7;

/// Derive the module ID for `circuit`.
///
/// Pure and deterministic. Fails only if the circuit has no canonical form.
pub fn generate_module_id<C: QuantumCircuit>(circuit: &C) -> Result<String> {
    let serialized = circuit.canonical_json()?;
    let digest = Sha256::digest(serialized.as_bytes());
    let hash_hex = format!("{:x}", digest);
    let truncated: String = hash_hex
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(MODULE_ID_HASH_LEN)
        .collect();
    Ok(format!("{}{}", MODULE_ID_PREFIX, truncated))
}

/// Whether `s` has the shape of a generated module ID.
pub fn is_module_id(s: &str) -> bool {
    match s.strip_prefix(MODULE_ID_PREFIX) {
        Some(hash) => {
            hash.len() == MODULE_ID_HASH_LEN && hash.chars().all(|c| c.is_ascii_alphanumeric())
        }
        None => false,
    }
}
