//! Circuit-to-QIR traversal core.
//!
//! A circuit is turned into a [`CircuitModule`]: a content-addressed name
//! (see [`generate_module_id`]), a shared IR module handle, the qubit count,
//! and an ordered list of [`CircuitElement`]s (one register, then every
//! operation in circuit order). [`CircuitModule::accept`] then drives a
//! [`Visitor`] through four fixed phases; all IR construction is up to the
//! visitor. [`QirEmitter`] is the visitor that lowers circuits to QIR and
//! [`StatsVisitor`] one that only collects statistics.

pub mod circuit;
pub mod convert;
pub mod elements;
pub mod emit;
pub mod error;
pub mod module;
pub mod module_id;
pub mod stats;
pub mod traversal;

pub use circuit::QuantumCircuit;
pub use convert::{circuit_from_json, circuit_to_qir, json_to_qir, ConversionOptions};
pub use elements::{CircuitElement, Register};
pub use emit::{EmitterOptions, QirEmitter};
pub use error::{Error, Phase, Result};
pub use module::{CircuitModule, ModuleTarget};
pub use module_id::generate_module_id;
pub use stats::{CircuitStats, StatsVisitor};
pub use traversal::Visitor;
