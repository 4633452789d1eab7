//! A visitor that collects circuit statistics without emitting IR.

use crate::module::CircuitModule;
use crate::traversal::Visitor;
use qirgen_circuit::{Circuit, Operation, Qid};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CircuitStats {
    pub module_name: String,
    pub num_qubits: usize,
    pub num_operations: usize,
    pub num_measurements: usize,
    /// Operation count per gate name.
    pub gate_counts: BTreeMap<String, usize>,
    /// Highest number of qubits touched by a single operation.
    pub max_arity: usize,
}

/// Statistics of the most recently entered module.
#[derive(Debug, Default)]
pub struct StatsVisitor {
    stats: CircuitStats,
    finalized: bool,
}

impl StatsVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &CircuitStats {
        &self.stats
    }

    /// Whether a traversal ran to completion.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn into_stats(self) -> CircuitStats {
        self.stats
    }
}

impl Visitor<Circuit> for StatsVisitor {
    fn visit_circuit_module(&mut self, module: &CircuitModule<Circuit>) -> anyhow::Result<()> {
        self.stats = CircuitStats {
            module_name: module.name().to_string(),
            ..CircuitStats::default()
        };
        self.finalized = false;
        Ok(())
    }

    fn visit_register(&mut self, qubits: &BTreeSet<Qid>) -> anyhow::Result<()> {
        self.stats.num_qubits = qubits.len();
        Ok(())
    }

    fn visit_operation(&mut self, operation: &Operation) -> anyhow::Result<()> {
        let gate = operation.gate();
        self.stats.num_operations += 1;
        if gate.is_measurement() {
            self.stats.num_measurements += 1;
        }
        *self
            .stats
            .gate_counts
            .entry(gate.name().to_string())
            .or_default() += 1;
        self.stats.max_arity = self.stats.max_arity.max(operation.qubits().len());
        Ok(())
    }

    fn record_output(&mut self, _module: &CircuitModule<Circuit>) -> anyhow::Result<()> {
        Ok(())
    }

    fn finalize(&mut self) -> anyhow::Result<()> {
        self.finalized = true;
        Ok(())
    }
}
