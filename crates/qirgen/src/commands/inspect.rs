//! Inspect Command
//!
//! Summarises a circuit without emitting IR.

use super::read_circuit;
use crate::error::CliError;
use clap::Args;
use owo_colors::OwoColorize;
use qirgen_core::{CircuitModule, CircuitStats, StatsVisitor};
use starbase::AppResult;
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Debug, Args)]
pub struct InspectArgs {
    /// Path to the circuit JSON file
    #[arg(short, long)]
    pub input: PathBuf,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_inspect(args: &InspectArgs) -> AppResult {
    let circuit = read_circuit(&args.input)?;
    let convert_err = |source: qirgen_core::Error| CliError::Convert {
        path: args.input.clone(),
        source,
    };

    let module = CircuitModule::from_circuit(&circuit).map_err(convert_err)?;
    let mut visitor = StatsVisitor::new();
    module.accept(&mut visitor).map_err(convert_err)?;
    let stats = visitor.into_stats();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).map_err(CliError::from)?
        );
    } else {
        print!("{}", StatsTable(&stats));
    }
    Ok(None)
}

/// Human-readable summary, one `label value` pair per line.
pub struct StatsTable<'a>(pub &'a CircuitStats);

impl fmt::Display for StatsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = self.0;
        let rows = [
            ("module", stats.module_name.clone()),
            ("qubits", stats.num_qubits.to_string()),
            ("operations", stats.num_operations.to_string()),
            ("measurements", stats.num_measurements.to_string()),
            ("max arity", stats.max_arity.to_string()),
        ];
        for (label, value) in rows {
            writeln!(f, "{:<14}{}", label.bold(), value)?;
        }
        if !stats.gate_counts.is_empty() {
            writeln!(f, "{}", "gates".bold())?;
            for (gate, count) in &stats.gate_counts {
                writeln!(f, "  {:<12}{}", gate.cyan(), count)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_stats_table_lists_gates() {
        let stats = CircuitStats {
            module_name: "circuit-abc1234".to_string(),
            num_qubits: 2,
            num_operations: 3,
            num_measurements: 1,
            gate_counts: BTreeMap::from([("H".to_string(), 2), ("M".to_string(), 1)]),
            max_arity: 1,
        };
        let text = StatsTable(&stats).to_string();

        assert!(text.contains("circuit-abc1234"));
        assert!(text.contains("H"));
        assert_eq!(text.lines().count(), 5 + 1 + 2);
    }

    #[test]
    fn test_stats_table_without_gates() {
        let text = StatsTable(&CircuitStats::default()).to_string();
        assert!(!text.contains("gates"));
    }
}
