//! Id Command
//!
//! Prints the content-derived module ID of a circuit.

use super::read_circuit;
use crate::error::CliError;
use clap::Args;
use qirgen_core::generate_module_id;
use starbase::AppResult;
use std::path::PathBuf;

#[derive(Clone, Debug, Args)]
pub struct IdArgs {
    /// Path to the circuit JSON file
    #[arg(short, long)]
    pub input: PathBuf,
}

pub fn run_id(args: &IdArgs) -> AppResult {
    let circuit = read_circuit(&args.input)?;
    let id = generate_module_id(&circuit).map_err(|source| CliError::Convert {
        path: args.input.clone(),
        source,
    })?;
    println!("{}", id);
    Ok(None)
}
