//! Convert Command
//!
//! Lowers a circuit JSON file to QIR text.

use super::read_circuit;
use crate::config::QirgenConfig;
use crate::error::CliError;
use clap::Args;
use qirgen_core::{circuit_to_qir, ConversionOptions, EmitterOptions};
use starbase::AppResult;
use std::path::PathBuf;
use tracing::info;

#[derive(Clone, Debug, Args)]
pub struct ConvertArgs {
    /// Path to the circuit JSON file
    #[arg(short, long)]
    pub input: PathBuf,
    /// Output `.ll` file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Module name (defaults to the content-derived module ID)
    #[arg(short, long)]
    pub name: Option<String>,
    /// Name of the generated entry point function
    #[arg(long)]
    pub entry_point: Option<String>,
    /// Do not emit result recording calls
    #[arg(long)]
    pub no_record_output: bool,
    /// Do not call the runtime initializer
    #[arg(long)]
    pub no_initialize: bool,
}

impl ConvertArgs {
    /// Conversion options: config file values overridden by flags.
    pub fn conversion_options(&self, defaults: &EmitterOptions) -> ConversionOptions {
        let mut emit = defaults.clone();
        if let Some(entry_point) = &self.entry_point {
            emit.entry_point = entry_point.clone();
        }
        if self.no_record_output {
            emit.record_output = false;
        }
        if self.no_initialize {
            emit.initialize = false;
        }
        ConversionOptions {
            name: self.name.clone(),
            emit,
        }
    }
}

pub fn run_convert(args: &ConvertArgs, config: &QirgenConfig) -> AppResult {
    let circuit = read_circuit(&args.input)?;
    let options = args.conversion_options(&config.emit);

    let module = circuit_to_qir(&circuit, &options).map_err(|source| CliError::Convert {
        path: args.input.clone(),
        source,
    })?;
    let ir = module.ir();

    match &args.output {
        Some(path) => {
            std::fs::write(path, &ir).map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            info!(module = %module.source_filename(), path = %path.display(), "wrote QIR");
        }
        None => print!("{}", ir),
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ConvertArgs {
        ConvertArgs {
            input: PathBuf::from("circuit.json"),
            output: None,
            name: None,
            entry_point: None,
            no_record_output: false,
            no_initialize: false,
        }
    }

    #[test]
    fn test_options_default_to_config() {
        let config = EmitterOptions {
            entry_point: "kernel".to_string(),
            record_output: false,
            initialize: true,
        };
        let options = args().conversion_options(&config);
        assert_eq!(options.emit, config);
        assert_eq!(options.name, None);
    }

    #[test]
    fn test_flags_override_config() {
        let args = ConvertArgs {
            name: Some("bell".to_string()),
            entry_point: Some("run".to_string()),
            no_record_output: true,
            no_initialize: true,
            ..args()
        };
        let options = args.conversion_options(&EmitterOptions::default());
        assert_eq!(options.name.as_deref(), Some("bell"));
        assert_eq!(options.emit.entry_point, "run");
        assert!(!options.emit.record_output);
        assert!(!options.emit.initialize);
    }
}
