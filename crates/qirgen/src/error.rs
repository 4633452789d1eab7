//! CLI error types
//!
//! Every failure a command can hit is a [`CliError`]; starbase renders them
//! as miette diagnostics and exits non-zero.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("Failed to read {path:?}")]
    #[diagnostic(code(qirgen::io::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}")]
    #[diagnostic(code(qirgen::io::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file not found: {0:?}")]
    #[diagnostic(code(qirgen::config::missing))]
    ConfigNotFound(PathBuf),

    #[error("Failed to parse config file {path:?}")]
    #[diagnostic(
        code(qirgen::config::parse),
        help("see `qirgen.toml` keys: `log_level` and the `[emit]` table")
    )]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to convert {path:?}")]
    #[diagnostic(code(qirgen::convert))]
    Convert {
        path: PathBuf,
        #[source]
        source: qirgen_core::Error,
    },

    #[error("Failed to serialize output")]
    #[diagnostic(code(qirgen::output))]
    Output(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
