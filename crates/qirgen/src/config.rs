//! `qirgen.toml` discovery and loading.
//!
//! ```toml
//! log_level = "info"
//!
//! [emit]
//! entry_point = "main"
//! record_output = true
//! initialize = true
//! ```

use crate::error::{CliError, Result};
use qirgen_core::EmitterOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "qirgen.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QirgenConfig {
    /// Log filter used when neither `QIRGEN_LOG` nor `--verbose` is given.
    pub log_level: Option<String>,
    pub emit: EmitterOptions,
}

/// Walk up the directory tree from `start_dir` to find `qirgen.toml`.
pub fn discover_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

pub fn load_config(path: &Path) -> Result<QirgenConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the explicit config file if one was given, otherwise the nearest
/// `qirgen.toml` above `start_dir`, otherwise defaults.
pub fn resolve_config(explicit: Option<&Path>, start_dir: &Path) -> Result<QirgenConfig> {
    let path = match explicit {
        Some(path) if !path.is_file() => return Err(CliError::ConfigNotFound(path.to_path_buf())),
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(start_dir),
    };

    match path {
        Some(path) => {
            let config = load_config(&path)?;
            debug!(path = %path.display(), "loaded config");
            Ok(config)
        }
        None => Ok(QirgenConfig::default()),
    }
}
