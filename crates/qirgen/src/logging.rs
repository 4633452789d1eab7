//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a full `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "QIRGEN_LOG";

/// Filter directive used when `QIRGEN_LOG` is unset.
///
/// `--verbose` beats the config file's `log_level`, which beats `warn`.
pub fn default_directive(verbose: u8, config_level: Option<&str>) -> String {
    match (verbose, config_level) {
        (0, Some(level)) => level.to_string(),
        (0, None) => "warn".to_string(),
        (1, _) => "info".to_string(),
        (2, _) => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. Logs go to stderr so IR on stdout stays
/// clean. Calling this twice is harmless.
pub fn init_logging(verbose: u8, config_level: Option<&str>) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, config_level)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
