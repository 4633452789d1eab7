//! qirgen CLI Library
//!
//! This library exposes CLI functionality for programmatic use and testing.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

pub use config::QirgenConfig;
pub use error::CliError;
