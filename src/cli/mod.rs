//! CLI module for the bible API
//!
//! Provides command-line interface for:
//! - serve: Boot catalogs and registry, then run the HTTP server
//! - check: Parse everything and report
//! - read: One-shot lookup

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command, ReadTarget};
pub use commands::{build_report, check, lookup, read, run, run_command, serve, CheckReport, Lookup};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
