//! CLI module for shelfdb
//!
//! Provides command-line interface for:
//! - serve: Run the read-only HTTP API
//! - list / get: Read products
//! - add / update / delete: Mutate products

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use config::{Config, Overrides};
pub use errors::{CliError, CliResult};
pub use io::{write_error, write_response};
