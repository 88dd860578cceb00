//! CLI argument definitions using clap
//!
//! Commands:
//! - shelfdb serve [--port <port>]
//! - shelfdb list [--limit <n>]
//! - shelfdb get <id>
//! - shelfdb add <json>
//! - shelfdb update <id> <json>
//! - shelfdb delete <id>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::observability::LogFormat;

/// shelfdb - a file-backed product store with a read-only HTTP API
#[derive(Parser, Debug)]
#[command(name = "shelfdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Products file (overrides the configuration file)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Log format: pretty or json (overrides the configuration file)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the product API over HTTP
    Serve {
        /// Port to listen on (overrides the configuration file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// List products
    List {
        /// Return at most this many products (0 means all)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show a single product
    Get {
        /// Product id
        id: u64,
    },

    /// Add a product from a JSON object
    Add {
        /// Product fields, e.g. '{"title":"Lamp","price":30}'
        payload: String,
    },

    /// Overlay fields onto an existing product
    Update {
        /// Product id
        id: u64,
        /// Fields to replace, as a JSON object
        payload: String,
    },

    /// Delete a product
    Delete {
        /// Product id
        id: u64,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
