//! shelfdb CLI entry point
//!
//! Parses arguments, dispatches the command and exits non-zero on failure.
//! All logic lives in the CLI module.

use shelfdb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}: {}", e.code(), e);
        std::process::exit(1);
    }
}
