//! Analizar CLI - benchmark analysis and reporting
//!
//! Post-processing for matrix-multiplication benchmark results.
//!
//! # Commands
//!
//! - `report` - Full analysis: optimal table + comparison charts
//! - `annotate` - Add a speedup column to a results table
//! - `optimal` - Optimal thread configuration per (size, method) group
//! - `info` - Show version info

use clap::Parser;

use analizar::cli::{entrypoint, Cli};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = entrypoint(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
