//! Command line interface for the installer release tool.
//!
//! This module wires argument parsing, colored output and the release
//! command together.

mod args;
pub mod commands;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::error::Result;

/// Main CLI entry point
pub fn run() -> Result<i32> {
    let args = Args::parse_args();
    let runtime = RuntimeConfig::from(&args);

    let _ = runtime.output().banner(&args.config.display().to_string());

    let work_dir = std::env::current_dir()?;
    commands::execute_release(&args.config, &work_dir, &runtime)
}
