//! Command line argument parsing.
//!
//! This module provides CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::metadata::DEFAULT_CONFIG_FILE;

/// Windows installer release tool
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_inno",
    version,
    about = "Stages build outputs and compiles Inno Setup installers",
    long_about = "Stages each configured application's build output into a clean directory,
resolves the release version, generates an Inno Setup script per application
and compiles the scripts with ISCC.

Reads ignore.txt and (when a runtime redistributable is configured)
vcredist_x64.exe from the current directory.

Usage:
  kodegen_bundler_inno
  kodegen_bundler_inno release.json

Exit code 0 = every installer was compiled."
)]
pub struct Args {
    /// Release configuration file
    #[arg(value_name = "CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(_args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }
}
