//! Inno Setup utility functions.
//!
//! Helper functions for script naming and writing.

use crate::bundler::{
    error::{ErrorExt, Result},
    utils::path::to_slash,
};
use std::path::{Path, PathBuf};

/// Script location for an application: `<output_dir>/<app_name>_<version>.iss`.
pub fn script_path(output_dir: &str, app_name: &str, version: &str) -> PathBuf {
    PathBuf::from(to_slash(&format!("{output_dir}/{app_name}_{version}.iss")))
}

/// Writes the script, replacing any previous file.
///
/// No BOM is written; the compiler reads the script as generated.
pub fn write_script(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).fs_context("writing ISS script", path)
}
