//! Windows Inno Setup installer creation.
//!
//! Generates one `.iss` script per application and compiles it with ISCC.
//! Script generation runs on any host; compilation needs the configured
//! compiler (or one found on `PATH`).
//!
//! # Module Organization
//!
//! - `template` - ISS script template constants
//! - `script` - ISS script generation from templates
//! - `build` - ISCC execution and compilation
//! - `utils` - Script naming and writing

mod build;
mod script;
mod template;
mod utils;

pub use build::{locate_compiler, run_iscc};
pub use script::{
    Define, FileDirective, RuntimeCheck, ScriptView, generate_iss_script, render_script,
};

use crate::bundler::{ReleaseConfig, error::Result};
use std::path::PathBuf;

/// Compile every generated script, in order.
///
/// The compiler is located once. The first failure stops the run; scripts
/// after it are left uncompiled.
///
/// # Returns
///
/// The scripts that were compiled
pub fn compile_all(config: &ReleaseConfig, scripts: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if scripts.is_empty() {
        return Ok(Vec::new());
    }

    let compiler = locate_compiler(config.compiler_path());
    log::info!(
        "Compiling {} installer script(s) with {}",
        scripts.len(),
        compiler.display()
    );

    let mut compiled = Vec::with_capacity(scripts.len());
    for script in scripts {
        run_iscc(&compiler, config.output_dir(), script)?;
        compiled.push(script.clone());
    }
    Ok(compiled)
}
