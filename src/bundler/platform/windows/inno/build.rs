//! Inno Setup compiler execution.
//!
//! Compiles ISS scripts into installer executables using ISCC.

use crate::bundler::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Locates the compiler executable.
///
/// A configured path naming an existing file is used as-is; anything else is
/// looked up on `PATH`. When neither works the configured value is returned
/// unchanged and the spawn error reports it.
pub fn locate_compiler(configured: &str) -> PathBuf {
    let path = PathBuf::from(configured);
    if path.is_file() {
        return path;
    }
    match which::which(configured) {
        Ok(found) => {
            log::debug!("Found installer compiler at: {}", found.display());
            found
        }
        Err(e) => {
            log::debug!(
                "installer compiler {:?} not found in PATH: {}",
                configured,
                e
            );
            path
        }
    }
}

/// Run the installer compiler against one script.
///
/// Executes `<compiler> /O<output_dir> <script>` and waits for it to finish;
/// there is no timeout.
///
/// # Errors
/// - [`Error::CommandFailed`] if the compiler cannot be started
/// - [`Error::CompilerFailed`] on a non-zero exit, carrying its combined output
pub fn run_iscc(compiler: &Path, output_dir: &str, iss_path: &Path) -> Result<()> {
    log::info!("create setup file: {}", iss_path.display());

    let output = Command::new(compiler)
        .arg(format!("/O{output_dir}"))
        .arg(iss_path)
        .output()
        .map_err(|error| Error::CommandFailed {
            command: compiler.display().to_string(),
            error,
        })?;

    if !output.status.success() {
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        return Err(Error::CompilerFailed {
            script: iss_path.to_path_buf(),
            status: output.status.to_string(),
            output: combined,
        });
    }

    log::info!("create setup file ok: {}", iss_path.display());
    Ok(())
}
