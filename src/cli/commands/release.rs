//! The release command: stage, script and compile every configured app.

use crate::bundler::{Bundler, IGNORE_FILE, IgnoreMatcher};
use crate::cli::RuntimeConfig;
use crate::error::{CliError, Result};
use crate::metadata;
use std::path::Path;

/// Runs a full release from `config_path`.
///
/// Support files (`ignore.txt`, the runtime redistributable) are read from
/// `work_dir`.
///
/// # Returns
///
/// Process exit code (0 on success)
pub fn execute_release(
    config_path: &Path,
    work_dir: &Path,
    runtime: &RuntimeConfig,
) -> Result<i32> {
    let output = runtime.output();

    if !config_path.is_file() {
        return Err(CliError::ConfigNotFound {
            path: config_path.to_path_buf(),
        }
        .into());
    }
    let config = metadata::load_config(config_path)?;
    let _ = output.success(&format!(
        "Loaded {} application(s), output: {}",
        config.apps().len(),
        config.output_dir()
    ));

    let ignore_path = work_dir.join(IGNORE_FILE);
    if !ignore_path.is_file() {
        return Err(CliError::IgnoreListNotFound { path: ignore_path }.into());
    }
    let ignore = IgnoreMatcher::load(&ignore_path)?;
    let _ = output.info(&format!(
        "Loaded {} ignore pattern(s)",
        ignore.patterns().len()
    ));

    let bundler = Bundler::new(&config, ignore, work_dir, output);
    let prepared = bundler.release()?;

    let _ = output.section("Summary");
    for app in &prepared {
        let _ = output.success(&format!("{} {}", app.name, app.version));
        let _ = output.indent(&app.script.display().to_string());
        if !app.stage.problems.is_empty() {
            let _ = output.indent(&format!(
                "{} file(s) skipped",
                app.stage.problems.len()
            ));
        }
    }

    Ok(0)
}
