//! Main release orchestration.
//!
//! This module provides the [`Bundler`] that drives the pipeline for every
//! configured application and then compiles the generated scripts.

use super::progress::Progress;
use crate::{
    bundler::{
        AppSpec, IgnoreMatcher, ReleaseConfig, Result, StageReport,
        platform::windows::inno,
        staging,
    },
    version::{self, ResolvedVersion},
};
use std::path::{Path, PathBuf};

/// Result of preparing one application.
#[derive(Debug)]
pub struct PreparedApp {
    /// Application display name
    pub name: String,
    /// Version rendered into the script and file name
    pub version: ResolvedVersion,
    /// What staging copied, ignored and skipped
    pub stage: StageReport,
    /// Generated `.iss` script
    pub script: PathBuf,
}

/// Release orchestrator.
///
/// Applications are processed one at a time in configuration order: stage,
/// resolve version, generate script. Compilation runs afterwards as one batch,
/// so no installer is built unless every script was generated.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_inno::bundler::{Bundler, IgnoreMatcher, Silent};
/// use kodegen_bundler_inno::metadata::load_config;
/// use std::path::Path;
///
/// # fn example() -> kodegen_bundler_inno::bundler::Result<()> {
/// let config = load_config(Path::new("config.json"))?;
/// let ignore = IgnoreMatcher::load(Path::new("ignore.txt"))?;
/// let bundler = Bundler::new(&config, ignore, Path::new("."), &Silent);
///
/// let prepared = bundler.prepare()?;
/// bundler.compile(&prepared)?;
/// # Ok(())
/// # }
/// ```
pub struct Bundler<'a> {
    config: &'a ReleaseConfig,
    ignore: IgnoreMatcher,
    redistributable_dir: &'a Path,
    progress: &'a dyn Progress,
}

impl std::fmt::Debug for Bundler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bundler")
            .field("config", &self.config)
            .field("ignore", &self.ignore)
            .field("redistributable_dir", &self.redistributable_dir)
            .finish_non_exhaustive()
    }
}

impl<'a> Bundler<'a> {
    /// Creates a bundler over a resolved configuration.
    ///
    /// `redistributable_dir` is searched for the runtime redistributable
    /// installer; the CLI passes the process working directory.
    pub fn new(
        config: &'a ReleaseConfig,
        ignore: IgnoreMatcher,
        redistributable_dir: &'a Path,
        progress: &'a dyn Progress,
    ) -> Self {
        Self {
            config,
            ignore,
            redistributable_dir,
            progress,
        }
    }

    /// Prepares every application and compiles the scripts.
    ///
    /// # Returns
    ///
    /// The prepared applications, in configuration order
    pub fn release(&self) -> Result<Vec<PreparedApp>> {
        let prepared = self.prepare()?;
        self.compile(&prepared)?;
        Ok(prepared)
    }

    /// Stages, versions and scripts every application. Nothing is compiled.
    pub fn prepare(&self) -> Result<Vec<PreparedApp>> {
        self.config
            .apps()
            .iter()
            .map(|app| self.prepare_app(app))
            .collect()
    }

    /// Prepares a single application.
    pub fn prepare_app(&self, app: &AppSpec) -> Result<PreparedApp> {
        self.progress.section(&app.display_name);

        self.progress
            .info(&format!("Staging {} -> {}", app.build_path, app.work_path));
        let stage = staging::stage_app(app, &self.ignore, self.redistributable_dir)?;
        for problem in &stage.problems {
            self.progress.warn(&problem.to_string());
        }
        self.progress.success(&format!(
            "Staged {} file(s), ignored {}",
            stage.copied.len(),
            stage.ignored.len()
        ));

        let resolution = version::resolve(self.config.version(), Path::new(&app.work_path));
        if let Some(problem) = &resolution.problem {
            self.progress.warn(&problem.to_string());
        }
        let version = resolution.version;
        self.progress.info(&format!("Version: {version}"));

        let script = inno::generate_iss_script(
            self.config,
            app,
            &version.to_string(),
            stage.effective_redistributable(app),
        )?;
        self.progress
            .success(&format!("Generated {}", script.display()));

        Ok(PreparedApp {
            name: app.display_name.clone(),
            version,
            stage,
            script,
        })
    }

    /// Compiles the scripts of already prepared applications, in order.
    pub fn compile(&self, prepared: &[PreparedApp]) -> Result<()> {
        if prepared.is_empty() {
            self.progress.warn("No applications configured; nothing to compile");
            return Ok(());
        }

        self.progress.section("Compile");
        let scripts: Vec<PathBuf> = prepared.iter().map(|p| p.script.clone()).collect();
        for script in inno::compile_all(self.config, &scripts)? {
            self.progress
                .success(&format!("Compiled {}", script.display()));
        }
        Ok(())
    }
}
