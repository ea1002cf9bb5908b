//! Staging of an application's build output into its clean working tree.
//!
//! Staging is destructive: the work directory is removed and rebuilt on every
//! pass, so running it twice over the same build output yields the same tree.

use crate::bundler::{
    AppSpec, IgnoreMatcher,
    error::{ErrorExt, Result, Tolerated},
    utils::fs::{self, CopyOutcome},
};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name of the runtime redistributable installer, looked up in the
/// release working directory.
pub const REDISTRIBUTABLE_FILE: &str = "vcredist_x64.exe";

/// What a staging pass did for one application.
#[derive(Debug, Default)]
pub struct StageReport {
    /// Files copied into the work directory (relative, slash-separated)
    pub copied: Vec<String>,
    /// Files left out by the ignore list (absolute source paths)
    pub ignored: Vec<PathBuf>,
    /// Recoverable problems, already logged
    pub problems: Vec<Tolerated>,
    /// Whether the redistributable installer sits in the work directory
    pub redistributable_staged: bool,
}

impl StageReport {
    /// Returns the redistributable key to render into the script, if the
    /// installer was actually staged.
    pub fn effective_redistributable<'a>(&self, app: &'a AppSpec) -> Option<&'a str> {
        if self.redistributable_staged {
            app.redistributable_key.as_deref()
        } else {
            None
        }
    }

    fn record(&mut self, outcome: CopyOutcome, relative: String) {
        match outcome {
            CopyOutcome::Copied(_) => self.copied.push(relative),
            CopyOutcome::NotAFile => {}
            CopyOutcome::Skipped(problem) => self.problems.push(problem),
        }
    }
}

/// Rebuilds `app.work_path` from `app.build_path`.
///
/// `redistributable_dir` is where [`REDISTRIBUTABLE_FILE`] is looked up when
/// the app declares a redistributable key (the process working directory in
/// a normal run).
///
/// # Errors
///
/// Fails if the work directory cannot be recreated, the build directory cannot
/// be read, or a file transfer breaks midway.
pub fn stage_app(
    app: &AppSpec,
    ignore: &IgnoreMatcher,
    redistributable_dir: &Path,
) -> Result<StageReport> {
    let work = Path::new(&app.work_path);
    let build = Path::new(&app.build_path);
    let mut report = StageReport::default();

    log::info!("remove dir: {}", work.display());
    log::info!("create dir: {}", work.display());
    fs::create_dir_all(work, true)?;

    log::info!("copy files: {} -> {}", build.display(), work.display());
    std::fs::metadata(build).fs_context("reading build directory", build)?;

    for entry in WalkDir::new(build) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let problem = Tolerated::WalkEntry(e);
                log::warn!("{}", problem);
                report.problems.push(problem);
                continue;
            }
        };

        // Symlinked directories are skipped here and never descended
        let path = entry.path();
        if std::fs::metadata(path).is_ok_and(|m| m.is_dir()) {
            continue;
        }
        if ignore.should_ignore(path) {
            log::debug!("ignore: {}", path.display());
            report.ignored.push(path.to_path_buf());
            continue;
        }

        let relative = path.strip_prefix(build)?;
        let outcome = fs::copy_file(path, &work.join(relative))?;
        report.record(outcome, relative.to_string_lossy().replace('\\', "/"));
    }

    if app.redistributable_key.is_some() {
        stage_redistributable(work, redistributable_dir, &mut report)?;
    }

    log::info!(
        "copy files ok: {} copied, {} ignored, {} skipped",
        report.copied.len(),
        report.ignored.len(),
        report.problems.len()
    );
    Ok(report)
}

fn stage_redistributable(work: &Path, from_dir: &Path, report: &mut StageReport) -> Result<()> {
    let source = from_dir.join(REDISTRIBUTABLE_FILE);
    if !source.is_file() {
        let problem = Tolerated::RedistributableMissing { path: source };
        log::warn!("{}", problem);
        report.problems.push(problem);
        return Ok(());
    }

    match fs::copy_file(&source, &work.join(REDISTRIBUTABLE_FILE))? {
        CopyOutcome::Copied(_) => report.redistributable_staged = true,
        CopyOutcome::NotAFile => {}
        CopyOutcome::Skipped(problem) => report.problems.push(problem),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::utils::path::to_slash;

    fn app_in(root: &Path) -> AppSpec {
        let mut app = AppSpec::new(
            "{GUID}",
            "Viewer",
            "viewer.exe",
            to_slash(&root.join("build").to_string_lossy()),
            "C:/Apps/Viewer",
        );
        app.work_path = to_slash(&root.join("out/Viewer").to_string_lossy());
        app
    }

    fn write(path: &Path, contents: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    #[test]
    fn copies_tree_and_skips_ignored_files() {
        let root = tempfile::tempdir().unwrap();
        let build = root.path().join("build");
        write(&build.join("viewer.exe"), "exe");
        write(&build.join("plugins/render.dll"), "dll");
        write(&build.join("viewer.log"), "log");
        write(&build.join("plugins/trace.log"), "log");

        let app = app_in(root.path());
        let ignore = IgnoreMatcher::from_patterns(["*.log"]);
        let report = stage_app(&app, &ignore, root.path()).unwrap();

        let mut copied = report.copied.clone();
        copied.sort();
        assert_eq!(copied, vec!["plugins/render.dll", "viewer.exe"]);
        assert_eq!(report.ignored.len(), 2);

        let work = Path::new(&app.work_path);
        assert_eq!(std::fs::read_to_string(work.join("plugins/render.dll")).unwrap(), "dll");
        assert!(!work.join("viewer.log").exists());
        assert!(!work.join("plugins/trace.log").exists());
    }

    #[test]
    fn restaging_replaces_previous_contents() {
        let root = tempfile::tempdir().unwrap();
        write(&root.path().join("build/viewer.exe"), "v1");
        let app = app_in(root.path());
        let ignore = IgnoreMatcher::default();

        stage_app(&app, &ignore, root.path()).unwrap();
        write(&Path::new(&app.work_path).join("leftover.tmp"), "junk");
        stage_app(&app, &ignore, root.path()).unwrap();

        let work = Path::new(&app.work_path);
        assert!(!work.join("leftover.tmp").exists());
        assert_eq!(std::fs::read_to_string(work.join("viewer.exe")).unwrap(), "v1");
    }

    #[test]
    fn missing_build_dir_is_fatal() {
        let root = tempfile::tempdir().unwrap();
        let app = app_in(root.path());
        assert!(stage_app(&app, &IgnoreMatcher::default(), root.path()).is_err());
    }

    #[test]
    fn redistributable_is_staged_when_present() {
        let root = tempfile::tempdir().unwrap();
        write(&root.path().join("build/viewer.exe"), "exe");
        write(&root.path().join(REDISTRIBUTABLE_FILE), "redist");
        let app = app_in(root.path()).with_redistributable("{VC}");

        let report = stage_app(&app, &IgnoreMatcher::default(), root.path()).unwrap();

        assert!(report.redistributable_staged);
        assert_eq!(report.effective_redistributable(&app), Some("{VC}"));
        assert!(Path::new(&app.work_path).join(REDISTRIBUTABLE_FILE).is_file());
    }

    #[test]
    fn missing_redistributable_is_dropped() {
        let root = tempfile::tempdir().unwrap();
        write(&root.path().join("build/viewer.exe"), "exe");
        let app = app_in(root.path()).with_redistributable("{VC}");

        let report = stage_app(&app, &IgnoreMatcher::default(), root.path()).unwrap();

        assert!(!report.redistributable_staged);
        assert_eq!(report.effective_redistributable(&app), None);
        assert!(matches!(
            report.problems.as_slice(),
            [Tolerated::RedistributableMissing { .. }]
        ));
    }
}
