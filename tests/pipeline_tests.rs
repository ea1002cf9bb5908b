mod common;

use common::{build_tree, fixture, slash};
use kodegen_bundler_inno::bundler::{
    AppSpec, Bundler, ExternEntry, IgnoreMatcher, REDISTRIBUTABLE_FILE, ReleaseConfig,
    ReleaseConfigBuilder, Silent,
};
use std::path::Path;

fn viewer(root: &Path) -> AppSpec {
    AppSpec::new(
        "{6F2A1C3E-VIEWER}",
        "Viewer",
        "app.exe",
        slash(&root.join("build")),
        "C:/Program Files/Viewer",
    )
}

fn config(root: &Path, version: &str, app: AppSpec) -> ReleaseConfig {
    ReleaseConfigBuilder::new()
        .version(version)
        .compiler("definitely-not-an-installer-compiler")
        .output_dir(slash(&root.join("out")))
        .publisher("Example Inc.")
        .homepage_url("https://example.com")
        .app(app)
        .build()
        .unwrap()
}

#[test]
fn stages_filtered_tree_and_writes_script() {
    let root = tempfile::tempdir().unwrap();
    build_tree(root.path());
    let config = config(root.path(), "2.0.0", viewer(root.path()));
    let ignore = IgnoreMatcher::load(&fixture("ignore.txt")).unwrap();

    let prepared = Bundler::new(&config, ignore, root.path(), &Silent)
        .prepare()
        .unwrap();

    let work = root.path().join("out/Viewer");
    assert!(work.join("app.exe").is_file());
    assert!(work.join("data/config.ini").is_file());
    assert!(!work.join("app.log").exists());
    assert!(!work.join("cache/blob.bin").exists());
    assert!(!work.join("symbols/app.pdb").exists());
    assert_eq!(std::fs::read_to_string(work.join("version")).unwrap(), "2.0.0");

    let script_path = root.path().join("out/Viewer_2.0.0.iss");
    assert_eq!(prepared[0].script, script_path);
    let script = std::fs::read_to_string(&script_path).unwrap();
    assert!(script.contains(&format!("#define AppSourceDir \"{}\"", slash(&work))));
    assert!(script.contains("DefaultDirName=C:/Program Files/Viewer\n"));
    assert!(!script.contains("NeedVcRuntime"));
}

#[test]
fn header_version_is_shared_by_all_apps() {
    let root = tempfile::tempdir().unwrap();
    build_tree(root.path());
    let editor = AppSpec::new(
        "{EDITOR}",
        "Editor",
        "app.exe",
        slash(&root.path().join("build")),
        "C:/Program Files/Editor",
    );
    let config = ReleaseConfigBuilder::new()
        .version(slash(&fixture("version.h")))
        .output_dir(slash(&root.path().join("out")))
        .app(viewer(root.path()))
        .app(editor)
        .build()
        .unwrap();

    let prepared = Bundler::new(&config, IgnoreMatcher::default(), root.path(), &Silent)
        .prepare()
        .unwrap();

    let names: Vec<_> = prepared
        .iter()
        .map(|p| p.script.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["Viewer_2.7.1.318.9f3c2e1.iss", "Editor_2.7.1.318.9f3c2e1.iss"]);
    assert!(!root.path().join("out/Viewer/version").exists());
}

#[test]
fn unreadable_header_keeps_configured_value() {
    let root = tempfile::tempdir().unwrap();
    build_tree(root.path());
    let config = config(root.path(), "missing.h", viewer(root.path()));

    let prepared = Bundler::new(&config, IgnoreMatcher::default(), root.path(), &Silent)
        .prepare()
        .unwrap();

    assert_eq!(prepared[0].version.to_string(), "missing.h");
    assert!(prepared[0].script.ends_with("Viewer_missing.h.iss"));
}

#[test]
fn redistributable_and_externs_reach_the_script() {
    let root = tempfile::tempdir().unwrap();
    build_tree(root.path());
    common::write(&root.path().join(REDISTRIBUTABLE_FILE), "redist");
    let app = viewer(root.path())
        .with_redistributable("{VC-2019-X64}")
        .with_extern(ExternEntry::new("shared/fonts", "{app}/fonts", false));
    let config = config(root.path(), "2.0.0", app);

    let prepared = Bundler::new(&config, IgnoreMatcher::default(), root.path(), &Silent)
        .prepare()
        .unwrap();

    assert!(root.path().join("out/Viewer").join(REDISTRIBUTABLE_FILE).is_file());
    let script = std::fs::read_to_string(&prepared[0].script).unwrap();
    assert!(script.contains("Uninstall\\{VC-2019-X64}', 'Version', version)"));
    assert!(script.contains("Check:NeedInstallVCRuntime"));

    let extern_line = script.lines().find(|l| l.contains("{app}/fonts")).unwrap();
    let source = &config.apps()[0].externs[0].source_path;
    assert!(Path::new(source).is_absolute());
    assert!(extern_line.starts_with(&format!("Source: \"{source}\";")));
    assert!(extern_line.ends_with("onlyifdoesntexist uninsneveruninstall"));
}

#[test]
fn absent_redistributable_leaves_no_runtime_block() {
    let root = tempfile::tempdir().unwrap();
    build_tree(root.path());
    let app = viewer(root.path()).with_redistributable("{VC-2019-X64}");
    let config = config(root.path(), "2.0.0", app);

    let prepared = Bundler::new(&config, IgnoreMatcher::default(), root.path(), &Silent)
        .prepare()
        .unwrap();

    assert!(!prepared[0].stage.redistributable_staged);
    assert!(!root.path().join("out/Viewer").join(REDISTRIBUTABLE_FILE).exists());
    let script = std::fs::read_to_string(&prepared[0].script).unwrap();
    assert!(!script.contains("Check:NeedInstallVCRuntime"));
    assert!(!script.contains("NeedVcRuntime"));
    assert!(!script.contains("{VC-2019-X64}"));
}

#[test]
fn missing_compiler_fails_after_scripts_exist() {
    let root = tempfile::tempdir().unwrap();
    build_tree(root.path());
    let config = config(root.path(), "2.0.0", viewer(root.path()));

    let err = Bundler::new(&config, IgnoreMatcher::default(), root.path(), &Silent)
        .release()
        .unwrap_err();

    assert!(err.to_string().contains("definitely-not-an-installer-compiler"));
    assert!(root.path().join("out/Viewer_2.0.0.iss").is_file());
}

#[cfg(unix)]
#[test]
fn compiles_every_script_in_order() {
    let root = tempfile::tempdir().unwrap();
    build_tree(root.path());
    let compiler = common::fake_compiler(root.path(), 0);
    let out = slash(&root.path().join("out"));
    let config = ReleaseConfigBuilder::new()
        .version("2.0.0")
        .compiler(slash(&compiler))
        .output_dir(out.clone())
        .app(viewer(root.path()))
        .app(AppSpec::new(
            "{EDITOR}",
            "Editor",
            "app.exe",
            slash(&root.path().join("build")),
            "C:/Program Files/Editor",
        ))
        .build()
        .unwrap();

    Bundler::new(&config, IgnoreMatcher::default(), root.path(), &Silent)
        .release()
        .unwrap();

    assert_eq!(
        common::compiler_log(root.path()),
        [
            format!("/O{out} {out}/Viewer_2.0.0.iss"),
            format!("/O{out} {out}/Editor_2.0.0.iss"),
        ]
    );
}

#[cfg(unix)]
#[test]
fn compiler_failure_stops_the_batch() {
    let root = tempfile::tempdir().unwrap();
    build_tree(root.path());
    let compiler = common::fake_compiler(root.path(), 1);
    let config = ReleaseConfigBuilder::new()
        .version("2.0.0")
        .compiler(slash(&compiler))
        .output_dir(slash(&root.path().join("out")))
        .app(viewer(root.path()))
        .app(AppSpec::new(
            "{EDITOR}",
            "Editor",
            "app.exe",
            slash(&root.path().join("build")),
            "C:/Program Files/Editor",
        ))
        .build()
        .unwrap();

    let err = Bundler::new(&config, IgnoreMatcher::default(), root.path(), &Silent)
        .release()
        .unwrap_err();

    assert!(err.to_string().contains("Compiling"));
    assert_eq!(common::compiler_log(root.path()).len(), 1);
}
