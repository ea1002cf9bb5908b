//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

pub fn slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

pub fn write(path: &Path, contents: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

/// Lays out a build tree under `root/build`:
/// app.exe, app.log, data/config.ini, cache/blob.bin, symbols/app.pdb
pub fn build_tree(root: &Path) -> PathBuf {
    let build = root.join("build");
    write(&build.join("app.exe"), "MZ");
    write(&build.join("app.log"), "log");
    write(&build.join("data/config.ini"), "[main]\n");
    write(&build.join("cache/blob.bin"), "blob");
    write(&build.join("symbols/app.pdb"), "pdb");
    build
}

/// Writes a fake installer compiler that appends its arguments to
/// `root/compiler.log` and exits with `exit_code`.
#[cfg(unix)]
pub fn fake_compiler(root: &Path, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let compiler = root.join("iscc");
    let log = root.join("compiler.log");
    write(
        &compiler,
        &format!(
            "#!/bin/sh\necho \"$1 $2\" >> '{}'\necho \"Compiling $2\"\nexit {}\n",
            log.display(),
            exit_code
        ),
    );
    std::fs::set_permissions(&compiler, std::fs::Permissions::from_mode(0o755)).unwrap();
    compiler
}

pub fn compiler_log(root: &Path) -> Vec<String> {
    std::fs::read_to_string(root.join("compiler.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
