//! Path normalization for release configuration.
//!
//! Everything the pipeline writes into an installer script uses forward
//! slashes, regardless of the host the release runs on.

use crate::bundler::error::{ErrorExt, Result};
use path_absolutize::Absolutize;
use std::path::Path;

/// Replaces every backslash with a forward slash.
pub fn to_slash(path: &str) -> String {
    path.replace('\\', "/")
}

/// Resolves `path` against the process working directory and normalizes
/// separators to forward slashes.
///
/// Already-absolute paths are only cleaned (`.`/`..` removed).
pub fn absolutize_slash(path: &str) -> Result<String> {
    let raw = Path::new(path);
    let absolute = raw
        .absolutize()
        .fs_context("resolving absolute path", raw)?;
    Ok(to_slash(&absolute.to_string_lossy()))
}

/// Returns true when `path` names an unambiguous install location.
///
/// Accepts host absolute paths as well as Windows drive (`C:\`, `C:/`) and UNC
/// (`\\server\share`) forms, since installer targets are Windows paths even
/// when the release is staged on another host.
pub fn is_absolute_target(path: &str) -> bool {
    if Path::new(path).is_absolute() {
        return true;
    }

    let bytes = path.as_bytes();
    let drive = bytes.len() >= 3
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes[2] == b'\\' || bytes[2] == b'/');
    drive || path.starts_with("\\\\") || path.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backslashes_become_slashes() {
        assert_eq!(to_slash(r"C:\build\app\bin"), "C:/build/app/bin");
        assert_eq!(to_slash("already/clean"), "already/clean");
    }

    #[test]
    fn drive_and_unc_targets_are_absolute() {
        assert!(is_absolute_target(r"C:\Program Files\Viewer"));
        assert!(is_absolute_target("D:/Apps/Viewer"));
        assert!(is_absolute_target(r"\\fileserver\apps"));
        assert!(!is_absolute_target("Program Files/Viewer"));
        assert!(!is_absolute_target("C:relative"));
        assert!(!is_absolute_target(""));
    }

    #[cfg(unix)]
    #[test]
    fn host_absolute_targets_are_absolute() {
        assert!(is_absolute_target("/opt/viewer"));
    }

    #[test]
    fn relative_paths_resolve_against_cwd() {
        let cwd = to_slash(&std::env::current_dir().unwrap().to_string_lossy());
        let resolved = absolutize_slash("build/out").unwrap();
        assert_eq!(resolved, format!("{cwd}/build/out"));
    }
}
