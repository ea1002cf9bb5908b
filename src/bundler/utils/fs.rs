//! File system utilities for staging.
//!
//! Provides directory recreation and a byte-for-byte file copy that separates
//! tolerated failures (a handle could not be opened) from fatal ones (the
//! transfer broke after both handles were open).

use crate::bundler::error::{Error, ErrorExt, Result, Tolerated};
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

/// Result of a best-effort copy.
#[derive(Debug)]
pub enum CopyOutcome {
    /// File was copied; carries the number of bytes written.
    Copied(u64),
    /// Source was a directory; nothing to do.
    NotAFile,
    /// Copy skipped for a tolerated reason.
    Skipped(Tolerated),
}

/// Creates all of the directories of the specified path, erasing it first if specified.
pub fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path)?;
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path).fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(Error::Fs {
            context: "removing directory",
            path: path.to_path_buf(),
            error: e,
        }),
    }
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Symlinks to files are followed. Failing to inspect or open the source, or
/// to create the destination, is tolerated and reported as
/// [`CopyOutcome::Skipped`]. A failure while transferring bytes is fatal.
pub fn copy_file(from: &Path, to: &Path) -> Result<CopyOutcome> {
    match fs::metadata(from) {
        Ok(meta) if meta.is_dir() => return Ok(CopyOutcome::NotAFile),
        Ok(_) => {}
        Err(error) => {
            return Ok(skipped(Tolerated::SourceUnavailable {
                path: from.into(),
                error,
            }));
        }
    }

    let mut src = match File::open(from) {
        Ok(file) => file,
        Err(error) => {
            return Ok(skipped(Tolerated::SourceUnavailable {
                path: from.into(),
                error,
            }));
        }
    };

    if let Some(dest_dir) = to.parent() {
        // A failure here surfaces as a create error below
        let _ = fs::create_dir_all(dest_dir);
    }

    let dst = match File::create(to) {
        Ok(file) => file,
        Err(error) => {
            return Ok(skipped(Tolerated::DestinationUnavailable {
                path: to.into(),
                error,
            }));
        }
    };

    let mut writer = BufWriter::new(dst);
    let copied = io::copy(&mut src, &mut writer)
        .and_then(|n| writer.flush().map(|()| n))
        .map_err(|error| Error::CopyFailed {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            error,
        })?;

    Ok(CopyOutcome::Copied(copied))
}

fn skipped(problem: Tolerated) -> CopyOutcome {
    log::warn!("{}", problem);
    CopyOutcome::Skipped(problem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_creates_parents_and_preserves_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.bin");
        let bytes: Vec<u8> = (0..=255u8).cycle().take(10_000).collect();
        fs::write(&src, &bytes).unwrap();

        let dst = dir.path().join("out/deep/a.bin");
        let outcome = copy_file(&src, &dst).unwrap();

        assert!(matches!(outcome, CopyOutcome::Copied(10_000)));
        assert_eq!(fs::read(&dst).unwrap(), bytes);
    }

    #[test]
    fn missing_source_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = copy_file(&dir.path().join("nope"), &dir.path().join("x")).unwrap();
        assert!(matches!(
            outcome,
            CopyOutcome::Skipped(Tolerated::SourceUnavailable { .. })
        ));
        assert!(!dir.path().join("x").exists());
    }

    #[test]
    fn directory_source_is_not_copied() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = copy_file(dir.path(), &dir.path().join("x")).unwrap();
        assert!(matches!(outcome, CopyOutcome::NotAFile));
    }

    #[test]
    fn uncreatable_destination_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("a.txt");
        fs::write(&src, "a").unwrap();
        // Parent of the destination is a regular file
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let outcome = copy_file(&src, &blocker.join("a.txt")).unwrap();
        assert!(matches!(
            outcome,
            CopyOutcome::Skipped(Tolerated::DestinationUnavailable { .. })
        ));
    }

    #[test]
    fn create_dir_all_with_erase_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let work = dir.path().join("work");
        fs::create_dir_all(work.join("stale")).unwrap();
        fs::write(work.join("stale/old.txt"), "old").unwrap();

        create_dir_all(&work, true).unwrap();

        assert!(work.is_dir());
        assert_eq!(fs::read_dir(&work).unwrap().count(), 0);
    }

    #[test]
    fn remove_missing_dir_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        remove_dir_all(&dir.path().join("never-existed")).unwrap();
    }
}
