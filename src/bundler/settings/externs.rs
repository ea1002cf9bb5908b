//! Files bundled from outside an application's build output.

/// A file or directory installed alongside the application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternEntry {
    /// Absolute, slash-normalized source path on the release host.
    pub source_path: String,

    /// Destination directory, in installer syntax (e.g. `{app}/plugins`).
    pub target_path: String,

    /// Whether an existing file at the destination may be replaced.
    ///
    /// When false the installer leaves an existing file alone and never
    /// removes the file on uninstall.
    pub override_existing: bool,
}

impl ExternEntry {
    /// Creates an extern entry.
    pub fn new(
        source_path: impl Into<String>,
        target_path: impl Into<String>,
        override_existing: bool,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            target_path: target_path.into(),
            override_existing,
        }
    }
}
