//! Per-application configuration.

use super::ExternEntry;

/// One application to stage and package.
///
/// `work_path` is derived from the release output directory and the display
/// name when the configuration is resolved. The staging pass owns that
/// directory: it is wiped and rebuilt on every run.
#[derive(Debug, Clone, Default)]
pub struct AppSpec {
    /// Installer AppId (usually a GUID in Inno Setup brace syntax).
    pub id: String,

    /// Product name shown in the installer; also names the staged directory.
    pub display_name: String,

    /// Main executable file name, relative to the install directory.
    pub exe_name: String,

    /// Absolute, slash-normalized build output directory.
    pub build_path: String,

    /// Absolute default install directory.
    pub setup_target_path: String,

    /// Uninstall registry key of the runtime redistributable, if one is needed.
    ///
    /// Default: None
    pub redistributable_key: Option<String>,

    /// Extra files bundled from outside the build output.
    pub externs: Vec<ExternEntry>,

    /// Staged tree location: `<output_dir>/<display_name>`.
    pub work_path: String,
}

impl AppSpec {
    /// Creates an application spec with no redistributable and no externs.
    ///
    /// `work_path` is filled in when the spec is added to a release
    /// configuration.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        exe_name: impl Into<String>,
        build_path: impl Into<String>,
        setup_target_path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            exe_name: exe_name.into(),
            build_path: build_path.into(),
            setup_target_path: setup_target_path.into(),
            ..Default::default()
        }
    }

    /// Sets the runtime redistributable registry key.
    pub fn with_redistributable(mut self, key: impl Into<String>) -> Self {
        self.redistributable_key = Some(key.into());
        self
    }

    /// Adds an extern entry.
    pub fn with_extern(mut self, entry: ExternEntry) -> Self {
        self.externs.push(entry);
        self
    }
}
