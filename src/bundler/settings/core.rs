//! Core ReleaseConfig struct and implementations.

use super::AppSpec;

/// Release-wide configuration.
///
/// Constructed once per run, either by [`crate::metadata::load_config`] or by
/// [`ReleaseConfigBuilder`](super::ReleaseConfigBuilder), and only ever read
/// afterwards. Paths are absolute and use forward slashes.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_inno::bundler::{AppSpec, ReleaseConfigBuilder};
///
/// # fn example() -> kodegen_bundler_inno::bundler::Result<()> {
/// let config = ReleaseConfigBuilder::new()
///     .version("2.0.0")
///     .compiler("C:/Program Files (x86)/Inno Setup 6/ISCC.exe")
///     .output_dir("dist")
///     .publisher("Example Inc.")
///     .homepage_url("https://example.com")
///     .app(AppSpec::new("{APP-GUID}", "Viewer", "viewer.exe", "build/viewer", "C:/Apps/Viewer"))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ReleaseConfig {
    /// Literal version or path to a `.h` version-definition file.
    version: String,

    /// Installer compiler executable (ISCC).
    compiler_path: String,

    /// Directory receiving staged trees, scripts and installers.
    output_dir: String,

    /// Publisher name written into every installer.
    publisher: String,

    /// Publisher/support/updates URL.
    homepage_url: String,

    /// Applications, in configuration order.
    apps: Vec<AppSpec>,
}

impl ReleaseConfig {
    /// Returns the configured version field, unresolved.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the installer compiler path as configured.
    pub fn compiler_path(&self) -> &str {
        &self.compiler_path
    }

    /// Returns the absolute, slash-normalized output directory.
    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    /// Returns the publisher name.
    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    /// Returns the homepage URL.
    pub fn homepage_url(&self) -> &str {
        &self.homepage_url
    }

    /// Returns the applications to release.
    pub fn apps(&self) -> &[AppSpec] {
        &self.apps
    }

    /// Creates a new ReleaseConfig (used by the resolver and builder).
    pub(crate) fn new(
        version: String,
        compiler_path: String,
        output_dir: String,
        publisher: String,
        homepage_url: String,
        apps: Vec<AppSpec>,
    ) -> Self {
        Self {
            version,
            compiler_path,
            output_dir,
            publisher,
            homepage_url,
            apps,
        }
    }
}
