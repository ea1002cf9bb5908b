//! Builder for constructing ReleaseConfig.

use super::{AppSpec, ReleaseConfig};
use crate::bundler::{
    error::{Error, Result},
    utils::path::{absolutize_slash, is_absolute_target, to_slash},
};

/// Builder for constructing [`ReleaseConfig`].
///
/// `build()` performs all path resolution: the output directory, build paths
/// and extern sources are made absolute (against the working directory) and
/// slash-normalized, each app's `work_path` is derived, and install targets
/// are checked for absoluteness.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_inno::bundler::{AppSpec, ExternEntry, ReleaseConfigBuilder};
///
/// # fn example() -> kodegen_bundler_inno::bundler::Result<()> {
/// let config = ReleaseConfigBuilder::new()
///     .version("include/version.h")
///     .output_dir("dist")
///     .app(
///         AppSpec::new("{APP-GUID}", "Viewer", "viewer.exe", "build/viewer", "C:/Apps/Viewer")
///             .with_redistributable("{VC-RUNTIME-GUID}")
///             .with_extern(ExternEntry::new("shared/fonts", "{app}/fonts", false)),
///     )
///     .build()?;
/// assert!(config.apps()[0].work_path.ends_with("/dist/Viewer"));
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ReleaseConfigBuilder {
    version: String,
    compiler_path: String,
    output_dir: Option<String>,
    publisher: String,
    homepage_url: String,
    apps: Vec<AppSpec>,
}

impl ReleaseConfigBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the version: a literal, or a path ending in `.h`.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the installer compiler path.
    pub fn compiler(mut self, path: impl Into<String>) -> Self {
        self.compiler_path = path.into();
        self
    }

    /// Sets the output directory.
    ///
    /// Default: the working directory
    pub fn output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Sets the publisher name.
    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = publisher.into();
        self
    }

    /// Sets the homepage URL.
    pub fn homepage_url(mut self, url: impl Into<String>) -> Self {
        self.homepage_url = url.into();
        self
    }

    /// Appends an application.
    pub fn app(mut self, app: AppSpec) -> Self {
        self.apps.push(app);
        self
    }

    /// Resolves paths and builds the configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSetupTarget`] if any app's install target is relative
    /// - [`Error::Fs`] if a path cannot be made absolute
    pub fn build(self) -> Result<ReleaseConfig> {
        let output_dir = absolutize_slash(self.output_dir.as_deref().unwrap_or("."))?;
        log::info!("output dir: {}", output_dir);

        let mut apps = Vec::with_capacity(self.apps.len());
        for mut app in self.apps {
            app.build_path = absolutize_slash(&app.build_path)?;
            log::info!("[{}] build path: {}", app.display_name, app.build_path);

            app.work_path = to_slash(&format!("{}/{}", output_dir, app.display_name));
            log::info!("[{}] work path: {}", app.display_name, app.work_path);

            if !is_absolute_target(&app.setup_target_path) {
                log::error!(
                    "[{}] invalid setup_target_path: {}",
                    app.display_name,
                    app.setup_target_path
                );
                return Err(Error::InvalidSetupTarget {
                    app: app.display_name,
                    path: app.setup_target_path,
                });
            }

            if app.redistributable_key.as_deref().is_some_and(str::is_empty) {
                app.redistributable_key = None;
            }

            for entry in &mut app.externs {
                entry.source_path = absolutize_slash(&entry.source_path)?;
                log::debug!("[{}] extern source: {}", app.display_name, entry.source_path);
            }

            apps.push(app);
        }

        Ok(ReleaseConfig::new(
            self.version,
            self.compiler_path,
            output_dir,
            self.publisher,
            self.homepage_url,
            apps,
        ))
    }
}
