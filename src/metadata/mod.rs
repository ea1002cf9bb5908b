//! Release configuration loading from a single JSON document.

use crate::bundler::{
    AppSpec, ExternEntry, ReleaseConfig, ReleaseConfigBuilder,
    error::{Context, ErrorExt, Result},
};
use serde::Deserialize;
use std::path::Path;

/// Configuration file used when none is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Release document as written by the user.
///
/// Every field is optional; missing values default to empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigDocument {
    /// Literal version or path to a `.h` version-definition file
    pub version: String,
    /// Installer compiler executable
    pub compiler: String,
    /// Output directory
    pub output: String,
    /// Publisher name
    pub publisher: String,
    /// Publisher URL
    pub url: String,
    /// Applications
    pub apps: Vec<AppDocument>,
}

/// One entry of the `apps` array.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppDocument {
    /// Installer AppId
    pub app_id: String,
    /// Display name
    pub app_name: String,
    /// Main executable
    pub app_exe: String,
    /// Build output directory
    pub build_path: String,
    /// Default install directory (must be absolute)
    pub setup_target_path: String,
    /// Runtime redistributable registry key; empty for none
    pub vcredist: String,
    /// Extra files bundled from outside the build output
    pub extern_path: Vec<ExternDocument>,
}

/// One entry of an app's `extern_path` array.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExternDocument {
    /// Source path
    pub source: String,
    /// Install destination
    pub target: String,
    /// Replace existing files at the destination
    #[serde(rename = "override")]
    pub override_existing: bool,
}

impl ConfigDocument {
    /// Parses a configuration document from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Resolves the document into an immutable [`ReleaseConfig`].
    pub fn resolve(self) -> Result<ReleaseConfig> {
        let mut builder = ReleaseConfigBuilder::new()
            .version(self.version)
            .compiler(self.compiler)
            .publisher(self.publisher)
            .homepage_url(self.url);

        if !self.output.is_empty() {
            builder = builder.output_dir(self.output);
        }

        for app in self.apps {
            let mut spec = AppSpec::new(
                app.app_id,
                app.app_name,
                app.app_exe,
                app.build_path,
                app.setup_target_path,
            );
            if !app.vcredist.is_empty() {
                spec = spec.with_redistributable(app.vcredist);
            }
            for ext in app.extern_path {
                spec = spec.with_extern(ExternEntry::new(
                    ext.source,
                    ext.target,
                    ext.override_existing,
                ));
            }
            builder = builder.app(spec);
        }

        builder.build()
    }
}

/// Loads and resolves the release configuration at `path`.
///
/// # Errors
///
/// Fails if the file cannot be read, is not valid JSON, or resolves to an
/// invalid configuration (see [`ReleaseConfigBuilder::build`]).
pub fn load_config(path: &Path) -> Result<ReleaseConfig> {
    log::info!("load config: {}", path.display());

    let text = std::fs::read_to_string(path).fs_context("reading config file", path)?;
    let document = ConfigDocument::from_json(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    let config = document.resolve()?;

    log::info!("load config ok: {} app(s)", config.apps().len());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::Error;

    const SAMPLE: &str = r#"{
        "version": "2.0.0",
        "compiler": "C:/Inno/ISCC.exe",
        "output": "dist",
        "publisher": "Example Inc.",
        "url": "https://example.com",
        "apps": [{
            "app_id": "{1234}",
            "app_name": "Viewer",
            "app_exe": "viewer.exe",
            "build_path": "build/viewer",
            "setup_target_path": "C:\\Apps\\Viewer",
            "vcredist": "{VC-KEY}",
            "extern_path": [
                {"source": "shared/fonts", "target": "{app}/fonts", "override": false},
                {"source": "shared/plugins", "target": "{app}/plugins", "override": true}
            ]
        }]
    }"#;

    #[test]
    fn parses_full_document() {
        let config = ConfigDocument::from_json(SAMPLE).unwrap().resolve().unwrap();
        assert_eq!(config.version(), "2.0.0");
        assert_eq!(config.publisher(), "Example Inc.");
        assert_eq!(config.homepage_url(), "https://example.com");

        let app = &config.apps()[0];
        assert_eq!(app.id, "{1234}");
        assert_eq!(app.redistributable_key.as_deref(), Some("{VC-KEY}"));
        assert_eq!(app.externs.len(), 2);
        assert!(!app.externs[0].override_existing);
        assert!(app.externs[1].override_existing);
        assert!(app.work_path.ends_with("/dist/Viewer"));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let doc = ConfigDocument::from_json(r#"{"apps": [{"app_name": "A"}]}"#).unwrap();
        assert_eq!(doc.version, "");
        assert_eq!(doc.apps[0].vcredist, "");
        assert!(doc.apps[0].extern_path.is_empty());
    }

    #[test]
    fn relative_install_target_fails_resolution() {
        let doc = ConfigDocument::from_json(
            r#"{"apps": [{"app_name": "A", "setup_target_path": "relative"}]}"#,
        )
        .unwrap();
        assert!(matches!(doc.resolve(), Err(Error::InvalidSetupTarget { .. })));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ConfigDocument::from_json("{ not json").is_err());
    }
}
