//! Inno Setup script generation.
//!
//! Builds a typed view of one application's installer (defines, file
//! directives, optional runtime check) and renders it through handlebars.

use super::{
    template::{FILE_DIRECTIVE, ISS_TEMPLATE, RUNTIME_CODE, RUNTIME_RUN},
    utils,
};
use crate::bundler::{
    AppSpec, ExternEntry, ReleaseConfig,
    error::{Context, Error, Result},
    staging::REDISTRIBUTABLE_FILE,
};
use handlebars::Handlebars;
use serde::Serialize;
use std::path::PathBuf;

/// Registry path holding uninstall entries; the runtime key is appended.
pub const UNINSTALL_REGISTRY_PATH: &str = r"SOFTWARE\Microsoft\Windows\CurrentVersion\Uninstall";

/// Flags on every `[Files]` entry.
const BASE_FLAGS: &str = "ignoreversion recursesubdirs createallsubdirs";

/// Extra flags for extern files that must not replace or remove existing files.
const KEEP_EXISTING_FLAGS: &str = "onlyifdoesntexist uninsneveruninstall";

/// Subdirectory of the staged tree never installed by the program-files entry.
const EXCLUDED_SUBDIR: &str = r"\config";

/// A `#define` line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Define {
    /// Preprocessor name
    pub name: &'static str,
    /// Value, inserted verbatim between double quotes
    pub value: String,
}

/// A `[Files]` entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileDirective {
    /// `Source:` value
    pub source: String,
    /// `Excludes:` value, if any
    pub excludes: Option<&'static str>,
    /// `DestDir:` value
    pub dest_dir: String,
    /// Space-separated `Flags:` value
    pub flags: String,
}

impl FileDirective {
    fn program_files() -> Self {
        Self {
            source: "{#AppSourceDir}/*".into(),
            excludes: Some(EXCLUDED_SUBDIR),
            dest_dir: "{app}/".into(),
            flags: BASE_FLAGS.into(),
        }
    }

    fn from_extern(entry: &ExternEntry) -> Self {
        let flags = if entry.override_existing {
            BASE_FLAGS.to_string()
        } else {
            format!("{BASE_FLAGS} {KEEP_EXISTING_FLAGS}")
        };
        Self {
            source: entry.source_path.clone(),
            excludes: None,
            dest_dir: entry.target_path.clone(),
            flags,
        }
    }
}

/// Runtime redistributable check and conditional install.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RuntimeCheck {
    /// Installer file name inside `{app}`
    pub installer: &'static str,
    /// Full uninstall registry path queried for a `Version` value
    pub registry_path: String,
}

/// Everything the template needs for one application.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptView<'a> {
    /// `#define` block, in emission order
    pub defines: Vec<Define>,
    /// Installer AppId
    pub app_id: &'a str,
    /// `DefaultDirName`
    pub setup_target: &'a str,
    /// The staged tree entry
    pub program_files: Vec<FileDirective>,
    /// One entry per extern
    pub extern_files: Vec<FileDirective>,
    /// Present only when the redistributable was staged
    pub runtime: Option<RuntimeCheck>,
}

impl<'a> ScriptView<'a> {
    /// Assembles the view for `app`.
    ///
    /// `redistributable_key` is the key to query, or None when the
    /// redistributable is not shipped with this installer.
    pub fn new(
        config: &ReleaseConfig,
        app: &'a AppSpec,
        version: &str,
        redistributable_key: Option<&str>,
    ) -> Self {
        let defines = vec![
            define("AppName", &app.display_name),
            define("AppVersion", version),
            define("AppPublisher", config.publisher()),
            define("AppURL", config.homepage_url()),
            define("AppExeName", &app.exe_name),
            define("AppSourceDir", &app.work_path),
        ];

        let mut program_files = Vec::new();
        if !app.work_path.is_empty() {
            program_files.push(FileDirective::program_files());
        }

        Self {
            defines,
            app_id: &app.id,
            setup_target: &app.setup_target_path,
            program_files,
            extern_files: app.externs.iter().map(FileDirective::from_extern).collect(),
            runtime: redistributable_key.map(|key| RuntimeCheck {
                installer: REDISTRIBUTABLE_FILE,
                registry_path: format!(r"{UNINSTALL_REGISTRY_PATH}\{key}"),
            }),
        }
    }
}

fn define(name: &'static str, value: &str) -> Define {
    Define {
        name,
        value: value.to_string(),
    }
}

/// Renders the installer-definition document for a view.
pub fn render_script(view: &ScriptView<'_>) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_partial("file_directive", FILE_DIRECTIVE)
        .map_err(Error::from)
        .context("registering file directive partial")?;
    handlebars
        .register_partial("runtime_run", RUNTIME_RUN)
        .map_err(Error::from)
        .context("registering runtime run partial")?;
    handlebars
        .register_partial("runtime_code", RUNTIME_CODE)
        .map_err(Error::from)
        .context("registering runtime code partial")?;
    handlebars
        .register_template_string("installer.iss", ISS_TEMPLATE)
        .map_err(Error::from)
        .context("registering ISS template")?;

    handlebars
        .render("installer.iss", view)
        .map_err(Error::from)
        .context("rendering ISS template")
}

/// Generates `<output_dir>/<app_name>_<version>.iss` for one application.
///
/// # Returns
/// Path to the generated script
pub fn generate_iss_script(
    config: &ReleaseConfig,
    app: &AppSpec,
    version: &str,
    redistributable_key: Option<&str>,
) -> Result<PathBuf> {
    let view = ScriptView::new(config, app, version, redistributable_key);
    let content = render_script(&view)?;

    let iss_path = utils::script_path(config.output_dir(), &app.display_name, version);
    log::info!("create iss file: {}", iss_path.display());
    utils::write_script(&iss_path, &content)?;
    log::info!("create iss file ok: {}", iss_path.display());

    Ok(iss_path)
}
