//! Windows installer release pipeline.
//!
//! This module stages each application's build output into a clean working
//! tree, resolves the release version, renders an Inno Setup script and
//! compiles it with ISCC.
//!
//! # Configuration
//!
//! Releases are described by a JSON document (see [`crate::metadata`]):
//!
//! ```json
//! {
//!   "version": "2.0.0",
//!   "compiler": "C:/Program Files (x86)/Inno Setup 6/ISCC.exe",
//!   "output": "dist",
//!   "publisher": "Example Inc.",
//!   "url": "https://example.com",
//!   "apps": [{
//!     "app_id": "{APP-GUID}",
//!     "app_name": "Viewer",
//!     "app_exe": "viewer.exe",
//!     "build_path": "build/viewer",
//!     "setup_target_path": "C:/Apps/Viewer",
//!     "vcredist": "",
//!     "extern_path": [{ "source": "shared/fonts", "target": "{app}/fonts", "override": false }]
//!   }]
//! }
//! ```
//!
//! # Pipeline
//!
//! | Step | Module | Failure |
//! |------|--------|---------|
//! | Stage build tree | `staging` | missing build dir is fatal, unreadable files are skipped |
//! | Resolve version | [`crate::version`] | unreadable header keeps the configured value |
//! | Generate script | `platform::windows::inno` | fatal |
//! | Compile | `platform::windows::inno` | fatal |
//!
//! # Integration
//!
//! ```no_run
//! use kodegen_bundler_inno::bundler::{AppSpec, Bundler, IgnoreMatcher, ReleaseConfigBuilder, Silent};
//! use std::path::Path;
//!
//! let config = ReleaseConfigBuilder::new()
//!     .version("2.0.0")
//!     .compiler("ISCC.exe")
//!     .output_dir("dist")
//!     .app(AppSpec::new("{APP-GUID}", "Viewer", "viewer.exe", "build/viewer", "C:/Apps/Viewer"))
//!     .build()?;
//!
//! let bundler = Bundler::new(&config, IgnoreMatcher::default(), Path::new("."), &Silent);
//! let prepared = bundler.release()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

mod builder;
pub mod error;
mod ignore;
pub mod platform;
mod settings;
mod staging;
pub mod utils;

// Public re-exports
pub use builder::{Bundler, PreparedApp, Progress, Silent};
pub use error::{Error, Result, Tolerated};
pub use ignore::{IGNORE_FILE, IgnoreMatcher};
pub use settings::{AppSpec, ExternEntry, ReleaseConfig, ReleaseConfigBuilder};
pub use staging::{REDISTRIBUTABLE_FILE, StageReport, stage_app};
