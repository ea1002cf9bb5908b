//! Release version resolution.
//!
//! The configured version is either a literal (`"2.0.0"`) or the path of a C
//! header defining the version components:
//!
//! ```c
//! const int major = 1;
//! const int minor = 2;
//! const int patch = 3;
//! const char* build = "4";
//! const char* ref = "abcd";
//! ```
//!
//! Header versions render as `major.minor.patch.build.ref`. Literal versions are
//! used unchanged and recorded in a `version` marker file inside the staged tree.

mod header;

pub use header::HeaderVersion;

use crate::bundler::error::Tolerated;
use std::fmt;
use std::path::Path;

/// Suffix identifying a version-definition header.
pub const HEADER_SUFFIX: &str = ".h";

/// Marker file written into the staged tree for literal versions.
pub const VERSION_MARKER: &str = "version";

/// Outcome of resolving the configured version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedVersion {
    /// Used verbatim.
    Literal(String),
    /// Parsed from a version-definition header.
    Header(HeaderVersion),
    /// Header could not be read; the configured value is kept as-is.
    Unresolved(String),
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(v) | Self::Unresolved(v) => f.write_str(v),
            Self::Header(h) => h.fmt(f),
        }
    }
}

/// Resolved version plus any tolerated problem met along the way.
#[derive(Debug)]
pub struct VersionResolution {
    /// The version to use for this application
    pub version: ResolvedVersion,
    /// Recoverable problem, already logged
    pub problem: Option<Tolerated>,
}

/// Resolves the configured version field for one application.
///
/// Header files are read on every call so each application sees the same
/// result regardless of order. For literals, `<work_path>/version` receives the
/// value verbatim.
pub fn resolve(configured: &str, work_path: &Path) -> VersionResolution {
    if configured.ends_with(HEADER_SUFFIX) {
        return resolve_header(configured);
    }

    let marker = work_path.join(VERSION_MARKER);
    let problem = match std::fs::write(&marker, configured) {
        Ok(()) => {
            log::info!("create version file: {}", marker.display());
            None
        }
        Err(error) => {
            let problem = Tolerated::VersionMarkerUnwritten { path: marker, error };
            log::warn!("{}", problem);
            Some(problem)
        }
    };

    VersionResolution {
        version: ResolvedVersion::Literal(configured.to_string()),
        problem,
    }
}

fn resolve_header(path: &str) -> VersionResolution {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            let header = HeaderVersion::parse(&text);
            log::info!("app version: {}", header);
            VersionResolution {
                version: ResolvedVersion::Header(header),
                problem: None,
            }
        }
        Err(error) => {
            let problem = Tolerated::VersionFileUnreadable {
                path: path.into(),
                error,
            };
            log::warn!("{}", problem);
            VersionResolution {
                version: ResolvedVersion::Unresolved(path.to_string()),
                problem: Some(problem),
            }
        }
    }
}
