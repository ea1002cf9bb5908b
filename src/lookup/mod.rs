//! Latest-artifact lookup over a release directory.
//!
//! Answers "which installer of this application is newest" for update
//! checks: the newest file whose name contains the application name wins, and
//! its version is read from the file name (`Viewer_1.4.0.12.a1b2.exe` gives
//! `1.4.0.12`).

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::LazyLock;

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d+\.]+\d+").expect("version regex is valid"));

/// Description returned when the release directory cannot be listed.
pub const NOT_FOUND_DESCRIPTION: &str = "can not find app";

/// Lookup response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResponse {
    /// 0 on success, -1 when the directory is unreadable
    pub code: i32,
    /// Empty on success
    pub description: String,
    /// Present on success, even when nothing matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ArtifactInfo>,
}

/// The newest matching artifact.
///
/// All fields are empty (and `modified_time` is `"0"`) when no file matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArtifactInfo {
    /// Download URL: `<base_url>/<file name>`
    pub url: String,
    /// Version extracted from the file name
    pub version: String,
    /// Modification time, Unix seconds as a decimal string
    pub modified_time: String,
}

impl LookupResponse {
    /// Serializes the response as compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn not_found() -> Self {
        Self {
            code: -1,
            description: NOT_FOUND_DESCRIPTION.to_string(),
            content: None,
        }
    }
}

/// Extracts the first version-like run (`digits[.digits]...`) from a file name.
pub fn version_from_name(name: &str) -> Option<&str> {
    VERSION_RE.find(name).map(|m| m.as_str())
}

/// Finds the newest file in `dir` whose name contains `app_name`.
///
/// Only strictly newer files replace the current pick, so among equal
/// timestamps the first listed entry is kept. Files dated at or before the
/// Unix epoch are never picked. Entries whose metadata cannot be read are
/// skipped.
pub fn latest_artifact(dir: &Path, app_name: &str, base_url: &str) -> LookupResponse {
    log::info!("lookup: {} in {}", app_name, dir.display());

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("cannot list {}: {}", dir.display(), e);
            return LookupResponse::not_found();
        }
    };

    let mut newest: i64 = 0;
    let mut info = ArtifactInfo::default();

    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.contains(app_name) {
            continue;
        }
        let Some(modified) = entry.metadata().and_then(|m| m.modified()).ok() else {
            log::debug!("skipping {}: no modification time", name);
            continue;
        };
        let secs = DateTime::<Utc>::from(modified).timestamp();
        if secs > newest {
            newest = secs;
            info.version = version_from_name(&name).unwrap_or_default().to_string();
            info.url = format!("{base_url}/{name}");
        }
    }
    info.modified_time = newest.to_string();

    log::info!("lookup ok: {:?}", info);
    LookupResponse {
        code: 0,
        description: String::new(),
        content: Some(info),
    }
}
