//! Parsing of `key = value;` version-definition headers.

use std::fmt;

/// Version components read from a header file.
///
/// Fields that never appear stay empty, so a header missing `patch` renders
/// as `1.2..4.abcd`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderVersion {
    /// Major component
    pub major: String,
    /// Minor component
    pub minor: String,
    /// Patch component
    pub patch: String,
    /// Build number, quotes removed
    pub build: String,
    /// Source reference (e.g. commit hash), quotes removed
    pub reference: String,
}

impl HeaderVersion {
    /// Scans header text line by line.
    ///
    /// A line counts only if it contains both `=` and `;`. Its value is the text
    /// after the first `=` up to the next `;`, trimmed. The component is picked by
    /// the first of `major`, `minor`, `patch`, `build`, `ref` found anywhere in the
    /// line; later lines overwrite earlier ones.
    pub fn parse(text: &str) -> Self {
        let mut version = Self::default();

        for line in text.lines() {
            if !line.contains('=') || !line.contains(';') {
                continue;
            }
            let token = line
                .split_once('=')
                .and_then(|(_, rest)| rest.split(';').next())
                .unwrap_or_default()
                .trim();

            if line.contains("major") {
                version.major = token.to_string();
            } else if line.contains("minor") {
                version.minor = token.to_string();
            } else if line.contains("patch") {
                version.patch = token.to_string();
            } else if line.contains("build") {
                version.build = token.replace('"', "");
            } else if line.contains("ref") {
                version.reference = token.replace('"', "");
            }
        }

        version
    }
}

impl fmt::Display for HeaderVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}",
            self.major, self.minor, self.patch, self.build, self.reference
        )
    }
}
