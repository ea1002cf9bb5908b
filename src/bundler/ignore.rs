//! Exclusion patterns applied while staging a build tree.
//!
//! A path is excluded when any pattern either is a literal suffix of the
//! slash-normalized path, or matches it as a shell glob (`*`, `?`, `[...]`).
//! Globs never cross `/` (`**` is just two `*`, and `[^...]` negates like
//! `[!...]`): they are tried against the whole path and, for patterns without
//! a separator, against the final path segment.

use crate::bundler::{
    error::{ErrorExt, Result},
    utils::path::to_slash,
};
use glob::{MatchOptions, Pattern};
use std::path::Path;

/// Ignore file read from the working directory.
pub const IGNORE_FILE: &str = "ignore.txt";

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug, Clone)]
struct IgnorePattern {
    raw: String,
    glob: Option<Pattern>,
    segment_only: bool,
}

/// Rewrites an ignore pattern into `glob` crate syntax.
///
/// Runs of `*` collapse to one `*`, so `**` never recurses across `/`, and a
/// class negated with `^` is spelled with `!`.
fn single_segment_glob(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                out.push('*');
                while chars.next_if_eq(&'*').is_some() {}
            }
            '[' => {
                out.push('[');
                if chars.next_if(|&n| n == '^' || n == '!').is_some() {
                    out.push('!');
                }
                // A `]` right after the opening bracket is literal
                if chars.next_if_eq(&']').is_some() {
                    out.push(']');
                }
                for c in chars.by_ref() {
                    out.push(c);
                    if c == ']' {
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }
    out
}

impl IgnorePattern {
    fn new(raw: &str) -> Self {
        let glob = match Pattern::new(&single_segment_glob(raw)) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                log::debug!(
                    "ignore pattern {:?} is not a valid glob ({}); suffix match only",
                    raw,
                    e
                );
                None
            }
        };
        Self {
            raw: raw.to_string(),
            glob,
            segment_only: !raw.contains('/'),
        }
    }

    fn matches(&self, path: &str) -> bool {
        if path.ends_with(&self.raw) {
            return true;
        }
        let Some(glob) = &self.glob else {
            return false;
        };
        if glob.matches_with(path, GLOB_OPTIONS) {
            return true;
        }
        self.segment_only
            && path
                .rsplit('/')
                .next()
                .is_some_and(|name| glob.matches_with(name, GLOB_OPTIONS))
    }
}

/// Loaded exclusion list. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreMatcher {
    /// Builds a matcher from pattern file text: one pattern per line,
    /// surrounding whitespace trimmed, blank lines dropped.
    pub fn parse(text: &str) -> Self {
        Self::from_patterns(text.lines().map(str::trim).filter(|l| !l.is_empty()))
    }

    /// Builds a matcher from individual patterns.
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| IgnorePattern::new(p.as_ref()))
                .collect(),
        }
    }

    /// Reads the pattern file at `path`.
    ///
    /// A missing file is an error; an empty file is a valid (empty) policy.
    pub fn load(path: &Path) -> Result<Self> {
        log::info!("load ignore list: {}", path.display());
        let text = std::fs::read_to_string(path).fs_context("reading ignore file", path)?;
        let matcher = Self::parse(&text);
        log::info!("load ignore list ok: {:?}", matcher.patterns());
        Ok(matcher)
    }

    /// Returns the patterns in file order.
    pub fn patterns(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.raw.as_str()).collect()
    }

    /// Returns true when `path` should be left out of the staged tree.
    pub fn should_ignore(&self, path: impl AsRef<Path>) -> bool {
        let path = to_slash(&path.as_ref().to_string_lossy());
        self.patterns.iter().any(|p| p.matches(&path))
    }
}
