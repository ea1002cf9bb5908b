//! Progress reporting seam between the pipeline and its front end.

/// Receives user-facing progress while a release runs.
///
/// Diagnostics still go through `log`; this is the short, human-oriented
/// channel the CLI renders in color.
pub trait Progress {
    /// Start of a new section (one per application, plus compilation).
    fn section(&self, title: &str);

    /// Informational step.
    fn info(&self, message: &str);

    /// A step finished successfully.
    fn success(&self, message: &str);

    /// Something was skipped or worked around.
    fn warn(&self, message: &str);
}

/// Discards all progress. Used by library callers and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {
    fn section(&self, _title: &str) {}
    fn info(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}
