//! Error types for bundler operations.
//!
//! Errors come in two tiers. [`Error`] is fatal: it propagates up to the CLI,
//! which aborts the release. [`Tolerated`] describes problems the pipeline
//! records and works around (a file that could not be opened, a missing
//! runtime redistributable, an unreadable version header).
//!
//! # Features
//!
//! - **Context trait**: Add context to errors similar to anyhow
//! - **ErrorExt trait**: Filesystem operations with automatic path context
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_inno::bundler::error::{Context, Error, ErrorExt, Result};
//! use std::path::Path;
//!
//! fn read_config(path: &Path) -> Result<serde_json::Value> {
//!     let text = std::fs::read_to_string(path).fs_context("reading config", path)?;
//!     serde_json::from_str::<serde_json::Value>(&text)
//!         .map_err(Error::from)
//!         .with_context(|| format!("parsing {}", path.display()))
//! }
//! ```

use std::{
    fmt::Display,
    io,
    path::{self, PathBuf},
};
use thiserror::Error as DeriveError;

/// Errors returned by the bundler.
///
/// Every variant aborts the release run.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// Error with context. Created by the [`Context`] trait.
    #[error("{0}: {1}")]
    Context(String, Box<Self>),

    /// File system error with path context.
    ///
    /// Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {path}: {error}")]
    Fs {
        /// Context describing the operation (e.g., "reading config file")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// Child process could not be spawned.
    #[error("failed to run command {command}: {error}")]
    CommandFailed {
        /// Command that failed to execute
        command: String,
        /// The underlying error
        error: io::Error,
    },

    /// The installer compiler ran but reported failure.
    #[error("installer compiler failed for {script} ({status}):\n{output}")]
    CompilerFailed {
        /// Script that was being compiled
        script: PathBuf,
        /// Exit status description
        status: String,
        /// Combined stdout and stderr of the compiler
        output: String,
    },

    /// Bytes could not be transferred after both file handles were opened.
    #[error("failed to copy {from} to {to}: {error}")]
    CopyFailed {
        /// Source file
        from: PathBuf,
        /// Destination file
        to: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// An application's install target is not an absolute path.
    #[error("invalid setup_target_path {path:?} for app '{app}': install targets must be absolute")]
    InvalidSetupTarget {
        /// Application display name
        app: String,
        /// Offending path
        path: String,
    },

    /// Path prefix stripping error.
    #[error("{0}")]
    StripError(#[from] path::StripPrefixError),

    /// Handlebars template rendering error.
    #[error("{0}")]
    HandleBarsError(#[from] handlebars::RenderError),

    /// Handlebars template parsing error.
    #[error("{0}")]
    Template(#[from] handlebars::TemplateError),

    /// JSON serialization/deserialization error.
    #[error("{0}")]
    JsonError(#[from] serde_json::error::Error),
}

/// Recoverable problems met while staging and versioning an application.
///
/// These are logged and collected into the staging report; the pipeline keeps
/// going with the affected item skipped or left at its default.
#[derive(Debug, DeriveError)]
pub enum Tolerated {
    /// Source file could not be inspected or opened.
    #[error("skipped {path}: cannot open source: {error}")]
    SourceUnavailable {
        /// Source path
        path: PathBuf,
        /// The underlying error
        error: io::Error,
    },

    /// Destination file could not be created.
    #[error("skipped {path}: cannot create destination: {error}")]
    DestinationUnavailable {
        /// Destination path
        path: PathBuf,
        /// The underlying error
        error: io::Error,
    },

    /// A nested entry of the build tree could not be read.
    #[error("skipped unreadable entry: {0}")]
    WalkEntry(#[from] walkdir::Error),

    /// Runtime redistributable installer missing from the working directory.
    #[error("runtime redistributable {path} not found; runtime check dropped")]
    RedistributableMissing {
        /// Expected location
        path: PathBuf,
    },

    /// Version header could not be read; the configured value is kept.
    #[error("cannot read version file {path}: {error}")]
    VersionFileUnreadable {
        /// Header path
        path: PathBuf,
        /// The underlying error
        error: io::Error,
    },

    /// The literal version marker could not be written.
    #[error("cannot write version marker {path}: {error}")]
    VersionMarkerUnwritten {
        /// Marker path
        path: PathBuf,
        /// The underlying error
        error: io::Error,
    },
}

/// Convenient type alias for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for adding context to errors.
///
/// Similar to `anyhow::Context` but integrated with bundler's Error type.
pub trait Context<T> {
    /// Add context to an error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;

    /// Add context to an error using a closure (lazy evaluation).
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> Context<T> for Result<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::Context(f().to_string(), Box::new(e)))
    }
}

/// Extension trait for filesystem operations with automatic path context.
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase describing the operation,
    /// e.g., "reading file", "creating directory", "copying binary".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}
