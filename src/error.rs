//! Top-level error types for the release tool.
//!
//! This module defines the errors surfaced to the CLI together with
//! actionable recovery suggestions.

use crate::bundler::Error as PipelineError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all release operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Pipeline errors
    #[error("Bundler error: {0}")]
    Bundler(#[from] PipelineError),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// The configuration file does not exist
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path given on the command line (or the default)
        path: PathBuf,
    },

    /// The ignore list does not exist in the working directory
    #[error("Ignore list not found: {path}")]
    IgnoreListNotFound {
        /// Expected location
        path: PathBuf,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            BundlerError::Cli(CliError::ConfigNotFound { path }) => vec![
                format!(
                    "Create {} or pass the config path as the first argument",
                    path.display()
                ),
                "Run from the directory that holds the release configuration".to_string(),
            ],
            BundlerError::Cli(CliError::IgnoreListNotFound { path }) => vec![format!(
                "Create {} (an empty file ignores nothing)",
                path.display()
            )],
            BundlerError::Bundler(e) => pipeline_suggestions(e),
            BundlerError::Json(_) => {
                vec!["Check the configuration file for JSON syntax errors".to_string()]
            }
            BundlerError::Io(_) => {
                vec!["Check file permissions and available disk space".to_string()]
            }
        }
    }
}

fn pipeline_suggestions(error: &PipelineError) -> Vec<String> {
    match error {
        PipelineError::Context(_, inner) => pipeline_suggestions(inner),
        PipelineError::InvalidSetupTarget { .. } => {
            vec!["Use an absolute install path such as C:/Program Files/MyApp".to_string()]
        }
        PipelineError::CommandFailed { .. } => vec![
            "Install Inno Setup and point \"compiler\" at ISCC.exe".to_string(),
            "Or put ISCC on PATH and set \"compiler\" to its name".to_string(),
        ],
        PipelineError::CompilerFailed { script, .. } => vec![
            format!(
                "Open {} in the Inno Setup IDE to locate the failing line",
                script.display()
            ),
            "Check that every extern source path exists".to_string(),
        ],
        PipelineError::CopyFailed { .. } => {
            vec!["Check available disk space in the output directory".to_string()]
        }
        PipelineError::JsonError(_) => {
            vec!["Check the configuration file for JSON syntax errors".to_string()]
        }
        PipelineError::Fs { path, .. } => {
            vec![format!("Check that {} exists and is accessible", path.display())]
        }
        _ => vec!["Check the error message above for specific details".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::error::Context;

    #[test]
    fn setup_target_suggestion_survives_context() {
        let inner: crate::bundler::Result<()> = Err(PipelineError::InvalidSetupTarget {
            app: "Viewer".into(),
            path: "Apps/Viewer".into(),
        });
        let err = BundlerError::from(inner.context("resolving config").unwrap_err());
        assert!(err.recovery_suggestions()[0].contains("absolute install path"));
    }

    #[test]
    fn missing_config_suggests_path() {
        let err = BundlerError::from(CliError::ConfigNotFound {
            path: PathBuf::from("release.json"),
        });
        assert!(err.recovery_suggestions()[0].contains("release.json"));
    }
}
