//! Windows installer release library.
//!
//! This library stages application build outputs into clean working trees,
//! derives the release version, generates Inno Setup scripts and compiles
//! them. It also answers "latest artifact" queries over a release directory.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod lookup;
pub mod metadata;
pub mod version;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
