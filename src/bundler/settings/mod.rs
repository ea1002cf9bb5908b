//! Configuration structures for release operations.
//!
//! This module provides the resolved, immutable configuration handed to every
//! pipeline stage: release-wide metadata, per-application settings, extern
//! file entries, and a builder for constructing them programmatically.

mod builder;
mod core;
mod externs;
mod package;

// Re-export all public types
pub use builder::ReleaseConfigBuilder;
pub use core::ReleaseConfig;
pub use externs::ExternEntry;
pub use package::AppSpec;
