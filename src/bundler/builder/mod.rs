//! Release orchestration.
//!
//! This module provides the [`Bundler`] orchestrator that runs staging,
//! version resolution and script generation for each application, then hands
//! the scripts to the installer compiler.
//!
//! # Module Organization
//!
//! - [`orchestrator`] - Main [`Bundler`] struct and pipeline steps
//! - [`progress`] - [`Progress`] reporting seam and the [`Silent`] reporter

mod orchestrator;
mod progress;

pub use orchestrator::{Bundler, PreparedApp};
pub use progress::{Progress, Silent};
