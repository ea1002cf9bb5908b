//! Shared helpers for the bundler.

pub mod fs;
pub mod path;
