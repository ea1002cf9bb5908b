//! Platform-specific installer backends.

pub mod windows;
