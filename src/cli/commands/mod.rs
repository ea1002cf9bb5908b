//! Command execution functions for release operations.

mod release;

pub use release::execute_release;
