//! Windows installer formats.

pub mod inno;
