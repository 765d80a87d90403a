//! Command-line surface: argument definition and display-level plumbing.

pub mod args;
pub mod constants;
