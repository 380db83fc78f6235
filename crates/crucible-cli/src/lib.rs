//! Crucible CLI library.
//!
//! Helpers shared by the `crucible-cli` binary: grid input, search budget
//! configuration and output formatting.

pub mod config;
pub mod input;
pub mod output;
