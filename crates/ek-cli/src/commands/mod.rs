//! Subcommand implementations for the `ek` binary.

pub mod run;
pub mod stats;
