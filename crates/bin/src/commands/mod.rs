//! Subcommand implementations.

pub mod flatten;
pub mod unpack;
