//! Tooling & Integration Layer
//!
//! Command-line access to the resolver builder.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
