//! Command-line interface
//!
//! This module contains the CLI commands, argument parsing and the
//! dispatch from a parsed command to the codec.

pub mod commands;

pub use commands::{execute, Command, CommandOutput, Opt};
