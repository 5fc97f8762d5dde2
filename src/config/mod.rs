//! Configuration management
//!
//! This module reads the command-line tool's settings from the environment:
//! a default version byte and the log level.

pub mod settings;

pub use settings::{parse_version, Config, GLOBAL_CONFIG};
