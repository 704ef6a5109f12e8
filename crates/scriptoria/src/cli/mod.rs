//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the scriptoria binary.

mod commands;
mod run;

pub use commands::{Cli, Commands, OutputArgs, OutputFormat};
pub use run::{run_analyze, run_generate, show_config};
