//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing, settings resolution and the
//! command handlers.

mod args;
mod commands;
mod error;
mod settings;

pub use args::{Args, Command};
pub use commands::{handle_config_action, run_convert};
