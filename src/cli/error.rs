//! Error type for CLI commands.

use std::path::PathBuf;

use ascii_ramp::config::ConfigError;
use ascii_ramp::error::ConvertError;

/// Any failure that ends the program with a non-zero exit code.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("Config file already exists: {}\nUse 'ascii-ramp config show' to view current settings.", .path.display())]
    ConfigExists { path: PathBuf },

    #[error("Failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
